//! Game tuning knobs
//!
//! Everything that shapes the game feel lives here with the shipped values
//! as defaults. A JSON file can override any subset of fields; a missing or
//! unreadable file falls back to defaults.

use std::fs;
use std::io;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Tunable game parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Throw ===
    /// Divisor turning vertical swipe distance (screen units) into throw force.
    pub throw_force_divisor: f32,
    /// Upward component of the launch direction per unit force.
    pub launch_up_factor: f32,
    /// Forward component of the launch direction per unit force.
    pub launch_forward_factor: f32,

    // === Placement ===
    /// Cup opacity while previewing placement.
    pub cup_preview_opacity: f32,
    /// Cup opacity once placed.
    pub cup_placed_opacity: f32,
    /// Cup distance ahead of the viewer when no surface is hit, meters.
    pub preview_distance: f32,
    /// Scale applied to the loaded cup asset.
    pub cup_scale: Vec3,

    // === Aiming ===
    /// Distance ahead of the viewer the ball is held while aiming, meters.
    pub aim_hold_distance: f32,

    // === Bodies ===
    /// Ball collision radius, meters.
    pub ball_radius: f32,
    pub ball_restitution: f32,
    /// Continuous collision detection threshold for the ball, meters.
    pub ball_ccd_threshold: f32,
    pub cup_mass: f32,
    pub cup_restitution: f32,

    // === Water sensor ===
    /// Water sensor offset above the cup origin, meters.
    pub water_offset_y: f32,
    /// Water cylinder radius as a fraction of cup width.
    pub water_radius_factor: f32,
    /// Water cylinder height as a fraction of cup height.
    pub water_height_factor: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            throw_force_divisor: 100.0,
            launch_up_factor: 3.0,
            launch_forward_factor: 2.0,

            cup_preview_opacity: 0.88,
            cup_placed_opacity: 1.0,
            preview_distance: 1.0,
            cup_scale: Vec3::new(0.44, 0.48, 0.44),

            aim_hold_distance: 0.5,

            ball_radius: 0.02,
            ball_restitution: 1.2,
            ball_ccd_threshold: 0.04,
            cup_mass: 1000.0,
            cup_restitution: 1.0,

            water_offset_y: 0.24,
            water_radius_factor: 0.38,
            water_height_factor: 0.1,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults when the file
    /// is missing or malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("ignoring malformed tuning file {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("using default tuning");
                Self::default()
            }
        }
    }

    /// Write the current tuning as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }

    /// Viewer-local launch direction for a throw of the given force.
    #[inline]
    pub fn launch_direction(&self, force: f32) -> Vec3 {
        Vec3::new(
            0.0,
            force * self.launch_up_factor,
            -force * self.launch_forward_factor,
        )
    }
}
