//! Collision categories and body parameters
//!
//! The host physics world does the actual simulation; this module pins down
//! which bodies exist, how they are categorized, and which category pairs
//! collide or report contacts. Categories replace the original bitmask
//! scheme with an enum and an explicit pairwise table, which makes the
//! contact-canonicalization invariant something the compiler and the tests
//! can see.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Collision category of a game body.
///
/// The derived ordering (`Ball < Cup < Water`) fixes the canonical order of
/// a contact pair; it mirrors the original 1/2/4 mask ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum BodyCategory {
    Ball,
    Cup,
    Water,
}

/// An unordered category pair, stored in canonical (ascending) order.
///
/// Contact callbacks may report the two bodies in arbitrary order; building
/// a `CategoryPair` first makes ball-vs-water and water-vs-ball the same
/// event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryPair {
    lower: BodyCategory,
    upper: BodyCategory,
}

impl CategoryPair {
    pub fn new(a: BodyCategory, b: BodyCategory) -> Self {
        if a <= b {
            Self { lower: a, upper: b }
        } else {
            Self { lower: b, upper: a }
        }
    }

    pub fn lower(&self) -> BodyCategory {
        self.lower
    }

    pub fn upper(&self) -> BodyCategory {
        self.upper
    }

    /// True if this pair is the given two categories, in either order.
    pub fn is(&self, a: BodyCategory, b: BodyCategory) -> bool {
        *self == Self::new(a, b)
    }

    /// Whether the physics world should resolve this pair with a collision
    /// response. Only the ball bounces off the cup; the water volume is a
    /// pure sensor.
    pub fn collides(&self) -> bool {
        self.is(BodyCategory::Ball, BodyCategory::Cup)
    }

    /// Whether the physics world should report contacts for this pair.
    pub fn reports_contact(&self) -> bool {
        self.is(BodyCategory::Ball, BodyCategory::Water)
            || self.is(BodyCategory::Ball, BodyCategory::Cup)
    }
}

/// A contact reported by the physics world, categories in callback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEvent {
    pub a: BodyCategory,
    pub b: BodyCategory,
}

impl ContactEvent {
    pub fn new(a: BodyCategory, b: BodyCategory) -> Self {
        Self { a, b }
    }

    /// The contact's canonical category pair.
    pub fn pair(&self) -> CategoryPair {
        CategoryPair::new(self.a, self.b)
    }
}

/// How a body participates in the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    /// Immovable; other bodies collide with it.
    Static,
    /// Simulated rigid body.
    Dynamic,
}

/// Parameters handed to the host physics world when it builds a body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodySpec {
    pub category: BodyCategory,
    pub kind: BodyKind,
    pub mass: f32,
    pub restitution: f32,
    /// Whether gravity acts on the body at creation time. The ball only
    /// gains gravity at the moment it is thrown.
    pub affected_by_gravity: bool,
    /// Continuous collision detection threshold, meters. Zero disables CCD.
    pub ccd_threshold: f32,
}

impl BodySpec {
    /// The static target cup.
    pub fn cup(tuning: &Tuning) -> Self {
        Self {
            category: BodyCategory::Cup,
            kind: BodyKind::Static,
            mass: tuning.cup_mass,
            restitution: tuning.cup_restitution,
            affected_by_gravity: false,
            ccd_threshold: 0.0,
        }
    }

    /// The thrown ball. Small and fast, so CCD is on.
    pub fn ball(tuning: &Tuning) -> Self {
        Self {
            category: BodyCategory::Ball,
            kind: BodyKind::Dynamic,
            mass: 1.0,
            restitution: tuning.ball_restitution,
            affected_by_gravity: false,
            ccd_threshold: tuning.ball_ccd_threshold,
        }
    }

    /// The water sensor volume inside the cup: contact reporting only, no
    /// collision response, never falls.
    pub fn water(_tuning: &Tuning) -> Self {
        Self {
            category: BodyCategory::Water,
            kind: BodyKind::Dynamic,
            mass: 1.0,
            restitution: 0.0,
            affected_by_gravity: false,
            ccd_threshold: 0.0,
        }
    }
}

/// Dimensions of the water sensor cylinder, derived from the cup's bounding
/// box so the sensor tracks the asset's proportions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterVolume {
    pub radius: f32,
    pub height: f32,
}

impl WaterVolume {
    pub fn for_cup(cup_width: f32, cup_height: f32, tuning: &Tuning) -> Self {
        Self {
            radius: cup_width * tuning.water_radius_factor,
            height: cup_height * tuning.water_height_factor,
        }
    }
}
