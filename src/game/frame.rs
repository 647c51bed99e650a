//! Per-frame update
//!
//! The host calls [`GameSession::on_frame`] once per rendered frame. Only
//! the Placing and Aiming phases do per-frame work: placement preview
//! follows the center hit-test, and the aimed ball rides in front of the
//! viewer. Thrown and Scored leave the scene to the physics world.

use glam::Vec3;

use super::state::{GamePhase, GameSession};
use crate::scene::{GameNode, HitResult, Pose, SceneCommand};

/// Data the host samples for one rendered frame.
///
/// `center_hit` is the answer to the screen-center hit-test against tracked
/// planes; hosts may skip the query whenever [`GameSession::wants_center_hit`]
/// is false and pass `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Frame timestamp, seconds.
    pub time: f64,
    /// Current tracked viewer pose, absent while tracking is lost.
    pub viewer: Option<Pose>,
    /// Screen-center hit-test result, absent when no surface is under the
    /// reticle (or the query was skipped).
    pub center_hit: Option<HitResult>,
}

impl GameSession {
    /// True when the host should run the screen-center hit-test this frame.
    /// Placement preview is the only consumer of the query.
    pub fn wants_center_hit(&self) -> bool {
        self.phase == GamePhase::Placing
    }

    /// Render-frame callback.
    pub fn on_frame(&mut self, frame: &FrameInput) -> Vec<SceneCommand> {
        match self.phase {
            GamePhase::Placing => self.preview_placement(frame),
            GamePhase::Aiming => self.hold_ball(frame),
            // Ball is under physics control; nothing to do per frame
            GamePhase::Thrown | GamePhase::Scored => Vec::new(),
        }
    }

    /// Track the cup under the reticle while placing.
    fn preview_placement(&mut self, frame: &FrameInput) -> Vec<SceneCommand> {
        match frame.center_hit {
            Some(HitResult { point }) => {
                self.cup_position = point;
                self.can_place = true;
            }
            None => {
                // Off any tracked surface: placement is not allowed, and the
                // cup parks a fixed distance ahead of the viewer.
                self.can_place = false;
                let Some(viewer) = frame.viewer else {
                    // Tracking lost too; skip the move this frame
                    return Vec::new();
                };
                let local = Vec3::new(0.0, 0.0, -self.tuning.preview_distance);
                self.cup_position = viewer.convert_position(local);
            }
        }

        // The water sensor is re-seated every preview frame
        self.water_local = Vec3::new(0.0, self.tuning.water_offset_y, 0.0);

        vec![
            SceneCommand::MoveNode {
                node: GameNode::Cup,
                position: self.cup_position,
            },
            SceneCommand::MoveNode {
                node: GameNode::Water,
                position: self.water_local,
            },
        ]
    }

    /// Keep the ball a fixed distance in front of the viewer while aiming.
    fn hold_ball(&mut self, frame: &FrameInput) -> Vec<SceneCommand> {
        let Some(viewer) = frame.viewer else {
            // No tracked pose this frame; the ball keeps its last position
            return Vec::new();
        };
        let local = Vec3::new(0.0, 0.0, -self.tuning.aim_hold_distance);
        vec![SceneCommand::MoveNode {
            node: GameNode::Ball,
            position: viewer.convert_position(local),
        }]
    }
}
