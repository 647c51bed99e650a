//! Game session state
//!
//! All controller state lives in [`GameSession`]: the phase, the placement
//! flag, the recorded gesture start, the plane registry, and a mirror of the
//! node placements the controller has commanded. Handlers in the sibling
//! modules mutate nothing else.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::prompt;
use crate::scene::{AnchorRegistry, GameNode, SceneCommand};
use crate::tuning::Tuning;

/// Current phase of the placement → aim → throw → score loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Previewing cup placement against tracked surfaces.
    #[default]
    Placing,
    /// Cup is down; ball held in front of the viewer, waiting for a swipe.
    Aiming,
    /// Ball is in flight (or at rest after missing).
    Thrown,
    /// Ball landed in the water.
    Scored,
}

/// The game-session context passed to every callback.
///
/// One session is one game. The engine-side scene graph is mutated only
/// through the [`SceneCommand`] lists the handlers return; the session keeps
/// its own record of the placements it has commanded (`cup_position`,
/// `water_local`) so the contact handler can snap the ball into the water
/// without querying the engine.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) phase: GamePhase,
    /// Whether the last placement preview landed on a tracked surface.
    pub(crate) can_place: bool,
    /// Vertical screen coordinate recorded at gesture start while aiming.
    pub(crate) touch_start_y: Option<f32>,
    /// Last commanded cup position, world space.
    pub(crate) cup_position: Vec3,
    /// Last commanded water-sensor position, cup-local space.
    pub(crate) water_local: Vec3,
    /// Whether the ball node is currently attached to the scene.
    pub(crate) ball_attached: bool,
    /// Latest estimate per detected plane.
    pub(crate) anchors: AnchorRegistry,
    pub(crate) tuning: Tuning,
}

impl GameSession {
    pub fn new(tuning: Tuning) -> Self {
        let water_local = Vec3::new(0.0, tuning.water_offset_y, 0.0);
        Self {
            phase: GamePhase::Placing,
            can_place: false,
            touch_start_y: None,
            cup_position: Vec3::ZERO,
            water_local,
            ball_attached: false,
            anchors: AnchorRegistry::new(),
            tuning,
        }
    }

    /// Commands that put the scene in its initial look: translucent preview
    /// cup, water sensor seated in it, and the opening prompt.
    pub fn bootstrap(&self) -> Vec<SceneCommand> {
        vec![
            SceneCommand::SetOpacity {
                node: GameNode::Cup,
                opacity: self.tuning.cup_preview_opacity,
            },
            SceneCommand::MoveNode {
                node: GameNode::Water,
                position: self.water_local,
            },
            SceneCommand::ShowPrompt(prompt::PLACE_CUP),
        ]
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Whether the last placement preview may be committed.
    pub fn can_place(&self) -> bool {
        self.can_place
    }

    /// Whether the ball node is attached to the scene.
    pub fn ball_attached(&self) -> bool {
        self.ball_attached
    }

    /// World-space position of the water sensor (cup position plus the
    /// sensor's cup-local offset; the cup is never rotated).
    pub fn water_world_position(&self) -> Vec3 {
        self.cup_position + self.water_local
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn anchors(&self) -> &AnchorRegistry {
        &self.anchors
    }

    pub(crate) fn set_phase(&mut self, next: GamePhase) {
        log::debug!("phase {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }
}
