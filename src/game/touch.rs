//! Touch input
//!
//! Touch-end drives every phase transition except scoring: committing the
//! cup placement, throwing the ball, retrieving a thrown ball, and
//! restarting after a score. Touch-begin only matters while aiming, where
//! it records the gesture's vertical start coordinate.

use glam::Vec2;

use super::state::{GamePhase, GameSession};
use crate::prompt;
use crate::scene::{GameNode, Pose, SceneCommand};

impl GameSession {
    /// Touch-begin callback with the screen-space touch location.
    pub fn on_touch_began(&mut self, point: Vec2) -> Vec<SceneCommand> {
        match self.phase {
            GamePhase::Aiming => {
                // Gesture start anchors the throw-force calculation
                self.touch_start_y = Some(point.y);
                vec![SceneCommand::HidePrompt]
            }
            _ => Vec::new(),
        }
    }

    /// Touch-end callback with the screen-space touch location and the
    /// viewer pose at release time (needed to orient a throw).
    pub fn on_touch_ended(&mut self, point: Vec2, viewer: Option<Pose>) -> Vec<SceneCommand> {
        match self.phase {
            GamePhase::Placing => self.commit_placement(),
            GamePhase::Aiming => self.throw(point, viewer),
            GamePhase::Thrown => self.retrieve_ball(),
            GamePhase::Scored => self.restart(),
        }
    }

    /// Place the cup, if the preview is on a tracked surface.
    fn commit_placement(&mut self) -> Vec<SceneCommand> {
        if !self.can_place {
            return vec![SceneCommand::ShowPrompt(prompt::PLACE_ON_SURFACE)];
        }

        self.set_phase(GamePhase::Aiming);
        self.ball_attached = true;
        log::info!("cup placed at {:?}", self.cup_position);
        vec![
            SceneCommand::SetOpacity {
                node: GameNode::Cup,
                opacity: self.tuning.cup_placed_opacity,
            },
            SceneCommand::AttachBall,
            SceneCommand::ShowPrompt(prompt::TOUCH_AND_DRAG),
        ]
    }

    /// Launch the ball from the recorded swipe.
    fn throw(&mut self, point: Vec2, viewer: Option<Pose>) -> Vec<SceneCommand> {
        let Some(start_y) = self.touch_start_y.take() else {
            // Release without a recorded start (the gesture began in another
            // phase); nothing to throw
            return Vec::new();
        };
        let Some(viewer) = viewer else {
            // Tracking lost at release; skip the throw
            return Vec::new();
        };

        let force = (start_y - point.y).abs() / self.tuning.throw_force_divisor;
        let impulse = viewer.convert_vector(self.tuning.launch_direction(force));

        self.set_phase(GamePhase::Thrown);
        log::info!("ball thrown with force {:.2}", force);
        vec![
            SceneCommand::SetBallGravity(true),
            SceneCommand::ApplyBallImpulse(impulse),
        ]
    }

    /// A tap while the ball is out brings it back to the aiming hold.
    fn retrieve_ball(&mut self) -> Vec<SceneCommand> {
        self.set_phase(GamePhase::Aiming);
        vec![
            SceneCommand::ZeroBallVelocity,
            SceneCommand::SetBallGravity(false),
        ]
    }

    /// Restart after a score: back to the translucent placement preview.
    fn restart(&mut self) -> Vec<SceneCommand> {
        self.set_phase(GamePhase::Placing);
        self.ball_attached = false;
        vec![
            SceneCommand::SetOpacity {
                node: GameNode::Cup,
                opacity: self.tuning.cup_preview_opacity,
            },
            SceneCommand::DetachBall,
            SceneCommand::HidePrompt,
        ]
    }
}
