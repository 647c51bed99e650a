//! Contact resolution
//!
//! The physics world reports contacts between categorized bodies. The only
//! one the game cares about is ball-into-water while the ball has actually
//! been thrown; everything else is filtered out here.

use super::state::{GamePhase, GameSession};
use crate::physics::{BodyCategory, ContactEvent};
use crate::prompt;
use crate::scene::{GameNode, SceneCommand};

impl GameSession {
    /// Physics-contact callback.
    ///
    /// The callback may arrive off the interaction thread; the returned
    /// prompt command is ordering-insensitive and safe for the host to
    /// dispatch to its interaction thread fire-and-forget.
    pub fn on_contact(&mut self, contact: &ContactEvent) -> Vec<SceneCommand> {
        let pair = contact.pair();
        if !pair.is(BodyCategory::Ball, BodyCategory::Water) {
            // Ball-cup rim hits and the like; physics handles the response
            return Vec::new();
        }
        if self.phase != GamePhase::Thrown {
            // Residual contact while the ball is held or being repositioned
            // must not re-trigger scoring
            return Vec::new();
        }

        self.set_phase(GamePhase::Scored);
        log::info!("ball sunk");
        vec![
            SceneCommand::ShowPrompt(prompt::SUNK_IT),
            SceneCommand::ZeroBallVelocity,
            SceneCommand::SetBallGravity(false),
            SceneCommand::MoveNode {
                node: GameNode::Ball,
                position: self.water_world_position(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::BodyCategory::{Ball, Cup, Water};
    use crate::tuning::Tuning;
    use glam::Vec3;

    fn thrown_session() -> GameSession {
        let mut session = GameSession::new(Tuning::default());
        session.cup_position = Vec3::new(0.2, -0.5, -1.0);
        session.set_phase(GamePhase::Thrown);
        session
    }

    #[test]
    fn test_ball_water_contact_scores() {
        let mut session = thrown_session();
        let commands = session.on_contact(&ContactEvent::new(Ball, Water));

        assert_eq!(session.phase(), GamePhase::Scored);
        assert_eq!(
            commands,
            vec![
                SceneCommand::ShowPrompt(prompt::SUNK_IT),
                SceneCommand::ZeroBallVelocity,
                SceneCommand::SetBallGravity(false),
                SceneCommand::MoveNode {
                    node: GameNode::Ball,
                    // Snapped to the water sensor: cup plus local offset
                    position: Vec3::new(0.2, -0.26, -1.0),
                },
            ]
        );
    }

    #[test]
    fn test_reversed_report_order_scores_identically() {
        let mut forward = thrown_session();
        let mut reversed = thrown_session();
        assert_eq!(
            forward.on_contact(&ContactEvent::new(Ball, Water)),
            reversed.on_contact(&ContactEvent::new(Water, Ball)),
        );
        assert_eq!(reversed.phase(), GamePhase::Scored);
    }

    #[test]
    fn test_contact_outside_thrown_is_ignored() {
        for phase in [GamePhase::Placing, GamePhase::Aiming, GamePhase::Scored] {
            let mut session = GameSession::new(Tuning::default());
            session.set_phase(phase);
            let commands = session.on_contact(&ContactEvent::new(Water, Ball));
            assert!(commands.is_empty());
            assert_eq!(session.phase(), phase);
        }
    }

    #[test]
    fn test_scoring_happens_once_per_throw() {
        let mut session = thrown_session();
        assert!(!session.on_contact(&ContactEvent::new(Ball, Water)).is_empty());
        // The same contact delivered again finds the session already Scored
        assert!(session.on_contact(&ContactEvent::new(Ball, Water)).is_empty());
        assert_eq!(session.phase(), GamePhase::Scored);
    }

    #[test]
    fn test_cup_contacts_never_score() {
        let mut session = thrown_session();
        assert!(session.on_contact(&ContactEvent::new(Ball, Cup)).is_empty());
        assert!(session.on_contact(&ContactEvent::new(Cup, Water)).is_empty());
        assert_eq!(session.phase(), GamePhase::Thrown);
    }
}
