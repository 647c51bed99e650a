//! Game controller module
//!
//! The controller core is pure and deterministic: every handler consumes a
//! typed callback input, mutates only the [`GameSession`] context, and
//! returns the scene commands for the host to apply. No engine types, no
//! I/O, no threads.

mod contact;
mod frame;
mod planes;
mod state;
mod touch;

pub use frame::FrameInput;
pub use state::{GamePhase, GameSession};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{BodyCategory, ContactEvent};
    use crate::scene::{HitResult, Pose};
    use crate::tuning::Tuning;
    use glam::{Vec2, Vec3};
    use proptest::prelude::*;

    /// A host-side event fed to the session in sequence.
    #[derive(Debug, Clone)]
    enum Event {
        Frame { has_hit: bool },
        TouchBegan { y: f32 },
        TouchEnded { y: f32 },
        Contact { a: BodyCategory, b: BodyCategory },
    }

    fn category() -> impl Strategy<Value = BodyCategory> {
        prop_oneof![
            Just(BodyCategory::Ball),
            Just(BodyCategory::Cup),
            Just(BodyCategory::Water),
        ]
    }

    fn event() -> impl Strategy<Value = Event> {
        prop_oneof![
            any::<bool>().prop_map(|has_hit| Event::Frame { has_hit }),
            (0f32..800.0).prop_map(|y| Event::TouchBegan { y }),
            (0f32..800.0).prop_map(|y| Event::TouchEnded { y }),
            (category(), category()).prop_map(|(a, b)| Event::Contact { a, b }),
        ]
    }

    /// The transition table: which phase changes an event may cause.
    fn transition_allowed(from: GamePhase, to: GamePhase, event: &Event) -> bool {
        use GamePhase::*;
        if from == to {
            return true;
        }
        match (from, to) {
            (Placing, Aiming) | (Aiming, Thrown) | (Thrown, Aiming) | (Scored, Placing) => {
                matches!(event, Event::TouchEnded { .. })
            }
            (Thrown, Scored) => matches!(
                event,
                Event::Contact { a, b }
                    if ContactEvent::new(*a, *b)
                        .pair()
                        .is(BodyCategory::Ball, BodyCategory::Water)
            ),
            _ => false,
        }
    }

    fn apply(session: &mut GameSession, event: &Event) {
        match event {
            Event::Frame { has_hit } => {
                let hit = has_hit.then(|| HitResult::at(Vec3::new(0.0, -0.5, -1.0)));
                session.on_frame(&FrameInput {
                    time: 0.0,
                    viewer: Some(Pose::IDENTITY),
                    center_hit: hit,
                });
            }
            Event::TouchBegan { y } => {
                session.on_touch_began(Vec2::new(100.0, *y));
            }
            Event::TouchEnded { y } => {
                session.on_touch_ended(Vec2::new(100.0, *y), Some(Pose::IDENTITY));
            }
            Event::Contact { a, b } => {
                session.on_contact(&ContactEvent::new(*a, *b));
            }
        }
    }

    proptest! {
        /// For every event sequence, phases stay within the four variants
        /// (guaranteed by the enum) and change only along the table's edges,
        /// driven by the right kind of event.
        #[test]
        fn phase_transitions_follow_the_table(
            events in prop::collection::vec(event(), 0..64)
        ) {
            let mut session = GameSession::new(Tuning::default());
            for event in &events {
                let before = session.phase();
                apply(&mut session, event);
                let after = session.phase();
                prop_assert!(
                    transition_allowed(before, after, event),
                    "illegal transition {:?} -> {:?} on {:?}",
                    before, after, event
                );
            }
        }

        /// The single ball node is attached exactly while a game is running
        /// (any phase but Placing).
        #[test]
        fn ball_attached_iff_past_placement(
            events in prop::collection::vec(event(), 0..64)
        ) {
            let mut session = GameSession::new(Tuning::default());
            for event in &events {
                apply(&mut session, event);
                prop_assert_eq!(
                    session.ball_attached(),
                    session.phase() != GamePhase::Placing
                );
            }
        }
    }
}
