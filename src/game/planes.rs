//! Plane anchor callbacks
//!
//! Detected horizontal surfaces get a visual overlay. Additions are always
//! honored; refinements only matter while the player is still placing the
//! cup, so the overlays freeze for the rest of the game once the cup is
//! down.

use super::state::{GamePhase, GameSession};
use crate::scene::{PlaneAnchor, SceneCommand};

impl GameSession {
    /// A new horizontal surface was detected.
    pub fn on_plane_added(&mut self, anchor: &PlaneAnchor) -> Vec<SceneCommand> {
        if !self.anchors.upsert(*anchor) {
            // The session re-announced a known anchor; keep the refreshed
            // estimate but don't spawn a second overlay
            log::debug!("duplicate add for plane {:?}", anchor.id);
            return Vec::new();
        }
        log::debug!("plane {:?} detected, extent {:?}", anchor.id, anchor.extent);
        vec![SceneCommand::SpawnPlaneVisual {
            plane: anchor.id,
            center: anchor.center,
            extent: anchor.extent,
        }]
    }

    /// A tracked surface estimate was refined.
    pub fn on_plane_updated(&mut self, anchor: &PlaneAnchor) -> Vec<SceneCommand> {
        // Overlays only update while the cup is still being placed
        if self.phase != GamePhase::Placing {
            return Vec::new();
        }
        if !self.anchors.contains(anchor.id) {
            // Refinement for an anchor we never saw added; skip it
            return Vec::new();
        }
        self.anchors.upsert(*anchor);
        vec![SceneCommand::UpdatePlaneVisual {
            plane: anchor.id,
            center: anchor.center,
            extent: anchor.extent,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::PlaneId;
    use crate::tuning::Tuning;
    use glam::{Vec2, Vec3};

    fn anchor(id: u32, extent: f32) -> PlaneAnchor {
        PlaneAnchor {
            id: PlaneId(id),
            center: Vec3::new(0.0, -0.5, -1.0),
            extent: Vec2::splat(extent),
        }
    }

    #[test]
    fn test_added_plane_spawns_overlay() {
        let mut session = GameSession::new(Tuning::default());
        let commands = session.on_plane_added(&anchor(7, 0.5));
        assert_eq!(
            commands,
            vec![SceneCommand::SpawnPlaneVisual {
                plane: PlaneId(7),
                center: Vec3::new(0.0, -0.5, -1.0),
                extent: Vec2::splat(0.5),
            }]
        );
        assert_eq!(session.anchors().len(), 1);
    }

    #[test]
    fn test_duplicate_add_spawns_nothing() {
        let mut session = GameSession::new(Tuning::default());
        session.on_plane_added(&anchor(7, 0.5));
        assert!(session.on_plane_added(&anchor(7, 0.9)).is_empty());
        // The estimate itself was still refreshed
        assert_eq!(
            session.anchors().get(PlaneId(7)).unwrap().extent,
            Vec2::splat(0.9)
        );
    }

    #[test]
    fn test_update_refits_overlay_while_placing() {
        let mut session = GameSession::new(Tuning::default());
        session.on_plane_added(&anchor(7, 0.5));
        let commands = session.on_plane_updated(&anchor(7, 1.5));
        assert_eq!(
            commands,
            vec![SceneCommand::UpdatePlaneVisual {
                plane: PlaneId(7),
                center: Vec3::new(0.0, -0.5, -1.0),
                extent: Vec2::splat(1.5),
            }]
        );
    }

    #[test]
    fn test_update_for_unknown_plane_is_a_noop() {
        let mut session = GameSession::new(Tuning::default());
        assert!(session.on_plane_updated(&anchor(9, 1.0)).is_empty());
    }

    #[test]
    fn test_updates_freeze_once_cup_is_down() {
        let mut session = GameSession::new(Tuning::default());
        session.on_plane_added(&anchor(7, 0.5));
        session.set_phase(GamePhase::Aiming);

        assert!(session.on_plane_updated(&anchor(7, 2.0)).is_empty());
        // Frozen overlay also means frozen registry estimate
        assert_eq!(
            session.anchors().get(PlaneId(7)).unwrap().extent,
            Vec2::splat(0.5)
        );

        // Additions are still honored in any phase
        assert!(!session.on_plane_added(&anchor(8, 0.4)).is_empty());
    }
}
