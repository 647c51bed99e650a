//! Scene mirror
//!
//! A host-side record of what the controller has asked the scene to look
//! like. A live host would mutate engine nodes instead; the mirror lets the
//! headless host and the tests observe the same surface.

use std::collections::BTreeMap;

use glam::{Vec2, Vec3};

use crate::scene::{GameNode, PlaneId, SceneCommand};

/// A plane overlay as last commanded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneVisual {
    pub center: Vec3,
    pub extent: Vec2,
}

/// Applied state of every node the controller commands.
#[derive(Debug, Clone)]
pub struct SceneMirror {
    /// Cup position, world space.
    pub cup_position: Vec3,
    pub cup_opacity: f32,
    /// Water sensor position, cup-local space.
    pub water_local: Vec3,
    /// Ball position, world space (as last commanded; in flight the real
    /// engine owns it).
    pub ball_position: Vec3,
    pub ball_attached: bool,
    pub ball_gravity: bool,
    /// Net impulse applied since the last velocity reset.
    pub last_impulse: Option<Vec3>,
    pub prompt_text: &'static str,
    pub prompt_visible: bool,
    pub planes: BTreeMap<PlaneId, PlaneVisual>,
}

impl Default for SceneMirror {
    fn default() -> Self {
        Self {
            cup_position: Vec3::ZERO,
            cup_opacity: 1.0,
            water_local: Vec3::ZERO,
            ball_position: Vec3::ZERO,
            ball_attached: false,
            ball_gravity: false,
            last_impulse: None,
            prompt_text: "",
            prompt_visible: false,
            planes: BTreeMap::new(),
        }
    }
}

impl SceneMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one command the way a live host would apply it to the engine.
    pub fn apply(&mut self, command: &SceneCommand) {
        match command {
            SceneCommand::MoveNode { node, position } => match node {
                GameNode::Cup => self.cup_position = *position,
                GameNode::Ball => self.ball_position = *position,
                GameNode::Water => self.water_local = *position,
            },
            SceneCommand::SetOpacity { node, opacity } => {
                if *node == GameNode::Cup {
                    self.cup_opacity = *opacity;
                }
            }
            SceneCommand::AttachBall => self.ball_attached = true,
            SceneCommand::DetachBall => self.ball_attached = false,
            SceneCommand::SetBallGravity(enabled) => self.ball_gravity = *enabled,
            SceneCommand::ZeroBallVelocity => self.last_impulse = None,
            SceneCommand::ApplyBallImpulse(impulse) => {
                self.last_impulse =
                    Some(self.last_impulse.unwrap_or(Vec3::ZERO) + *impulse);
            }
            SceneCommand::ShowPrompt(text) => {
                self.prompt_text = text;
                self.prompt_visible = true;
            }
            SceneCommand::HidePrompt => self.prompt_visible = false,
            SceneCommand::SpawnPlaneVisual {
                plane,
                center,
                extent,
            }
            | SceneCommand::UpdatePlaneVisual {
                plane,
                center,
                extent,
            } => {
                self.planes.insert(
                    *plane,
                    PlaneVisual {
                        center: *center,
                        extent: *extent,
                    },
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_route_to_the_right_node() {
        let mut mirror = SceneMirror::new();
        mirror.apply(&SceneCommand::MoveNode {
            node: GameNode::Cup,
            position: Vec3::new(1.0, 2.0, 3.0),
        });
        mirror.apply(&SceneCommand::MoveNode {
            node: GameNode::Water,
            position: Vec3::new(0.0, 0.24, 0.0),
        });
        assert_eq!(mirror.cup_position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(mirror.water_local, Vec3::new(0.0, 0.24, 0.0));
        assert_eq!(mirror.ball_position, Vec3::ZERO);
    }

    #[test]
    fn test_velocity_reset_clears_impulse() {
        let mut mirror = SceneMirror::new();
        mirror.apply(&SceneCommand::ApplyBallImpulse(Vec3::new(0.0, 4.5, -3.0)));
        assert_eq!(mirror.last_impulse, Some(Vec3::new(0.0, 4.5, -3.0)));
        mirror.apply(&SceneCommand::ZeroBallVelocity);
        assert_eq!(mirror.last_impulse, None);
    }

    #[test]
    fn test_prompt_hide_keeps_text() {
        let mut mirror = SceneMirror::new();
        mirror.apply(&SceneCommand::ShowPrompt("touch and drag"));
        mirror.apply(&SceneCommand::HidePrompt);
        assert!(!mirror.prompt_visible);
        assert_eq!(mirror.prompt_text, "touch and drag");
    }
}
