//! Engine-facing scene vocabulary
//!
//! The controller never holds engine node handles. It names its nodes with
//! [`GameNode`], describes every mutation as a [`SceneCommand`], and leaves
//! applying them to the host. Commands are plain data and `Send`, so a host
//! may apply prompt updates on its interaction thread.

pub mod anchor;
pub mod pose;

pub use anchor::{AnchorRegistry, HitResult, PlaneAnchor, PlaneId};
pub use pose::Pose;

use glam::{Vec2, Vec3};

/// The scene nodes the controller owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameNode {
    /// The target cup, a static body resting on (or previewing over) a plane.
    Cup,
    /// The thrown ball, the one dynamic body in the game.
    Ball,
    /// The water sensor volume, a child of the cup.
    Water,
}

/// A mutation the controller asks the host scene graph to apply.
///
/// Positions are world space, with one exception: the water sensor is a
/// child of the cup, so [`SceneCommand::MoveNode`] for [`GameNode::Water`]
/// carries a cup-local position.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    /// Reposition a game node.
    MoveNode { node: GameNode, position: Vec3 },
    /// Set a game node's opacity.
    SetOpacity { node: GameNode, opacity: f32 },
    /// Add the ball node to the scene root.
    AttachBall,
    /// Remove the ball node from its parent.
    DetachBall,
    /// Toggle whether gravity acts on the ball's rigid body.
    SetBallGravity(bool),
    /// Reset the ball's linear velocity to zero.
    ZeroBallVelocity,
    /// Apply a world-space impulse to the ball's rigid body.
    ApplyBallImpulse(Vec3),
    /// Show the on-screen prompt with the given text.
    ShowPrompt(&'static str),
    /// Hide the prompt without changing its text.
    HidePrompt,
    /// Create a visual overlay for a newly detected plane.
    SpawnPlaneVisual {
        plane: PlaneId,
        center: Vec3,
        extent: Vec2,
    },
    /// Refit an existing plane overlay to a refined estimate.
    UpdatePlaneVisual {
        plane: PlaneId,
        center: Vec3,
        extent: Vec2,
    },
}

impl SceneCommand {
    /// Prompt mutations are the only commands a host may defer to its
    /// interaction thread; they are ordering-insensitive.
    pub fn is_prompt(&self) -> bool {
        matches!(self, SceneCommand::ShowPrompt(_) | SceneCommand::HidePrompt)
    }
}
