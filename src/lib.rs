//! Cup Toss - an augmented-reality cup pong game core
//!
//! Core modules:
//! - `game`: State-driven controller (placement, aiming, throwing, scoring)
//! - `physics`: Collision categories and body parameters for the host physics world
//! - `scene`: Engine-facing vocabulary (nodes, commands, poses, plane anchors)
//! - `host`: Scripted headless session for demos and integration tests
//! - `tuning`: Data-driven game feel
//!
//! The host AR/graphics/physics engine is an external collaborator: plane
//! tracking, hit-testing, rigid-body dynamics and contact generation all live
//! there. This crate consumes the engine's callbacks as typed inputs and
//! answers with [`scene::SceneCommand`] lists for the host to apply.

pub mod game;
pub mod host;
pub mod physics;
pub mod scene;
pub mod tuning;

pub use game::{FrameInput, GamePhase, GameSession};
pub use tuning::Tuning;

/// On-screen prompt copy
pub mod prompt {
    /// Shown while previewing cup placement.
    pub const PLACE_CUP: &str = "tap to place cup";
    /// Shown when the player taps with no tracked surface under the reticle.
    pub const PLACE_ON_SURFACE: &str = "place on surface";
    /// Shown once the cup is down and the ball is live.
    pub const TOUCH_AND_DRAG: &str = "touch and drag";
    /// Shown when the ball lands in the water.
    pub const SUNK_IT: &str = "sunk it";
}
