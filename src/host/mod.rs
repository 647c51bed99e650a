//! Host abstraction
//!
//! A live host wires the controller to a real AR/physics engine: it forwards
//! frame, anchor, touch and contact callbacks, answers the center hit-test,
//! and applies the returned scene commands (dispatching prompt updates to
//! its interaction thread).
//!
//! The shipped host is headless: [`ScriptedSession`] replays a recorded or
//! synthetic timeline through the controller and applies commands to a
//! [`SceneMirror`], which is all the demo binary and the integration tests
//! need. Playback only; no physics or tracking is simulated here.

mod mirror;
mod scripted;

pub use mirror::{PlaneVisual, SceneMirror};
pub use scripted::{ScriptError, ScriptEvent, ScriptedSession, demo_script, load_script};
