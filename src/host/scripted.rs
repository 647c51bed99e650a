//! Scripted session playback
//!
//! Replays an AR timeline (frames, plane anchors, touches, contacts)
//! through a [`GameSession`]. Scripts are plain data and serde-loadable, so
//! a recorded live session and a hand-written test scenario drive the
//! controller identically.

use std::fmt;
use std::fs;
use std::path::Path;

use glam::{Quat, Vec2, Vec3};
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::mirror::SceneMirror;
use crate::game::{FrameInput, GameSession};
use crate::physics::{BodyCategory, ContactEvent};
use crate::scene::{HitResult, PlaneAnchor, PlaneId, Pose, SceneCommand};
use crate::tuning::Tuning;

/// One step of an AR timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// A rendered frame: the tracked viewer pose and the center hit-test
    /// answer the engine would give if asked this frame.
    Frame {
        time: f64,
        viewer: Option<Pose>,
        center_hit: Option<HitResult>,
    },
    /// The session detected a new horizontal surface.
    PlaneDetected { anchor: PlaneAnchor },
    /// The session refined a known surface estimate.
    PlaneRefined { anchor: PlaneAnchor },
    TouchBegan { point: Vec2 },
    TouchEnded { point: Vec2 },
    /// The physics world reported a contact between two bodies.
    Contact { a: BodyCategory, b: BodyCategory },
}

/// Failure loading a script file.
#[derive(Debug)]
pub enum ScriptError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Io(err) => write!(f, "failed to read script: {}", err),
            ScriptError::Parse(err) => write!(f, "failed to parse script: {}", err),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScriptError::Io(err) => Some(err),
            ScriptError::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ScriptError {
    fn from(err: std::io::Error) -> Self {
        ScriptError::Io(err)
    }
}

impl From<serde_json::Error> for ScriptError {
    fn from(err: serde_json::Error) -> Self {
        ScriptError::Parse(err)
    }
}

/// Load a JSON script file.
pub fn load_script(path: impl AsRef<Path>) -> Result<Vec<ScriptEvent>, ScriptError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// A headless host: a [`GameSession`] plus the [`SceneMirror`] its commands
/// are applied to.
pub struct ScriptedSession {
    game: GameSession,
    mirror: SceneMirror,
    /// Last tracked viewer pose, handed to touch handlers at release time.
    viewer: Option<Pose>,
    /// Prompt commands issued from contact callbacks; a live host dispatches
    /// these to its interaction thread, so playback defers them to the end
    /// of the step.
    deferred: Vec<SceneCommand>,
}

impl ScriptedSession {
    pub fn new(tuning: Tuning) -> Self {
        let game = GameSession::new(tuning);
        let mut mirror = SceneMirror::new();
        for command in game.bootstrap() {
            mirror.apply(&command);
        }
        Self {
            game,
            mirror,
            viewer: None,
            deferred: Vec::new(),
        }
    }

    pub fn game(&self) -> &GameSession {
        &self.game
    }

    pub fn mirror(&self) -> &SceneMirror {
        &self.mirror
    }

    /// Deliver one timeline event and apply the resulting commands.
    pub fn step(&mut self, event: &ScriptEvent) {
        let commands = match event {
            ScriptEvent::Frame {
                time,
                viewer,
                center_hit,
            } => {
                self.viewer = *viewer;
                // The hit-test is a query; skip it when the controller
                // doesn't want one, as a live host would
                let center_hit = if self.game.wants_center_hit() {
                    *center_hit
                } else {
                    None
                };
                self.game.on_frame(&FrameInput {
                    time: *time,
                    viewer: *viewer,
                    center_hit,
                })
            }
            ScriptEvent::PlaneDetected { anchor } => self.game.on_plane_added(anchor),
            ScriptEvent::PlaneRefined { anchor } => self.game.on_plane_updated(anchor),
            ScriptEvent::TouchBegan { point } => self.game.on_touch_began(*point),
            ScriptEvent::TouchEnded { point } => self.game.on_touch_ended(*point, self.viewer),
            ScriptEvent::Contact { a, b } => {
                let commands = self.game.on_contact(&ContactEvent::new(*a, *b));
                // Contact callbacks arrive off the interaction thread;
                // prompt updates hop back fire-and-forget
                let (prompts, rest): (Vec<_>, Vec<_>) =
                    commands.into_iter().partition(SceneCommand::is_prompt);
                self.deferred.extend(prompts);
                rest
            }
        };

        for command in &commands {
            self.mirror.apply(command);
        }
        for command in std::mem::take(&mut self.deferred) {
            self.mirror.apply(&command);
        }
    }

    /// Replay a whole script.
    pub fn run(&mut self, script: &[ScriptEvent]) {
        for event in script {
            log::trace!("script event {:?}", event);
            self.step(event);
        }
    }
}

/// Built-in demo timeline: the room is scanned, a tabletop appears, the
/// player places the cup, clangs a first throw off the rim, retrieves the
/// ball, sinks the second throw, and restarts.
///
/// The seed only jitters the plane-refinement extents; the gameplay beats
/// are fixed.
pub fn demo_script(seed: u64) -> Vec<ScriptEvent> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let viewer = Pose::new(Vec3::new(0.0, 1.4, 0.0), Quat::IDENTITY);
    let table = PlaneId(1);
    let table_center = Vec3::new(0.0, 0.7, -1.2);
    let table_hit = HitResult::at(Vec3::new(0.05, 0.7, -1.25));

    let mut script = Vec::new();
    let mut clock = 0.0_f64;
    let mut frame = |script: &mut Vec<ScriptEvent>, hit: Option<HitResult>| {
        clock += 1.0 / 60.0;
        script.push(ScriptEvent::Frame {
            time: clock,
            viewer: Some(viewer),
            center_hit: hit,
        });
    };

    // Tracking warm-up: no surfaces known yet
    for _ in 0..5 {
        frame(&mut script, None);
    }

    // An impatient tap before any surface exists
    script.push(ScriptEvent::TouchEnded {
        point: Vec2::new(160.0, 320.0),
    });

    // The tabletop is detected, then refined as tracking settles
    let mut extent = Vec2::new(0.4, 0.3);
    script.push(ScriptEvent::PlaneDetected {
        anchor: PlaneAnchor {
            id: table,
            center: table_center,
            extent,
        },
    });
    for _ in 0..3 {
        extent += Vec2::new(
            rng.random_range(0.05..0.15),
            rng.random_range(0.05..0.15),
        );
        script.push(ScriptEvent::PlaneRefined {
            anchor: PlaneAnchor {
                id: table,
                center: table_center,
                extent,
            },
        });
        frame(&mut script, Some(table_hit));
    }

    // Place the cup on the table
    script.push(ScriptEvent::TouchEnded {
        point: Vec2::new(160.0, 320.0),
    });
    for _ in 0..2 {
        frame(&mut script, None);
    }

    // First throw: too hard, off the rim
    script.push(ScriptEvent::TouchBegan {
        point: Vec2::new(160.0, 520.0),
    });
    script.push(ScriptEvent::TouchEnded {
        point: Vec2::new(160.0, 180.0),
    });
    for _ in 0..4 {
        frame(&mut script, None);
    }
    script.push(ScriptEvent::Contact {
        a: BodyCategory::Cup,
        b: BodyCategory::Ball,
    });

    // Tap to retrieve, then a gentler throw that sinks
    script.push(ScriptEvent::TouchEnded {
        point: Vec2::new(160.0, 320.0),
    });
    frame(&mut script, None);
    script.push(ScriptEvent::TouchBegan {
        point: Vec2::new(160.0, 400.0),
    });
    script.push(ScriptEvent::TouchEnded {
        point: Vec2::new(160.0, 250.0),
    });
    for _ in 0..3 {
        frame(&mut script, None);
    }
    script.push(ScriptEvent::Contact {
        a: BodyCategory::Water,
        b: BodyCategory::Ball,
    });
    for _ in 0..2 {
        frame(&mut script, None);
    }

    // Restart into placement preview
    script.push(ScriptEvent::TouchEnded {
        point: Vec2::new(160.0, 320.0),
    });
    for _ in 0..2 {
        frame(&mut script, Some(table_hit));
    }

    script
}
