//! Tracked plane anchors and hit-test results
//!
//! The AR session detects horizontal surfaces and refines them over time.
//! The controller only consumes the estimates: a registry of the latest
//! anchor per id, and the world-space point a screen-center hit-test
//! produced this frame.

use std::collections::BTreeMap;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Identifier for a tracked plane anchor.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PlaneId(pub u32);

/// A tracked estimate of a flat horizontal surface.
///
/// `center` is the surface center in world space; `extent` spans the
/// surface's local X and Z axes in meters. Both are refined by the session
/// as tracking improves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneAnchor {
    pub id: PlaneId,
    pub center: Vec3,
    pub extent: Vec2,
}

/// Result of projecting the screen center onto tracked surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitResult {
    /// World-space intersection point (the translation of the hit transform).
    pub point: Vec3,
}

impl HitResult {
    pub fn at(point: Vec3) -> Self {
        Self { point }
    }
}

/// Latest estimate per tracked plane, keyed by id for stable iteration.
#[derive(Debug, Clone, Default)]
pub struct AnchorRegistry {
    planes: BTreeMap<PlaneId, PlaneAnchor>,
}

impl AnchorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an anchor estimate. Returns true if the id was new.
    pub fn upsert(&mut self, anchor: PlaneAnchor) -> bool {
        self.planes.insert(anchor.id, anchor).is_none()
    }

    pub fn contains(&self, id: PlaneId) -> bool {
        self.planes.contains_key(&id)
    }

    pub fn get(&self, id: PlaneId) -> Option<&PlaneAnchor> {
        self.planes.get(&id)
    }

    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlaneAnchor> {
        self.planes.values()
    }
}
