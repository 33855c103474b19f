//! Procedural layout for Kapla-style plank towers.
//!
//! Computes ring placements of rectangular planks around a cylinder
//! cross-section. Each pair of levels is built from one ring of radial
//! planks topped by two concentric rings of tangential planks, the way
//! real Kapla construction alternates orientation per layer. Within a
//! ring, planks are spaced so neighbors cannot start out interpenetrating,
//! and the angular rounding error is spread evenly so every ring closes at
//! exactly one full turn.
//!
//! The crate is pure geometry: it performs no I/O and knows nothing about
//! rendering or physics. Callers forward each [`PlankPlacement`] to
//! whatever engine instantiates the simulated bodies.

pub mod error;
mod ring;
mod tower;

pub use error::{LayoutError, LayoutResult};
pub use ring::{RingSpec, fill_ring};
pub use tower::{TowerParams, generate, tower_rings};

use glam::DVec3;

/// One plank's rigid-body pose and box size.
///
/// Produced once by [`generate`] and never mutated; ownership passes
/// entirely to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlankPlacement {
    /// Center of the plank in world coordinates.
    pub position: DVec3,
    /// Rotation about the vertical (+Y) axis, in radians.
    pub yaw: f64,
    /// Half-extents of the plank's box, per axis before rotation.
    pub half_extents: DVec3,
}
