//! Vector helpers layered on top of glam.
//!
//! Arithmetic (`+`, `-`, `* f32`, `dot`, `cross`) comes straight from
//! [`glam::Vec3`]. This module adds checked component access and the
//! normalization precondition used throughout the renderer.

use std::fmt;

use glam::{Vec2, Vec3};
use thiserror::Error;

/// Errors produced by vector helpers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("vector component index {0} is out of range (expected 0, 1 or 2)")]
    ComponentOutOfRange(usize),
}

pub type MathResult<T> = Result<T, MathError>;

/// One of the three coordinate axes.
///
/// Prefer this over raw indices: an `Axis` can never be out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in component order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Map a raw component index to an axis.
    pub fn from_index(index: usize) -> MathResult<Axis> {
        match index {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => Err(MathError::ComponentOutOfRange(index)),
        }
    }
}

/// Read the component of `v` along `axis`.
#[inline]
pub fn component(v: Vec3, axis: Axis) -> f32 {
    match axis {
        Axis::X => v.x,
        Axis::Y => v.y,
        Axis::Z => v.z,
    }
}

/// Read component `index` of `v`, failing for anything outside 0..=2.
pub fn try_component(v: Vec3, index: usize) -> MathResult<f32> {
    Axis::from_index(index).map(|axis| component(v, axis))
}

/// Normalize `v` to unit length.
///
/// `v` must be non-zero. A zero vector is a caller bug: debug builds panic,
/// release builds return NaN components exactly as a raw division would.
#[inline]
pub fn unit(v: Vec3) -> Vec3 {
    debug_assert!(
        v.length_squared() > 0.0,
        "cannot normalize a zero-length vector"
    );
    v / v.dot(v).sqrt()
}

/// Display wrapper printing vectors as parenthesised tuples, e.g. `(1, 2, 3)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuple<V>(pub V);

impl fmt::Display for Tuple<Vec3> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}

impl fmt::Display for Tuple<Vec2> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}
