//! Planar coordinates and the continuous-movement primitives.
//!
//! Both the airspace (vertiport positions, air legs) and each vertiport's
//! ground frame use the same flat 2-D `Point` in abstract distance units.
//! `f64` is used throughout so that a snapped position compares exactly equal
//! to its target.

use std::ops::{Add, Sub};

/// Distance below which a mover counts as having reached its target.
pub const REACH_TOLERANCE: f64 = 0.5;

/// A point (or offset) in a flat 2-D frame.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Linear interpolation: `t = 0` gives `a`, `t = 1` gives `b`.
    #[inline]
    pub fn lerp(a: Point, b: Point, t: f64) -> Point {
        Point {
            x: a.x + (b.x - a.x) * t,
            y: a.y + (b.y - a.y) * t,
        }
    }

    /// Shift by `offset` (translates a layout-local point into a vertiport frame).
    #[inline]
    pub fn translate(self, offset: Point) -> Point {
        self + offset
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Movement primitives ───────────────────────────────────────────────────────

/// Move `current` straight toward `target` by `speed * dt`.
///
/// If the step would reach or pass the target (or the two already coincide)
/// the result is exactly `target`; the mover never overshoots.
pub fn move_towards(current: Point, target: Point, speed: f64, dt: f64) -> Point {
    let dist = current.distance(target);
    if dist == 0.0 {
        return target;
    }
    let step = speed * dt;
    if step >= dist {
        return target;
    }
    Point::lerp(current, target, step / dist)
}

/// `true` when `current` is strictly closer than `tolerance` to `target`.
#[inline]
pub fn reached(current: Point, target: Point, tolerance: f64) -> bool {
    current.distance(target) < tolerance
}
