use serde::{Deserialize, Serialize};
use std::fmt;

/// Point in the observer's projection plane: +x is right, +y is up against gravity
/// (see [`VerticalAxis`](crate::juggle::VerticalAxis) for image-row input).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f32,
    pub y: f32,
}

impl Coordinate {
    pub fn new(_x: f32, _y: f32) -> Self {
        Coordinate { x: _x, y: _y }
    }
    /// Integer pair for rendering APIs. Both components are truncated toward zero.
    ///
    /// ```
    /// use juggle_rs::utils::Coordinate;
    /// assert_eq!(Coordinate::new(3.97, -3.97).to_display_pair(), (3, -3));
    /// ```
    pub fn to_display_pair(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// Cut the shortest decimal representation after one fractional digit, so 3.97 is "3.9"
// and -3.97 is "-3.9". NaN and infinities are printed as they are.
fn truncate_one_decimal(value: f32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let repr = value.to_string();
    match repr.split_once('.') {
        Some((int_part, frac_part)) => {
            let digit = frac_part.chars().next().unwrap_or('0');
            format!("{}.{}", int_part, digit)
        }
        None => format!("{}.0", repr),
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({}, {})",
            truncate_one_decimal(self.x),
            truncate_one_decimal(self.y)
        )
    }
}

/// Footprint of a ball or a raw blob reported by the detector
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Circle {
    pub center: Coordinate,
    pub radius: f32,
}

impl Circle {
    pub fn new(_center: Coordinate, _radius: f32) -> Self {
        Circle {
            center: _center,
            radius: _radius,
        }
    }
    pub fn from_xyr(x: f32, y: f32, radius: f32) -> Self {
        Circle::new(Coordinate::new(x, y), radius)
    }
    /// True when the centers are no further apart than the sum of radii scaled by `fuzzy_factor`.
    /// A factor above 1.0 accepts near misses, below 1.0 demands overlap.
    ///
    /// Basic usage:
    ///
    /// ```
    /// use juggle_rs::utils::Circle;
    /// let a = Circle::from_xyr(0.0, 0.0, 2.0);
    /// let b = Circle::from_xyr(5.0, 0.0, 2.0);
    /// assert!(!a.intersects(&b, 1.0));
    /// assert!(a.intersects(&b, 1.5));
    /// ```
    pub fn intersects(&self, other: &Circle, fuzzy_factor: f32) -> bool {
        euclidean_distance(&self.center, &other.center) <= (self.radius + other.radius) * fuzzy_factor
    }
    /// Rejects what an upstream detector should never produce
    pub fn is_valid(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite() && self.radius >= 0.0
    }
}

pub fn euclidean_distance(p1: &Coordinate, p2: &Coordinate) -> f32 {
    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;
    f32::sqrt(dx * dx + dy * dy)
}
