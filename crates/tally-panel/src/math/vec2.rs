//! 2D vector type

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A 2D vector in viewport pixel coordinates.
///
/// Used both for positions (top-left corners) and for pointer deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// The zero vector
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a new vector
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_add_sub() {
        let a = Vec2::new(100.0, 50.0);
        let b = Vec2::new(-30.0, 20.0);

        let sum = a + b;
        assert!((sum.x - 70.0).abs() < 0.001);
        assert!((sum.y - 70.0).abs() < 0.001);

        let diff = a - b;
        assert!((diff.x - 130.0).abs() < 0.001);
        assert!((diff.y - 30.0).abs() < 0.001);
    }

    #[test]
    fn test_vec2_assign_ops() {
        let mut v = Vec2::new(1.0, 2.0);
        v += Vec2::new(4.0, 8.0);
        assert_eq!(v, Vec2::new(5.0, 10.0));

        v -= Vec2::new(5.0, 10.0);
        assert_eq!(v, Vec2::ZERO);
    }

    #[test]
    fn test_vec2_neg() {
        let v = -Vec2::new(3.0, -4.0);
        assert_eq!(v, Vec2::new(-3.0, 4.0));
    }

    #[test]
    fn test_vec2_serialize_roundtrip() {
        let v = Vec2::new(750.0, 230.0);
        let json = serde_json::to_string(&v).unwrap();
        let back: Vec2 = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
