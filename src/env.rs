use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

#[derive(Serialize, Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vec2D {
    pub x: i16,
    pub y: i16,
}

pub const fn v2(x: i16, y: i16) -> Vec2D {
    Vec2D { x, y }
}

impl Vec2D {
    pub fn new(x: i16, y: i16) -> Vec2D {
        Vec2D { x, y }
    }

    pub fn apply(self, d: Direction) -> Vec2D {
        self + d.into()
    }

    /// Straight line distance to `other`.
    pub fn euclidean(&self, other: Vec2D) -> f64 {
        let d = *self - other;
        ((d.x as f64).powi(2) + (d.y as f64).powi(2)).sqrt()
    }

    pub fn within(self, width: usize, height: usize) -> bool {
        0 <= self.x && self.x < width as _ && 0 <= self.y && self.y < height as _
    }
}

impl From<Direction> for Vec2D {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Up => Vec2D::new(0, 1),
            Direction::Right => Vec2D::new(1, 0),
            Direction::Down => Vec2D::new(0, -1),
            Direction::Left => Vec2D::new(-1, 0),
            Direction::Stop => Vec2D::new(0, 0),
        }
    }
}

impl Add for Vec2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// Actions of the maze game.
/// The declaration order is the enumeration order of legal actions.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
    Stop,
}

impl Direction {
    /// Iterates over the four moving directions (without `Stop`).
    pub fn iter() -> impl Iterator<Item = Direction> {
        [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ]
        .into_iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn directions() {
        let moved: Vec<Vec2D> = Direction::iter().map(|d| v2(3, 3).apply(d)).collect();
        assert_eq!(moved, vec![v2(3, 4), v2(4, 3), v2(3, 2), v2(2, 3)]);
        assert_eq!(v2(1, 1).apply(Direction::Stop), v2(1, 1));
        assert!(v2(2, 0).within(3, 1));
        assert!(!v2(3, 0).within(3, 1));
        assert!(!v2(-1, 0).within(3, 1));
    }

    #[test]
    fn distances() {
        assert_eq!(v2(1, 2).euclidean(v2(4, 6)), 5.0);
        assert_eq!(v2(0, 0).euclidean(v2(0, 0)), 0.0);
    }
}
