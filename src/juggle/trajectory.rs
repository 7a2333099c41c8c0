use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::utils::Coordinate;

/// Number of positions kept in a ball's trail
pub const TRAIL_LEN: usize = 10;

/// Bounded history of the most recent positions of a ball, oldest first.
/// Kept for renderers; tracking decisions never read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryHistory {
    points: VecDeque<Coordinate>,
    max_len: usize,
}

impl Default for TrajectoryHistory {
    fn default() -> Self {
        TrajectoryHistory::new(TRAIL_LEN)
    }
}

impl TrajectoryHistory {
    pub fn new(max_len: usize) -> Self {
        TrajectoryHistory {
            points: VecDeque::with_capacity(max_len),
            max_len,
        }
    }
    /// Appends a position, evicting the oldest one once the history is full
    pub fn push(&mut self, point: Coordinate) {
        if self.max_len == 0 {
            return;
        }
        if self.points.len() == self.max_len {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    pub fn get_max_len(&self) -> usize {
        self.max_len
    }
    pub fn latest(&self) -> Option<&Coordinate> {
        self.points.back()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> {
        self.points.iter()
    }
    /// Integer points for polyline rendering
    pub fn display_points(&self) -> Vec<(i32, i32)> {
        self.points.iter().map(|pt| pt.to_display_pair()).collect()
    }
    pub fn clear(&mut self) {
        self.points.clear()
    }
}
