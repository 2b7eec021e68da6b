use std::collections::VecDeque;

use glam::Vec2;

/// Retention rule for the trail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailPolicy {
    /// Keep every point for the life of the process. Memory grows linearly
    /// with the number of frames.
    #[default]
    Unbounded,
    /// Keep at most this many points, dropping the oldest first.
    Bounded(usize),
}

/// Chronological history of second-bob positions.
#[derive(Debug, Clone, Default)]
pub struct Trail {
    points: VecDeque<Vec2>,
    policy: TrailPolicy,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: TrailPolicy) -> Self {
        Self {
            points: VecDeque::new(),
            policy,
        }
    }

    pub fn policy(&self) -> TrailPolicy {
        self.policy
    }

    pub fn push(&mut self, point: Vec2) {
        if let TrailPolicy::Bounded(capacity) = self.policy {
            if capacity == 0 {
                return;
            }
            while self.points.len() >= capacity {
                self.points.pop_front();
            }
        }
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points oldest first, which is also draw order.
    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }
}
