use itertools::Itertools;
use std::collections::BinaryHeap;
use std::fmt;

use crate::juggle::juggle_errors::{NoObjectInTracker, TrackerError};
use crate::juggle::{Ball, DistanceCandidate, TrackerSettings};
use crate::utils::{euclidean_distance, Circle};

/// Tracker for a fixed set of named juggling balls
pub struct JuggleTracker {
    settings: TrackerSettings,
    // Registration order doubles as the matching tie-break
    balls: Vec<Ball>,
    frames_processed: usize,
}

impl Default for JuggleTracker {
    fn default() -> Self {
        JuggleTracker {
            settings: TrackerSettings::default(),
            balls: Vec::new(),
            frames_processed: 0,
        }
    }
}

impl JuggleTracker {
    /// Creates new instance of JuggleTracker. Settings failing
    /// [`TrackerSettings::validate`] are rejected.
    ///
    /// Basic usage:
    ///
    /// ```
    /// use juggle_rs::juggle::{Ball, JuggleTracker, TrackerSettings, VerticalAxis};
    /// use juggle_rs::utils::Circle;
    /// let settings = TrackerSettings {
    ///     vertical_axis: VerticalAxis::Down,
    ///     hand_height: 500.0,
    ///     launch_velocity: 2.0,
    /// };
    /// let mut tracker = JuggleTracker::new(settings).unwrap();
    /// tracker.add_ball(Ball::new("red").unwrap()).unwrap();
    /// tracker.match_objects(&[Circle::from_xyr(100.0, 500.0, 10.0)], 1.5, 0.5).unwrap();
    /// assert!(tracker.get_ball("red").unwrap().is_found());
    /// ```
    pub fn new(settings: TrackerSettings) -> Result<Self, TrackerError> {
        settings.validate()?;
        Ok(JuggleTracker {
            settings,
            balls: Vec::new(),
            frames_processed: 0,
        })
    }
    /// Registers a ball. Names must be unique within the tracker
    pub fn add_ball(&mut self, ball: Ball) -> Result<(), TrackerError> {
        if self.balls.iter().any(|b| b.get_name() == ball.get_name()) {
            return Err(TrackerError::DuplicateName(ball.get_name().to_string()));
        }
        log::debug!("Tracking ball {} ({})", ball.get_name(), ball.get_id());
        self.balls.push(ball);
        Ok(())
    }
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }
    pub fn get_ball(&self, name: &str) -> Result<&Ball, TrackerError> {
        self.balls
            .iter()
            .find(|b| b.get_name() == name)
            .ok_or_else(|| {
                TrackerError::from(NoObjectInTracker {
                    txt: format!("no ball named '{}'", name),
                })
            })
    }
    pub fn settings(&self) -> &TrackerSettings {
        &self.settings
    }
    pub fn set_settings(&mut self, settings: TrackerSettings) -> Result<(), TrackerError> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }
    pub fn frames_processed(&self) -> usize {
        self.frames_processed
    }

    /// Advances every ball by one frame given the circles observed in it.
    ///
    /// Blobs are paired with balls one-to-one, nearest first, among pairs whose circles
    /// intersect under `fuzzy_factor`. Matched balls have their displacement smoothed with
    /// `alpha_factor` and their juggling-cycle state advanced. Leftover blobs are handed to
    /// balls that were never seen, in registration order.
    ///
    /// A frame with invalid input is rejected as a whole and no ball is modified.
    pub fn match_objects(
        &mut self,
        observed: &[Circle],
        fuzzy_factor: f32,
        alpha_factor: f32,
    ) -> Result<(), TrackerError> {
        if let Err(err) = validate_frame(observed, fuzzy_factor, alpha_factor) {
            log::warn!("Frame {} rejected: {}", self.frames_processed, err);
            return Err(err);
        }

        let footprints: Vec<Option<Circle>> = self.balls.iter().map(|b| b.footprint()).collect();
        for ball in self.balls.iter_mut() {
            ball.reset_frame();
        }

        let mut priority_queue: BinaryHeap<DistanceCandidate> = BinaryHeap::new();
        for (ball_idx, footprint) in footprints.iter().enumerate() {
            let Some(footprint) = footprint else {
                continue;
            };
            for (circle_idx, circle) in observed.iter().enumerate() {
                if footprint.intersects(circle, fuzzy_factor) {
                    priority_queue.push(DistanceCandidate {
                        distance: euclidean_distance(&footprint.center, &circle.center),
                        ball_idx,
                        circle_idx,
                    });
                }
            }
        }

        // We need to prevent double assignment of both balls and circles
        let mut reserved_balls = vec![false; self.balls.len()];
        let mut used_circles = vec![false; observed.len()];
        let settings = self.settings;
        while let Some(candidate) = priority_queue.pop() {
            if reserved_balls[candidate.ball_idx] || used_circles[candidate.circle_idx] {
                continue;
            }
            let ball = &mut self.balls[candidate.ball_idx];
            log::trace!(
                "Ball {} matched circle #{} at distance {}",
                ball.get_name(),
                candidate.circle_idx,
                candidate.distance
            );
            ball.update(&observed[candidate.circle_idx], alpha_factor, &settings);
            reserved_balls[candidate.ball_idx] = true;
            used_circles[candidate.circle_idx] = true;
        }

        let free_circles: Vec<usize> = (0..observed.len()).filter(|&i| !used_circles[i]).collect();
        let fresh_balls = self
            .balls
            .iter_mut()
            .enumerate()
            .filter(|(_, ball)| !ball.is_acquired());
        for ((ball_idx, ball), circle_idx) in fresh_balls.zip(free_circles) {
            ball.acquire(&observed[circle_idx]);
            reserved_balls[ball_idx] = true;
        }

        for (ball_idx, ball) in self.balls.iter_mut().enumerate() {
            if !reserved_balls[ball_idx] {
                ball.lose(&settings);
            }
        }

        self.frames_processed += 1;
        Ok(())
    }
}

fn validate_frame(
    observed: &[Circle],
    fuzzy_factor: f32,
    alpha_factor: f32,
) -> Result<(), TrackerError> {
    if !fuzzy_factor.is_finite() || fuzzy_factor < 0.0 {
        return Err(TrackerError::InvalidParameter(format!(
            "fuzzy factor must be finite and non-negative, got {}",
            fuzzy_factor
        )));
    }
    if !(0.0..=1.0).contains(&alpha_factor) {
        return Err(TrackerError::InvalidParameter(format!(
            "alpha factor must lie in [0, 1], got {}",
            alpha_factor
        )));
    }
    if let Some((idx, circle)) = observed.iter().enumerate().find(|(_, c)| !c.is_valid()) {
        return Err(TrackerError::InvalidObservation(format!(
            "circle #{} at ({}, {}) with radius {}",
            idx, circle.center.x, circle.center.y, circle.radius
        )));
    }
    Ok(())
}

impl fmt::Display for JuggleTracker {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Vertical axis: {:?}\n\tHand height: {}\n\tLaunch velocity: {}\n\tBalls: {}",
            self.settings.vertical_axis,
            self.settings.hand_height,
            self.settings.launch_velocity,
            self.balls.iter().join(", ")
        )
    }
}
