use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::juggle::juggle_errors::TrackerError;
use crate::juggle::{MovementVector, TrackerSettings, TrajectoryHistory};
use crate::utils::{Circle, Coordinate};

/// Phase of a ball in the juggling cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BallState {
    /// Not enough history to classify yet
    #[default]
    Undeclared,
    /// Just left the hand
    Jumpsquat,
    Airborne,
    Caught,
}

/// Launch side of a throw and the half of the arc the ball is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThrowState {
    LeftRising,
    RightRising,
    LeftFalling,
    RightFalling,
    #[default]
    Unrecognized,
}

impl ThrowState {
    pub fn is_rising(&self) -> bool {
        matches!(self, ThrowState::LeftRising | ThrowState::RightRising)
    }
    pub fn is_falling(&self) -> bool {
        matches!(self, ThrowState::LeftFalling | ThrowState::RightFalling)
    }
}

/// A physical juggling ball followed across frames
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    id: Uuid,
    name: String,
    // Last-known position, kept while the ball is lost
    coords: Coordinate,
    // Last-known blob radius, used as footprint while no blob is matched
    radius: f32,
    movement: MovementVector,
    // Blob matched in the current frame
    circle: Option<Circle>,
    found: bool,
    // Whether the ball has ever had a position
    acquired: bool,
    // Apex test result of the previous matched frame
    peak: bool,
    jump_point: Option<Coordinate>,
    state: BallState,
    throwstate: ThrowState,
    trail: TrajectoryHistory,
}

impl Ball {
    /// Creates a ball which is not yet placed anywhere.
    /// Surrounding whitespace is trimmed; a name with inner whitespace is rejected.
    ///
    /// Basic usage:
    ///
    /// ```
    /// use juggle_rs::juggle::Ball;
    /// let ball = Ball::new(" red ").unwrap();
    /// assert_eq!(ball.get_name(), "red");
    /// assert!(Ball::new(" red ball ").is_err());
    /// ```
    pub fn new(name: &str) -> Result<Self, TrackerError> {
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(TrackerError::InvalidName(trimmed.to_string()));
        }
        Ok(Ball {
            id: Uuid::new_v4(),
            name: trimmed.to_string(),
            coords: Coordinate::default(),
            radius: 0.0,
            movement: MovementVector::default(),
            circle: None,
            found: false,
            acquired: false,
            peak: false,
            jump_point: None,
            state: BallState::Undeclared,
            throwstate: ThrowState::Unrecognized,
            trail: TrajectoryHistory::default(),
        })
    }

    /// Places the ball where the operator has pointed it out
    pub fn with_circle(mut self, circle: Circle) -> Self {
        self.coords = circle.center;
        self.radius = circle.radius;
        self.circle = Some(circle);
        self.acquired = true;
        self.trail.push(circle.center);
        self
    }

    pub fn get_id(&self) -> Uuid {
        self.id
    }
    pub fn get_name(&self) -> &str {
        &self.name
    }
    pub fn get_coords(&self) -> Coordinate {
        self.coords
    }
    pub fn get_movement(&self) -> MovementVector {
        self.movement
    }
    pub fn get_circle(&self) -> Option<Circle> {
        self.circle
    }
    pub fn is_found(&self) -> bool {
        self.found
    }
    pub fn is_acquired(&self) -> bool {
        self.acquired
    }
    pub fn get_jump_point(&self) -> Option<Coordinate> {
        self.jump_point
    }
    pub fn get_state(&self) -> BallState {
        self.state
    }
    pub fn get_throwstate(&self) -> ThrowState {
        self.throwstate
    }
    pub fn get_trail(&self) -> &TrajectoryHistory {
        &self.trail
    }
    /// Circle used to match blobs against: the current blob if there is one,
    /// otherwise the last-known position and radius
    pub fn footprint(&self) -> Option<Circle> {
        if !self.acquired {
            return None;
        }
        Some(
            self.circle
                .unwrap_or_else(|| Circle::new(self.coords, self.radius)),
        )
    }

    pub fn is_rising(&self) -> bool {
        self.throwstate.is_rising()
    }
    pub fn is_falling(&self) -> bool {
        self.throwstate.is_falling()
    }
    /// Flips the rising half of a throw to the falling half on the same side.
    /// Any other throw state is left as is.
    pub fn peaked(&mut self) {
        self.throwstate = match self.throwstate {
            ThrowState::LeftRising => ThrowState::LeftFalling,
            ThrowState::RightRising => ThrowState::RightFalling,
            other => other,
        };
    }

    // Forget the previous frame's blob before matching
    pub(crate) fn reset_frame(&mut self) {
        self.found = false;
        self.circle = None;
    }

    // First sighting of a ball which was never placed. No displacement is known yet
    pub(crate) fn acquire(&mut self, observed: &Circle) {
        log::debug!("Ball {} acquired at {}", self.name, observed.center);
        self.coords = observed.center;
        self.radius = observed.radius;
        self.circle = Some(*observed);
        self.found = true;
        self.acquired = true;
        self.trail.push(observed.center);
    }

    // Matched to a blob in the current frame
    pub(crate) fn update(
        &mut self,
        observed: &Circle,
        alpha_factor: f32,
        settings: &TrackerSettings,
    ) {
        let dx = observed.center.x - self.coords.x;
        let dy = observed.center.y - self.coords.y;
        self.movement.average(dx, dy, alpha_factor);
        self.coords = observed.center;
        self.radius = observed.radius;
        self.circle = Some(*observed);
        self.found = true;
        self.trail.push(observed.center);

        let is_peak = self.movement.is_peak();
        match self.state {
            BallState::Undeclared | BallState::Caught => {
                if settings.is_launch(self.movement.yvel) {
                    self.launch();
                }
            }
            BallState::Jumpsquat => {
                self.set_state(BallState::Airborne);
                self.evaluate_flight(is_peak, settings);
            }
            BallState::Airborne => {
                self.evaluate_flight(is_peak, settings);
            }
        }
        self.peak = is_peak;
    }

    // No blob matched in the current frame
    pub(crate) fn lose(&mut self, settings: &TrackerSettings) {
        if self.state != BallState::Airborne || !self.is_descending(settings) {
            return;
        }
        // Vanished on the way down at or one frame short of the hand region: it went into a hand.
        // Higher up it is a detector dropout and the ball stays airborne.
        let next_y = self.coords.y + self.movement.yvel;
        if settings.in_hand_region(self.coords.y) || settings.in_hand_region(next_y) {
            self.catch();
        }
    }

    fn launch(&mut self) {
        self.jump_point = Some(self.coords);
        self.throwstate = if self.movement.xvel < 0.0 {
            ThrowState::LeftRising
        } else {
            ThrowState::RightRising
        };
        self.set_state(BallState::Jumpsquat);
    }

    fn evaluate_flight(&mut self, is_peak: bool, settings: &TrackerSettings) {
        if is_peak && !self.peak {
            let before = self.throwstate;
            self.peaked();
            if before != self.throwstate {
                log::debug!(
                    "Ball {} peaked at {}: {:?} -> {:?}",
                    self.name,
                    self.coords,
                    before,
                    self.throwstate
                );
            }
        }
        if self.is_descending(settings) && settings.in_hand_region(self.coords.y) {
            self.catch();
        }
    }

    fn is_descending(&self, settings: &TrackerSettings) -> bool {
        self.is_falling() || settings.vertical_axis.rise(self.movement.yvel) < 0.0
    }

    fn catch(&mut self) {
        self.movement.caught();
        self.set_state(BallState::Caught);
    }

    fn set_state(&mut self, state: BallState) {
        if self.state != state {
            log::debug!(
                "Ball {} at {}: {:?} -> {:?}",
                self.name,
                self.coords,
                self.state,
                state
            );
            self.state = state;
        }
    }
}

impl fmt::Display for Ball {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.name, self.coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::juggle::VerticalAxis;

    fn settings_up() -> TrackerSettings {
        TrackerSettings {
            vertical_axis: VerticalAxis::Up,
            hand_height: 100.0,
            launch_velocity: 2.0,
        }
    }

    #[test]
    fn test_name_validation() {
        match Ball::new(" red ball ") {
            Err(TrackerError::InvalidName(name)) => assert_eq!(name, "red ball"),
            other => panic!("expected InvalidName, got {:?}", other),
        }
        assert!(matches!(Ball::new("a\tb"), Err(TrackerError::InvalidName(_))));
        assert!(matches!(Ball::new("   "), Err(TrackerError::InvalidName(_))));

        let ball = Ball::new(" red ").unwrap();
        assert_eq!(ball.get_name(), "red");
        assert_eq!(ball.get_state(), BallState::Undeclared);
        assert_eq!(ball.get_throwstate(), ThrowState::Unrecognized);
        assert!(!ball.is_found());
        assert!(ball.footprint().is_none());
    }

    #[test]
    fn test_unique_ids() {
        let a = Ball::new("a").unwrap();
        let b = Ball::new("a").unwrap();
        assert_ne!(a.get_id(), b.get_id());
    }

    #[test]
    fn test_peaked_transitions() {
        let mut ball = Ball::new("red").unwrap();
        ball.throwstate = ThrowState::LeftRising;
        assert!(ball.is_rising());
        ball.peaked();
        assert_eq!(ball.get_throwstate(), ThrowState::LeftFalling);
        assert!(ball.is_falling());
        ball.peaked();
        assert_eq!(ball.get_throwstate(), ThrowState::LeftFalling);

        ball.throwstate = ThrowState::RightRising;
        ball.peaked();
        assert_eq!(ball.get_throwstate(), ThrowState::RightFalling);

        ball.throwstate = ThrowState::Unrecognized;
        ball.peaked();
        assert_eq!(ball.get_throwstate(), ThrowState::Unrecognized);
        assert!(!ball.is_rising());
        assert!(!ball.is_falling());
    }

    #[test]
    fn test_display() {
        let ball = Ball::new("club").unwrap().with_circle(Circle::from_xyr(3.97, -3.97, 5.0));
        assert_eq!(ball.to_string(), "club(3.9, -3.9)");
    }

    #[test]
    fn test_footprint_falls_back_to_last_known() {
        let mut ball = Ball::new("red").unwrap().with_circle(Circle::from_xyr(10.0, 20.0, 4.0));
        ball.reset_frame();
        assert!(ball.get_circle().is_none());
        assert_eq!(ball.footprint(), Some(Circle::from_xyr(10.0, 20.0, 4.0)));
    }

    #[test]
    fn test_launch_from_hand() {
        let settings = settings_up();
        let mut ball = Ball::new("red").unwrap().with_circle(Circle::from_xyr(50.0, 100.0, 5.0));
        // Small jitter in the hand is not a throw
        ball.update(&Circle::from_xyr(50.0, 101.0, 5.0), 0.5, &settings);
        assert_eq!(ball.get_state(), BallState::Undeclared);
        assert!(ball.get_jump_point().is_none());

        ball.update(&Circle::from_xyr(44.0, 121.0, 5.0), 0.5, &settings);
        assert_eq!(ball.get_state(), BallState::Jumpsquat);
        assert_eq!(ball.get_throwstate(), ThrowState::LeftRising);
        assert_eq!(ball.get_jump_point(), Some(Coordinate::new(44.0, 121.0)));

        ball.update(&Circle::from_xyr(38.0, 140.0, 5.0), 0.5, &settings);
        assert_eq!(ball.get_state(), BallState::Airborne);
        assert_eq!(ball.get_throwstate(), ThrowState::LeftRising);
        assert_eq!(ball.get_trail().len(), 4);
    }

    #[test]
    fn test_lost_while_falling_is_caught() {
        let settings = settings_up();
        // One more frame at this speed lands below the hand line at 100
        let mut ball = Ball::new("red").unwrap().with_circle(Circle::from_xyr(0.0, 105.0, 5.0));
        ball.state = BallState::Airborne;
        ball.throwstate = ThrowState::RightFalling;
        ball.movement = MovementVector::new(1.0, -8.0);
        ball.reset_frame();
        ball.lose(&settings);
        assert_eq!(ball.get_state(), BallState::Caught);
        assert_eq!(ball.get_movement(), MovementVector::default());
        assert_eq!(ball.get_coords(), Coordinate::new(0.0, 105.0));
    }

    #[test]
    fn test_lost_high_while_falling_stays_airborne() {
        let settings = settings_up();
        let mut ball = Ball::new("red").unwrap().with_circle(Circle::from_xyr(0.0, 200.0, 5.0));
        ball.state = BallState::Airborne;
        ball.throwstate = ThrowState::RightFalling;
        ball.movement = MovementVector::new(1.0, -8.0);
        ball.reset_frame();
        ball.lose(&settings);
        assert_eq!(ball.get_state(), BallState::Airborne);
        assert_eq!(ball.get_throwstate(), ThrowState::RightFalling);
        assert!(!ball.is_found());
        assert_eq!(ball.get_movement(), MovementVector::new(1.0, -8.0));
    }

    #[test]
    fn test_lost_while_rising_stays_airborne() {
        let settings = settings_up();
        let mut ball = Ball::new("red").unwrap().with_circle(Circle::from_xyr(0.0, 200.0, 5.0));
        ball.state = BallState::Airborne;
        ball.throwstate = ThrowState::RightRising;
        ball.movement = MovementVector::new(1.0, 8.0);
        ball.reset_frame();
        ball.lose(&settings);
        assert_eq!(ball.get_state(), BallState::Airborne);
        assert!(!ball.is_found());
        assert_eq!(ball.get_movement(), MovementVector::new(1.0, 8.0));
    }
}
