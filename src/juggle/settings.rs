use serde::{Deserialize, Serialize};

use crate::juggle::juggle_errors::TrackerError;
use crate::juggle::PEAK_FACTOR;

/// Direction of the y axis in the coordinates fed to the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalAxis {
    /// +y points up, against gravity
    #[default]
    Up,
    /// +y points down, as image rows do
    Down,
}

impl VerticalAxis {
    /// Height of `y` above the origin, whatever the axis direction
    pub fn height(&self, y: f32) -> f32 {
        match self {
            VerticalAxis::Up => y,
            VerticalAxis::Down => -y,
        }
    }
    /// Upward component of a vertical velocity
    pub fn rise(&self, yvel: f32) -> f32 {
        self.height(yvel)
    }
}

/// Thresholds that drive the juggling-cycle state machine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerSettings {
    /// Direction of +y in observed coordinates
    pub vertical_axis: VerticalAxis,
    /// Balls at or below this height (in observed y units) are in the hand region
    pub hand_height: f32,
    /// Minimum smoothed upward speed, per frame, treated as a throw. Should exceed `PEAK_FACTOR`
    pub launch_velocity: f32,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            vertical_axis: VerticalAxis::Up,
            hand_height: 0.0,
            launch_velocity: 2.0,
        }
    }
}

impl TrackerSettings {
    /// Rejects thresholds the state machine cannot work with. A launch speed at or
    /// below `PEAK_FACTOR` would already count as the apex of the throw.
    pub fn validate(&self) -> Result<(), TrackerError> {
        if !self.hand_height.is_finite() {
            return Err(TrackerError::InvalidParameter(format!(
                "hand height must be finite, got {}",
                self.hand_height
            )));
        }
        if !self.launch_velocity.is_finite() || self.launch_velocity <= PEAK_FACTOR {
            return Err(TrackerError::InvalidParameter(format!(
                "launch velocity must be finite and above {}, got {}",
                PEAK_FACTOR, self.launch_velocity
            )));
        }
        Ok(())
    }
    /// True when `y` lies in the hand region
    pub fn in_hand_region(&self, y: f32) -> bool {
        self.vertical_axis.height(y) <= self.vertical_axis.height(self.hand_height)
    }
    /// True when a smoothed vertical velocity is fast enough upward to be a throw
    pub fn is_launch(&self, yvel: f32) -> bool {
        self.vertical_axis.rise(yvel) >= self.launch_velocity
    }
}
