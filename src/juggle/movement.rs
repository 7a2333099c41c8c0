use serde::{Deserialize, Serialize};

/// Vertical speed (per frame) below which a ball counts as being at the apex of its arc
pub const PEAK_FACTOR: f32 = 1.5;

/// Smoothed per-frame displacement of a ball
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MovementVector {
    pub xvel: f32,
    pub yvel: f32,
}

impl MovementVector {
    pub fn new(_xvel: f32, _yvel: f32) -> Self {
        MovementVector {
            xvel: _xvel,
            yvel: _yvel,
        }
    }
    /// Exponential moving average of the raw displacement observed this frame.
    /// Higher `alpha_factor` weights history more: smoother, but lagging.
    ///
    /// Basic usage:
    ///
    /// ```
    /// use juggle_rs::juggle::MovementVector;
    /// let mut movement = MovementVector::default();
    /// movement.average(4.0, -2.0, 0.5);
    /// assert_eq!(movement, MovementVector::new(2.0, -1.0));
    /// ```
    pub fn average(&mut self, new_x: f32, new_y: f32, alpha_factor: f32) {
        self.xvel = alpha_factor * self.xvel + (1.0 - alpha_factor) * new_x;
        self.yvel = alpha_factor * self.yvel + (1.0 - alpha_factor) * new_y;
    }
    /// Ball came to rest in a hand
    pub fn caught(&mut self) {
        self.xvel = 0.0;
        self.yvel = 0.0;
    }
    pub fn is_peak(&self) -> bool {
        self.yvel.abs() < PEAK_FACTOR
    }
}
