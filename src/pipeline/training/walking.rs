use super::{check_duration, floor_div, Training, MIN_IN_H};
use crate::error::ComputeError;
use crate::types::activity::ActivityKind;

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

#[derive(Debug, Clone)]
pub struct SportsWalking {
    action: u32,
    duration: f64,
    weight: f64,
    /// Athlete height in centimeters.
    height: f64,
}

impl SportsWalking {
    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            action,
            duration,
            weight,
            height,
        }
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> ActivityKind {
        ActivityKind::SportsWalking
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn spent_calories(&self) -> f64 {
        // speed² / height contributes whole units only.
        let speed_height = floor_div(self.mean_speed().powi(2), self.height);
        (CALORIES_WEIGHT_MULTIPLIER * self.weight()
            + speed_height * CALORIES_SPEED_HEIGHT_MULTIPLIER * self.weight())
            * self.duration()
            * MIN_IN_H
    }

    fn check_divisors(&self) -> Result<(), ComputeError> {
        check_duration(self.duration())?;
        if self.height == 0.0 {
            return Err(ComputeError::ZeroDivisor("height"));
        }
        Ok(())
    }
}
