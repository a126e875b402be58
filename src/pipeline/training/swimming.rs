use super::{Training, M_IN_KM};
use crate::types::activity::ActivityKind;

/// Distance covered by one stroke, in meters.
const LEN_STROKE: f64 = 1.38;
const CALORIES_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone)]
pub struct Swimming {
    action: u32,
    duration: f64,
    weight: f64,
    /// Pool length in meters.
    length_pool: f64,
    /// Number of pool lengths swum.
    count_pool: u32,
}

impl Swimming {
    pub fn new(action: u32, duration: f64, weight: f64, length_pool: f64, count_pool: u32) -> Self {
        Self {
            action,
            duration,
            weight,
            length_pool,
            count_pool,
        }
    }
}

impl Training for Swimming {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Swimming
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

    fn step_length(&self) -> f64 {
        LEN_STROKE
    }

    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / M_IN_KM / self.duration()
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + CALORIES_SPEED_SHIFT) * CALORIES_WEIGHT_MULTIPLIER * self.weight()
    }
}
