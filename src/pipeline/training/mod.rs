//! Workout models.
//!
//! Every workout shares distance and mean-speed formulas driven by the action
//! count; each kind supplies its own calorie formula and may override the rest.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::error::ComputeError;
use crate::types::activity::{ActivityKind, InfoMessage};

/// Distance covered by one step, in meters.
pub const LEN_STEP: f64 = 0.65;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

pub trait Training {
    fn kind(&self) -> ActivityKind;

    /// Steps or strokes recorded by the sensor.
    fn action(&self) -> u32;

    /// Workout length in hours.
    fn duration(&self) -> f64;

    /// Athlete weight in kilograms.
    fn weight(&self) -> f64;

    fn step_length(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in km.
    fn distance(&self) -> f64 {
        self.action() as f64 * self.step_length() / M_IN_KM
    }

    /// Mean speed in km/h over the whole duration.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.duration()
    }

    fn spent_calories(&self) -> f64;

    /// Checks inputs the formulas divide by. Kinds with extra divisors extend it.
    fn check_divisors(&self) -> Result<(), ComputeError> {
        check_duration(self.duration())
    }

    fn show_training_info(&self) -> Result<InfoMessage, ComputeError> {
        if let Err(err) = self.check_divisors() {
            tracing::debug!(kind = self.kind().code(), "Rejected workout: {}", err);
            return Err(err);
        }

        Ok(InfoMessage {
            training_type: self.kind().training_type(),
            duration: self.duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        })
    }
}

/// Floored float division computed from the remainder, so a quotient that
/// rounds up to a whole number still floors to the value below it.
pub(crate) fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

pub(crate) fn check_duration(duration: f64) -> Result<(), ComputeError> {
    if duration <= 0.0 {
        return Err(ComputeError::NonPositiveDuration(duration));
    }
    Ok(())
}
