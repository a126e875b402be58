use crate::error::DispatchError;
use crate::pipeline::training::{Running, SportsWalking, Swimming, Training};
use crate::types::activity::ActivityKind;

/// Builds a workout of one kind from positional sensor values.
///
/// `data` has already been checked against the kind's arity.
trait Builder {
    fn build(&self, data: &[f64]) -> Result<Box<dyn Training>, DispatchError>;
}

struct RunningBuilder;
struct WalkingBuilder;
struct SwimmingBuilder;

impl Builder for RunningBuilder {
    fn build(&self, data: &[f64]) -> Result<Box<dyn Training>, DispatchError> {
        Ok(Box::new(Running::new(
            whole_count("action", data[0])?,
            data[1],
            data[2],
        )))
    }
}

impl Builder for WalkingBuilder {
    fn build(&self, data: &[f64]) -> Result<Box<dyn Training>, DispatchError> {
        Ok(Box::new(SportsWalking::new(
            whole_count("action", data[0])?,
            data[1],
            data[2],
            data[3],
        )))
    }
}

impl Builder for SwimmingBuilder {
    fn build(&self, data: &[f64]) -> Result<Box<dyn Training>, DispatchError> {
        Ok(Box::new(Swimming::new(
            whole_count("action", data[0])?,
            data[1],
            data[2],
            data[3],
            whole_count("count_pool", data[4])?,
        )))
    }
}

/// Maps a workout code and its readings to the matching workout model.
pub fn read_package(code: &str, data: &[f64]) -> Result<Box<dyn Training>, DispatchError> {
    let kind =
        ActivityKind::from_code(code).ok_or_else(|| DispatchError::UnknownKind(code.to_string()))?;

    if data.len() != kind.arity() {
        return Err(DispatchError::Arity {
            kind: kind.training_type(),
            expected: kind.arity(),
            got: data.len(),
        });
    }

    match kind {
        ActivityKind::Running => RunningBuilder.build(data),
        ActivityKind::SportsWalking => WalkingBuilder.build(data),
        ActivityKind::Swimming => SwimmingBuilder.build(data),
    }
}

fn whole_count(field: &'static str, value: f64) -> Result<u32, DispatchError> {
    if value.fract() != 0.0 || value < 0.0 || value > u32::MAX as f64 {
        return Err(DispatchError::InvalidField { field, value });
    }
    Ok(value as u32)
}
