use crate::pipeline::batch::FailurePolicy;
use crate::pipeline::format::OutputFormat;

pub const DEFAULT_LOG_FILTER: &str = "workout_tracker=info";

#[derive(Debug, Clone)]
pub struct Config {
    pub output: OutputFormat,
    pub failure_policy: FailurePolicy,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Reads settings through `get` so tests don't have to touch the process
    /// environment.
    pub fn from_env_with<F>(mut get: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let output = get("WORKOUT_OUTPUT")
            .and_then(|s| OutputFormat::from_name(&s))
            .unwrap_or_default();

        let fail_fast = get("WORKOUT_FAIL_FAST")
            .map(|s| matches!(s.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            output,
            failure_policy: if fail_fast {
                FailurePolicy::Abort
            } else {
                FailurePolicy::Skip
            },
        }
    }
}
