use crate::error::AppError;
use crate::pipeline::dispatch::read_package;
use crate::types::activity::{InfoMessage, Package};

/// What to do when a workout's inputs make its formulas undefined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log the package and continue with the next one.
    #[default]
    Skip,
    /// Stop the batch with the error.
    Abort,
}

#[derive(Debug, Clone)]
pub struct SkippedPackage {
    pub index: usize,
    pub code: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub messages: Vec<InfoMessage>,
    pub skipped: Vec<SkippedPackage>,
}

/// Processes packages in input order. Unknown codes and malformed data are
/// always skipped; compute errors follow `policy`.
pub fn run_batch(packages: &[Package], policy: FailurePolicy) -> Result<BatchReport, AppError> {
    let mut report = BatchReport::default();

    for (index, package) in packages.iter().enumerate() {
        let training = match read_package(&package.code, &package.data) {
            Ok(training) => training,
            Err(err) => {
                tracing::warn!(index, code = %package.code, "Skipping package: {}", err);
                report.skipped.push(SkippedPackage {
                    index,
                    code: package.code.clone(),
                    reason: err.to_string(),
                });
                continue;
            }
        };

        match training.show_training_info() {
            Ok(info) => report.messages.push(info),
            Err(err) if policy == FailurePolicy::Skip => {
                tracing::error!(index, code = %package.code, "Workout not computed: {}", err);
                report.skipped.push(SkippedPackage {
                    index,
                    code: package.code.clone(),
                    reason: err.to_string(),
                });
            }
            Err(err) => return Err(err.into()),
        }
    }

    tracing::debug!(
        computed = report.messages.len(),
        skipped = report.skipped.len(),
        "Batch complete"
    );

    Ok(report)
}
