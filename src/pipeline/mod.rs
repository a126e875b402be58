pub mod batch;
pub mod dispatch;
pub mod format;
pub mod training;
