pub mod array_ops;
pub mod exercises;
pub mod runner;

pub use crate::domain::model::{CaseOutcome, ExerciseKind, ExerciseReport, OutputFormat};
pub use crate::domain::ports::{ConfigProvider, Exercise};
pub use crate::utils::error::Result;
