use crate::domain::model::{ExerciseKind, OutputFormat};
use crate::utils::error::Result;
use serde_json::Value;

pub trait ConfigProvider {
    /// Exercises to run; the runner puts them in canonical order.
    fn selected_exercises(&self) -> Vec<ExerciseKind>;
    /// Custom cases for `kind`, or `None` to keep the built-in examples.
    fn cases_for(&self, kind: ExerciseKind) -> Option<Vec<Value>>;
    fn output_format(&self) -> OutputFormat;
}

pub trait Exercise {
    fn kind(&self) -> ExerciseKind;
    fn cases(&self) -> &[Value];
    fn solve(&self, input: &Value) -> Result<Value>;

    /// Compares `output` against a standard-library answer when the exercise has one.
    fn cross_check(&self, _input: &Value, _output: &Value) -> Option<bool> {
        None
    }
}
