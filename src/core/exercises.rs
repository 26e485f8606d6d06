use crate::core::array_ops::{clone_array, is_array, no_repeated_by, reverse, same_element};
use crate::domain::model::{ExerciseKind, Sequence};
use crate::domain::ports::Exercise;
use crate::utils::error::{KataError, Result};
use serde_json::{json, Value};

fn as_sequence(kind: ExerciseKind, input: &Value) -> Result<&Sequence> {
    input.as_array().ok_or_else(|| KataError::NotASequence {
        exercise: kind.to_string(),
        value: input.to_string(),
    })
}

pub struct IsArrayExercise {
    cases: Vec<Value>,
}

impl IsArrayExercise {
    pub fn with_cases(cases: Vec<Value>) -> Self {
        Self { cases }
    }
}

impl Default for IsArrayExercise {
    fn default() -> Self {
        Self::with_cases(vec![
            json!("Hello"),
            json!(123),
            json!(["Hello"]),
            json!([]),
            json!([1, 2, 3]),
        ])
    }
}

impl Exercise for IsArrayExercise {
    fn kind(&self) -> ExerciseKind {
        ExerciseKind::IsArray
    }

    fn cases(&self) -> &[Value] {
        &self.cases
    }

    fn solve(&self, input: &Value) -> Result<Value> {
        Ok(Value::Bool(is_array(input)))
    }
}

pub struct CloneArrayExercise {
    cases: Vec<Value>,
}

impl CloneArrayExercise {
    pub fn with_cases(cases: Vec<Value>) -> Self {
        Self { cases }
    }
}

impl Default for CloneArrayExercise {
    fn default() -> Self {
        Self::with_cases(vec![json!(["a", "b", "c"]), json!([]), json!([1, 2, [1, 2, 3]])])
    }
}

impl Exercise for CloneArrayExercise {
    fn kind(&self) -> ExerciseKind {
        ExerciseKind::CloneArray
    }

    fn cases(&self) -> &[Value] {
        &self.cases
    }

    fn solve(&self, input: &Value) -> Result<Value> {
        let array = as_sequence(self.kind(), input)?;
        Ok(Value::Array(clone_array(array)))
    }
}

pub struct NoRepeatedExercise {
    cases: Vec<Value>,
}

impl NoRepeatedExercise {
    pub fn with_cases(cases: Vec<Value>) -> Self {
        Self { cases }
    }
}

impl Default for NoRepeatedExercise {
    fn default() -> Self {
        Self::with_cases(vec![
            json!(["a", "b", "b", "c", "c", "c"]),
            json!(["a", "a", "b", "b", "c", "c", "c"]),
            json!([]),
        ])
    }
}

impl Exercise for NoRepeatedExercise {
    fn kind(&self) -> ExerciseKind {
        ExerciseKind::NoRepeated
    }

    fn cases(&self) -> &[Value] {
        &self.cases
    }

    fn solve(&self, input: &Value) -> Result<Value> {
        let array = as_sequence(self.kind(), input)?;
        Ok(Value::Array(no_repeated_by(array, same_element)))
    }
}

pub struct ReverseExercise {
    cases: Vec<Value>,
}

impl ReverseExercise {
    pub fn with_cases(cases: Vec<Value>) -> Self {
        Self { cases }
    }
}

impl Default for ReverseExercise {
    fn default() -> Self {
        Self::with_cases(vec![json!(["a", "b", "c"]), json!([1, 2, 4, 5, 6])])
    }
}

impl Exercise for ReverseExercise {
    fn kind(&self) -> ExerciseKind {
        ExerciseKind::Reverse
    }

    fn cases(&self) -> &[Value] {
        &self.cases
    }

    fn solve(&self, input: &Value) -> Result<Value> {
        // reverse 會清空輸入，所以先複製一份
        let mut working = as_sequence(self.kind(), input)?.clone();
        let reversed = reverse(&mut working);
        debug_assert!(working.is_empty());
        Ok(Value::Array(reversed))
    }

    fn cross_check(&self, input: &Value, output: &Value) -> Option<bool> {
        let mut expected = input.as_array()?.clone();
        expected.reverse();
        Some(output.as_array() == Some(&expected))
    }
}

/// 依種類建立練習；`cases` 為 `None` 時使用內建範例
pub fn exercise_for(kind: ExerciseKind, cases: Option<Vec<Value>>) -> Box<dyn Exercise> {
    match (kind, cases) {
        (ExerciseKind::IsArray, None) => Box::new(IsArrayExercise::default()),
        (ExerciseKind::IsArray, Some(cases)) => Box::new(IsArrayExercise::with_cases(cases)),
        (ExerciseKind::CloneArray, None) => Box::new(CloneArrayExercise::default()),
        (ExerciseKind::CloneArray, Some(cases)) => Box::new(CloneArrayExercise::with_cases(cases)),
        (ExerciseKind::NoRepeated, None) => Box::new(NoRepeatedExercise::default()),
        (ExerciseKind::NoRepeated, Some(cases)) => Box::new(NoRepeatedExercise::with_cases(cases)),
        (ExerciseKind::Reverse, None) => Box::new(ReverseExercise::default()),
        (ExerciseKind::Reverse, Some(cases)) => Box::new(ReverseExercise::with_cases(cases)),
    }
}
