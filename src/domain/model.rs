use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// 動態元素的序列；元素型別不限
pub type Sequence = Vec<Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", value(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    IsArray,
    CloneArray,
    NoRepeated,
    Reverse,
}

impl ExerciseKind {
    /// Canonical run order.
    pub const ALL: [ExerciseKind; 4] = [
        ExerciseKind::IsArray,
        ExerciseKind::CloneArray,
        ExerciseKind::NoRepeated,
        ExerciseKind::Reverse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseKind::IsArray => "is_array",
            ExerciseKind::CloneArray => "clone_array",
            ExerciseKind::NoRepeated => "no_repeated",
            ExerciseKind::Reverse => "reverse",
        }
    }

    /// is_array 接受任何值，其餘練習只接受陣列
    pub fn requires_sequence(&self) -> bool {
        !matches!(self, ExerciseKind::IsArray)
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One compact JSON line per case
    #[default]
    Json,
    /// All reports as one pretty-printed JSON document
    Pretty,
    /// `exercise(input) => output`
    Plain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseOutcome {
    pub input: Value,
    pub output: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches_builtin: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseReport {
    pub exercise: ExerciseKind,
    pub cases: Vec<CaseOutcome>,
}

/// A reference-counted element compared by identity.
///
/// Cloning shares the referent instead of copying it, and two `Shared`
/// values are equal only when they point at the same allocation. Use it
/// for compound elements that must behave like references.
#[derive(Debug, Default)]
pub struct Shared<T>(Rc<T>);

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(value))
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T> Eq for Shared<T> {}

impl<T> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}
