pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::KataConfig;

pub use crate::core::array_ops::{
    clone_array, is_array, no_repeated, no_repeated_by, reverse, reverse_copy, same_element,
};
pub use crate::core::runner::{render, ExerciseRunner};
pub use domain::model::{ExerciseKind, OutputFormat, Shared};
pub use utils::error::{KataError, Result};
