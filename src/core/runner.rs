use crate::core::exercises::exercise_for;
use crate::domain::model::{CaseOutcome, ExerciseKind, ExerciseReport, OutputFormat};
use crate::domain::ports::{ConfigProvider, Exercise};
use crate::utils::error::Result;

pub struct ExerciseRunner<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> ExerciseRunner<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// 依固定順序執行被選取的練習
    pub fn run(&self) -> Result<Vec<ExerciseReport>> {
        let selected = self.config.selected_exercises();
        let kinds: Vec<ExerciseKind> = ExerciseKind::ALL
            .into_iter()
            .filter(|kind| selected.contains(kind))
            .collect();

        tracing::info!("Running {} exercise(s)", kinds.len());

        let mut reports = Vec::with_capacity(kinds.len());
        for kind in kinds {
            let exercise = exercise_for(kind, self.config.cases_for(kind));
            reports.push(run_exercise(exercise.as_ref())?);
        }
        Ok(reports)
    }
}

pub fn run_exercise(exercise: &dyn Exercise) -> Result<ExerciseReport> {
    let kind = exercise.kind();
    tracing::debug!("{}: {} case(s)", kind, exercise.cases().len());

    let mut cases = Vec::with_capacity(exercise.cases().len());
    for input in exercise.cases() {
        let output = exercise.solve(input)?;
        let matches_builtin = exercise.cross_check(input, &output);

        if matches_builtin == Some(false) {
            tracing::warn!("{}: result differs from the standard library for {}", kind, input);
        }
        tracing::debug!("{}({}) => {}", kind, input, output);

        cases.push(CaseOutcome {
            input: input.clone(),
            output,
            matches_builtin,
        });
    }

    Ok(ExerciseReport {
        exercise: kind,
        cases,
    })
}

/// 將報告轉成要印到 stdout 的文字行
pub fn render(reports: &[ExerciseReport], format: OutputFormat) -> Result<Vec<String>> {
    match format {
        OutputFormat::Pretty => Ok(vec![serde_json::to_string_pretty(reports)?]),
        OutputFormat::Json => {
            let mut lines = Vec::new();
            for report in reports {
                for case in &report.cases {
                    lines.push(serde_json::to_string(&case.output)?);
                }
            }
            Ok(lines)
        }
        OutputFormat::Plain => Ok(reports
            .iter()
            .flat_map(|report| {
                report.cases.iter().map(move |case| {
                    let mut line = format!("{}({}) => {}", report.exercise, case.input, case.output);
                    if let Some(matches) = case.matches_builtin {
                        line.push_str(&format!(" [matches builtin: {}]", matches));
                    }
                    line
                })
            })
            .collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    struct FixedConfig {
        selected: Vec<ExerciseKind>,
        reverse_cases: Option<Vec<Value>>,
    }

    impl ConfigProvider for FixedConfig {
        fn selected_exercises(&self) -> Vec<ExerciseKind> {
            self.selected.clone()
        }

        fn cases_for(&self, kind: ExerciseKind) -> Option<Vec<Value>> {
            match kind {
                ExerciseKind::Reverse => self.reverse_cases.clone(),
                _ => None,
            }
        }

        fn output_format(&self) -> OutputFormat {
            OutputFormat::Json
        }
    }

    #[test]
    fn test_run_uses_canonical_order() {
        let runner = ExerciseRunner::new(FixedConfig {
            selected: vec![ExerciseKind::Reverse, ExerciseKind::IsArray],
            reverse_cases: None,
        });
        let reports = runner.run().unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].exercise, ExerciseKind::IsArray);
        assert_eq!(reports[1].exercise, ExerciseKind::Reverse);
    }

    #[test]
    fn test_run_with_custom_cases() {
        let runner = ExerciseRunner::new(FixedConfig {
            selected: vec![ExerciseKind::Reverse],
            reverse_cases: Some(vec![json!([true, null, "x"])]),
        });
        let reports = runner.run().unwrap();

        assert_eq!(reports[0].cases.len(), 1);
        assert_eq!(reports[0].cases[0].output, json!(["x", null, true]));
        assert_eq!(reports[0].cases[0].matches_builtin, Some(true));
    }

    #[test]
    fn test_run_propagates_bad_case() {
        let runner = ExerciseRunner::new(FixedConfig {
            selected: vec![ExerciseKind::Reverse],
            reverse_cases: Some(vec![json!("abc")]),
        });
        assert!(runner.run().is_err());
    }

    #[test]
    fn test_render_json_lines() {
        let report = ExerciseReport {
            exercise: ExerciseKind::NoRepeated,
            cases: vec![CaseOutcome {
                input: json!(["a", "b", "b"]),
                output: json!(["a", "b"]),
                matches_builtin: None,
            }],
        };
        let lines = render(&[report], OutputFormat::Json).unwrap();
        assert_eq!(lines, vec![r#"["a","b"]"#.to_string()]);
    }

    #[test]
    fn test_render_plain() {
        let report = ExerciseReport {
            exercise: ExerciseKind::Reverse,
            cases: vec![CaseOutcome {
                input: json!([1, 2]),
                output: json!([2, 1]),
                matches_builtin: Some(true),
            }],
        };
        let lines = render(&[report], OutputFormat::Plain).unwrap();
        assert_eq!(lines, vec!["reverse([1,2]) => [2,1] [matches builtin: true]".to_string()]);
    }
}
