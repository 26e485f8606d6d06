use anyhow::Context;
use array_kata::core::ConfigProvider;
use array_kata::utils::error::{ErrorSeverity, KataError};
use array_kata::utils::{logger, validation::Validate};
use array_kata::{render, CliConfig, ExerciseRunner, KataConfig};
use clap::Parser;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting array-kata");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = cli.validate() {
        fail(&e);
    }

    let result = match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading exercises from: {}", path);
            let mut config = match KataConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => fail(&e),
            };

            config.apply_cli_overrides(&cli);

            if let Err(e) = config.validate() {
                fail(&e);
            }
            tracing::info!(
                "✅ Loaded '{}' with {} custom case(s)",
                config.kata.name,
                config.case_count()
            );
            run_and_print(config)
        }
        None => run_and_print(cli),
    };

    match result {
        Ok(lines) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for line in lines {
                writeln!(out, "{}", line).context("failed to write results to stdout")?;
            }
        }
        Err(e) => fail(&e),
    }

    Ok(())
}

fn run_and_print<C: ConfigProvider>(config: C) -> array_kata::Result<Vec<String>> {
    let format = config.output_format();
    let runner = ExerciseRunner::new(config);
    let reports = runner.run()?;
    tracing::info!("✅ Completed {} exercise(s)", reports.len());
    render(&reports, format)
}

fn fail(e: &KataError) -> ! {
    tracing::error!(
        "❌ array-kata failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
