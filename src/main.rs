use clap::Parser;
use pattern_catalog::core::ConfigProvider;
use pattern_catalog::utils::{logger, validation::Validate};
use pattern_catalog::{build_runner, CatalogConfig, CatalogError, CliConfig, ExampleRunner};
use std::io::Write;

fn main() {
    let cli = CliConfig::parse();

    // 載入設定檔（若有）並套用命令列覆蓋
    let file_config = match &cli.config {
        Some(path) => match CatalogConfig::from_file(path) {
            Ok(mut config) => {
                config.apply_cli_overrides(&cli);
                Some(config)
            }
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    // 初始化日誌
    let level = file_config.as_ref().and_then(|c| c.log_level());
    if file_config.as_ref().map(|c| c.json_logging()).unwrap_or(false) {
        logger::init_json_logger(cli.verbose, level);
    } else {
        logger::init_cli_logger_with_level(cli.verbose, level);
    }

    tracing::info!("Starting pattern-catalog CLI");
    tracing::debug!("CLI config: {:?}", cli);

    if cli.list {
        match build_runner(&CliConfig::default()) {
            Ok(runner) => {
                for (name, description) in runner.descriptions() {
                    println!("{:<28} {}", name, description);
                }
            }
            Err(e) => report_failure("Cannot list examples", &e),
        }
        return;
    }

    let outcome = match &file_config {
        Some(config) => {
            if let Err(e) = config.validate() {
                report_failure("Configuration validation failed", &e);
                std::process::exit(2);
            }
            tracing::info!("✅ Configuration '{}' loaded and validated", config.catalog.name);
            run(config, cli.summary)
        }
        None => run(&cli, cli.summary),
    };

    if let Err(e) = outcome {
        report_failure("Example run failed", &e);
    }
}

fn run(config: &impl ConfigProvider, summary: bool) -> pattern_catalog::Result<()> {
    let runner: ExampleRunner = build_runner(config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let reports = runner.run_all(&mut out)?;

    tracing::info!("✅ {} examples completed", reports.len());

    if summary {
        let summary = runner.execution_summary(&reports);
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
    }

    Ok(())
}

fn report_failure(context: &str, e: &CatalogError) {
    tracing::error!("❌ {}: {} (Severity: {:?})", context, e, e.severity());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = e.exit_code();
    if exit_code > 0 {
        std::process::exit(exit_code);
    }
}
