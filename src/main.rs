use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info, warn};

use alchemist_config::AppConfig;
use data_alchemist::cli::{Cli, Commands};
use data_alchemist::commands::{
    export::run_export,
    is_fatal_failure,
    serve::run_serve,
    validate::{render_report, run_validate},
};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("加载配置失败")?;
    cli.apply_overrides(&mut config);

    alchemist_observability::init_from_config(&config.observability)?;

    run(&cli, &config).await.inspect_err(|err| {
        if is_fatal_failure(err) {
            error!("执行失败: {err:#}");
        } else {
            warn!("输入数据有误: {err:#}");
        }
    })
}

async fn run(cli: &Cli, config: &AppConfig) -> Result<ExitCode> {
    match &cli.command {
        Commands::Validate(args) => {
            let report = run_validate(args)?;
            println!("{}", render_report(&report, args.format)?.trim_end());
            if report.has_errors() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Export(args) => {
            let out = run_export(args, &config.export)?;
            println!("导出完成: {}", out.display());
        }
        Commands::Serve(args) => {
            info!("启动排班数据校验服务");
            run_serve(args, &config.api).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
