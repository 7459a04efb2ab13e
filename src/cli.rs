use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use alchemist_config::{AppConfig, LogFormat};
use alchemist_domain::WeightPreset;

/// 命令行入口
#[derive(Parser, Debug)]
#[command(name = "alchemist")]
#[command(version)]
#[command(about = "排班数据校验与导出工具")]
#[command(long_about = "校验客户、Worker、任务三类数据，生成带规则配置的导出包，或以HTTP服务方式提供校验接口")]
pub struct Cli {
    /// 配置文件路径（缺省时依次查找 config/alchemist.toml、alchemist.toml）
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// 日志级别，覆盖配置文件
    #[arg(
        short = 'l',
        long,
        global = true,
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    pub log_level: Option<String>,

    /// 日志格式，覆盖配置文件
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 校验数据文件并输出诊断
    Validate(ValidateArgs),
    /// 校验通过后写出导出包
    Export(ExportArgs),
    /// 启动HTTP服务
    Serve(ServeArgs),
}

/// 三类数据文件，支持 `.csv` 和 `.json`
#[derive(Args, Debug, Clone, Default)]
pub struct DatasetFiles {
    /// 客户数据文件
    #[arg(long)]
    pub clients: Option<PathBuf>,
    /// Worker数据文件
    #[arg(long)]
    pub workers: Option<PathBuf>,
    /// 任务数据文件
    #[arg(long)]
    pub tasks: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub files: DatasetFiles,

    /// 输出格式
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub files: DatasetFiles,

    /// 规则文件（JSON数组）
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// 优先级权重文件（JSON对象）
    #[arg(long, conflicts_with = "preset")]
    pub weights: Option<PathBuf>,

    /// 权重预设: maximize-fulfillment、fair-distribution、minimize-workload
    #[arg(long)]
    pub preset: Option<WeightPreset>,

    /// 输出文件，缺省为 `<output_dir>/<prefix>-<YYYY-MM-DD>.json`
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// 监听地址，覆盖 api.bind_address
    #[arg(short, long)]
    pub bind: Option<String>,
}

impl Cli {
    /// 命令行参数覆盖配置中的日志设置
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
        if let Some(format) = self.log_format {
            config.observability.log_format = format;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validate() {
        let cli = Cli::try_parse_from([
            "alchemist",
            "validate",
            "--clients",
            "clients.csv",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Validate(args) => {
                assert_eq!(args.files.clients, Some(PathBuf::from("clients.csv")));
                assert!(args.files.workers.is_none());
                assert_eq!(args.format, ReportFormat::Json);
            }
            other => panic!("expected validate, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_export_preset() {
        let cli = Cli::try_parse_from([
            "alchemist",
            "export",
            "--tasks",
            "tasks.json",
            "--preset",
            "fair-distribution",
        ])
        .unwrap();

        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.preset, Some(WeightPreset::FairDistribution));
                assert!(args.out.is_none());
            }
            other => panic!("expected export, got {other:?}"),
        }
    }

    #[test]
    fn test_weights_conflict_with_preset() {
        let result = Cli::try_parse_from([
            "alchemist",
            "export",
            "--weights",
            "w.json",
            "--preset",
            "minimize-workload",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_log_overrides() {
        let cli = Cli::try_parse_from([
            "alchemist",
            "serve",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--bind",
            "127.0.0.1:9000",
        ])
        .unwrap();

        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.observability.log_level, "debug");
        assert_eq!(config.observability.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        assert!(Cli::try_parse_from(["alchemist", "-l", "loud", "serve"]).is_err());
    }
}
