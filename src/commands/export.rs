use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use alchemist_config::ExportConfig;
use alchemist_domain::{PriorityWeights, Rule};
use alchemist_validator::prepare_export;

use super::load_files;
use crate::cli::ExportArgs;

/// 校验并写出导出包，返回写入的文件路径
pub fn run_export(args: &ExportArgs, config: &ExportConfig) -> Result<PathBuf> {
    let dataset = load_files(&args.files)?;
    let rules = match &args.rules {
        Some(path) => read_rules(path)?,
        None => Vec::new(),
    };
    let weights = resolve_weights(args)?;

    let bundle = prepare_export(&dataset, &rules, weights)?;

    let out = args
        .out
        .clone()
        .unwrap_or_else(|| config.default_output_path(Utc::now().date_naive()));
    let content = if config.pretty {
        serde_json::to_string_pretty(&bundle)
    } else {
        serde_json::to_string(&bundle)
    }
    .context("序列化导出包失败")?;

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("创建输出目录失败: {}", parent.display()))?;
    }
    fs::write(&out, content).with_context(|| format!("写入导出文件失败: {}", out.display()))?;

    info!("导出包已写入: {}", out.display());
    Ok(out)
}

fn read_rules(path: &Path) -> Result<Vec<Rule>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("读取规则文件失败: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("解析规则文件失败: {}", path.display()))
}

fn resolve_weights(args: &ExportArgs) -> Result<PriorityWeights> {
    if let Some(preset) = args.preset {
        return Ok(PriorityWeights::from_preset(preset));
    }

    match &args.weights {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("读取权重文件失败: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("解析权重文件失败: {}", path.display()))
        }
        None => Ok(PriorityWeights::default()),
    }
}
