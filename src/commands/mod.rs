pub mod export;
pub mod serve;
pub mod validate;

use anyhow::{Context, Result};

use alchemist_domain::Dataset;
use alchemist_errors::AlchemistError;
use alchemist_ingest::load_dataset;

use crate::cli::DatasetFiles;

/// 读取命令行指定的数据文件，未指定的集合视为空
pub fn load_files(files: &DatasetFiles) -> Result<Dataset> {
    if files.clients.is_none() && files.workers.is_none() && files.tasks.is_none() {
        anyhow::bail!("至少需要指定 --clients、--workers、--tasks 中的一个");
    }

    load_dataset(
        files.clients.as_deref(),
        files.workers.as_deref(),
        files.tasks.as_deref(),
    )
    .context("读取数据文件失败")
}

/// 失败是否来自系统本身（配置错误、内部错误），而不是输入数据
pub fn is_fatal_failure(err: &anyhow::Error) -> bool {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<AlchemistError>())
        .map_or(true, AlchemistError::is_fatal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_fatal_failure_classification() {
        let blocked = anyhow::Error::from(AlchemistError::export_blocked(2));
        assert!(!is_fatal_failure(&blocked));

        let ingestion: Result<()> = Err(AlchemistError::ingestion("clients", 3, "bad"))
            .context("读取数据文件失败");
        assert!(!is_fatal_failure(&ingestion.unwrap_err()));

        let config = anyhow::Error::from(AlchemistError::config_error("api.bind_address"));
        assert!(is_fatal_failure(&config));

        assert!(is_fatal_failure(&anyhow::anyhow!("未知错误")));
    }
}
