use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlchemistError {
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
    #[error("序列化错误: {0}")]
    Serialization(String),
    #[error("CSV解析错误: {0}")]
    Csv(String),
    #[error("不支持的文件格式: {0}")]
    UnsupportedFormat(String),
    #[error("数据导入失败: {dataset} 第{row}行 - {message}")]
    Ingestion {
        dataset: String,
        row: usize,
        message: String,
    },
    #[error("配置错误: {0}")]
    Configuration(String),
    #[error("存在{errors}个校验错误，禁止导出")]
    ExportBlocked { errors: usize },
    #[error("无效的请求: {0}")]
    InvalidRequest(String),
    #[error("内部错误: {0}")]
    Internal(String),
}

pub type AlchemistResult<T> = Result<T, AlchemistError>;

impl AlchemistError {
    pub fn ingestion<D: Into<String>, M: Into<String>>(dataset: D, row: usize, message: M) -> Self {
        Self::Ingestion {
            dataset: dataset.into(),
            row,
            message: message.into(),
        }
    }
    pub fn unsupported_format<S: Into<String>>(what: S) -> Self {
        Self::UnsupportedFormat(what.into())
    }
    pub fn config_error<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }
    pub fn invalid_request<S: Into<String>>(msg: S) -> Self {
        Self::InvalidRequest(msg.into())
    }
    pub fn export_blocked(errors: usize) -> Self {
        Self::ExportBlocked { errors }
    }
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AlchemistError::Internal(_) | AlchemistError::Configuration(_)
        )
    }
    /// 输入数据本身有问题，修正数据后可重试
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            AlchemistError::Serialization(_)
                | AlchemistError::Csv(_)
                | AlchemistError::UnsupportedFormat(_)
                | AlchemistError::Ingestion { .. }
                | AlchemistError::InvalidRequest(_)
        )
    }
    pub fn user_message(&self) -> &str {
        match self {
            AlchemistError::Ingestion { .. } => "上传的数据无法解析，请检查对应行",
            AlchemistError::UnsupportedFormat(_) => "仅支持 JSON 和 CSV 文件",
            AlchemistError::Csv(_) => "CSV 文件格式有误",
            AlchemistError::Serialization(_) => "数据格式有误",
            AlchemistError::ExportBlocked { .. } => "请先修复所有校验错误再导出",
            AlchemistError::InvalidRequest(_) => "请求参数有误",
            _ => "系统繁忙，请稍后重试",
        }
    }
}

impl From<serde_json::Error> for AlchemistError {
    fn from(err: serde_json::Error) -> Self {
        AlchemistError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for AlchemistError {
    fn from(err: csv::Error) -> Self {
        AlchemistError::Csv(err.to_string())
    }
}

impl From<anyhow::Error> for AlchemistError {
    fn from(err: anyhow::Error) -> Self {
        AlchemistError::Internal(err.to_string())
    }
}
