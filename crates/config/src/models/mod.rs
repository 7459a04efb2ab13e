pub mod api_observability;
pub mod app_config;
pub mod export;

pub use api_observability::{ApiConfig, LogFormat, ObservabilityConfig};
pub use app_config::AppConfig;
pub use export::ExportConfig;
