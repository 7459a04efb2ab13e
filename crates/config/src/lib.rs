pub mod models;
pub mod validation;

// Re-export commonly used types
pub use models::{ApiConfig, AppConfig, ExportConfig, LogFormat, ObservabilityConfig};
pub use validation::{ConfigValidator, ValidationUtils};
