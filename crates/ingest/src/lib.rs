//! 上传文件的读取与规范化
//!
//! 支持 JSON 数组和带表头的 CSV 文件，输出规范记录组成的 [`Dataset`](alchemist_domain::Dataset)。

pub mod loader;
pub mod normalize;

pub use loader::{load_dataset, load_file, parse_dataset, parse_rows, FileFormat};
pub use normalize::{column_family, normalize_header, normalize_row, normalize_value, ColumnFamily};
