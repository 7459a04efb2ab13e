pub mod dataset;
pub mod export;
pub mod findings;
pub mod models;
pub mod rules;
pub mod serde_helpers;
pub mod value_objects;

pub use dataset::*;
pub use export::*;
pub use findings::*;
pub use models::{columns, Client, Task, Worker};
pub use rules::*;
pub use value_objects::*;
