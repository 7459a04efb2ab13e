pub mod columns;
pub mod client;
pub mod task;
pub mod worker;

pub use client::Client;
pub use task::Task;
pub use worker::Worker;
