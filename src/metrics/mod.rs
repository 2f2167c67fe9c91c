mod types;


pub use types::{RunSummary, WorkerStats};
