mod engine;

pub use engine::{SyncEngine, SyncSummary};
