pub mod clear;
pub mod update;

pub use clear::{AppReloader, ClearStorageFlow, ClearStorageState};
pub use update::{ConfigUpdateFlow, UpdateOutcome};
