//! Command implementations for partsctl CLI

pub mod parts;

// Re-export main dispatcher functions for flat access from main.rs
pub use parts::{run_add, run_list, run_rm, run_search, run_show, run_update};
pub use parts::{AddArgs, RmArgs, SearchArgs, ShowArgs, UpdateArgs};
