//! Library side of the `job-market` binary.

pub mod logging;
pub mod menu;
pub mod pipeline;
pub mod summary;
pub mod types;
