//! Infrastructure layer - Port implementations
//!
//! Profile storage adapters and the task that owns the exposure job.

pub mod repositories;
pub mod tasks;
