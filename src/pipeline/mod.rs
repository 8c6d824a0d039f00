//! Pipeline module: ordered, optionally-labeled filter chains with
//! intermediate snapshots.

pub mod builder;
pub mod runner;

pub use builder::PipelineOptions;
pub use runner::{Pipeline, PipelineOutput};
