//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait, implemented by [clang8::Clang8].
pub mod clang8;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use clang8::Clang8;
pub use pipeline::Pipeline;
