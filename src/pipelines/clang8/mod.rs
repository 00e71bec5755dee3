//! cLang-8 dataset preparation.
//!
//! Joins the Lang-8 raw corpus with cLang-8 targets into source/target pairs.
mod join;
mod pipeline;
pub mod types;

pub use join::{Join, JoinStats};
pub use pipeline::{Clang8, Config, Report};
