//! # clang8
//!
//! Builds the cLang-8 grammatical error correction dataset by combining
//! cLang-8 targets with the learner sentences of the Lang-8 raw corpus.
//!
//! The crate can be used as a tool (see the `clang8` binary) or as a lib,
//! through [pipelines::clang8::Config] and [pipelines::Pipeline].
pub mod error;
pub mod io;
pub mod lang;
pub mod pipelines;
pub mod progress;
pub mod tokenize;
