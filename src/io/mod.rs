/*!
# IO utilities

Reading of the Lang-8 raw corpus and cLang-8 targets, writing of source/target files.
!*/
pub mod reader;
pub mod writer;

pub use reader::{Lang8Reader, TargetIndex};
pub use writer::TsvWriter;
