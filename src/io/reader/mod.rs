/*! Input reading utilities

- [lang8] streams the Lang-8 raw corpus,
- [targets] loads cLang-8 targets into a [TargetIndex].
!*/
pub mod lang8;
pub mod targets;

pub use lang8::{Lang8Reader, RawLine, Records, SkipReason, LANG8_RAW_FILENAME};
pub use targets::{targets_path, TargetIndex};
