/*!
# Source/target writing

Pairs are written as `source\ttarget\n` lines, with tabs and newlines inside texts replaced by spaces.
!*/
mod tsvwriter;

pub use tsvwriter::{clean_spaces, output_path, write_pairs, TsvWriter, TOKENIZED_LABEL};
