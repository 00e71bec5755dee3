//! Tab-separated source/target writer.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::error::Error;
use crate::lang::Lang;
use crate::pipelines::clang8::types::SourceTarget;

/// Label added to output file names when texts are tokenized.
pub const TOKENIZED_LABEL: &str = ".spacy_tokenized";

/// Path of the output file of `lang` in `output_dir`.
pub fn output_path(output_dir: &Path, lang: Lang, tokenized: bool) -> PathBuf {
    let label = if tokenized { TOKENIZED_LABEL } else { "" };
    output_dir.join(format!("clang8_source_target_{}{}.tsv", lang, label))
}

/// Replace tabs and newlines by spaces so that a text fits in a single TSV field.
pub fn clean_spaces(text: &str) -> String {
    text.replace(['\t', '\n', '\r'], " ")
}

/// Writes one `source\ttarget` line per pair.
pub struct TsvWriter<W: Write> {
    inner: W,
    nb_written: u64,
}

impl TsvWriter<BufWriter<File>> {
    /// Create (or truncate) the file at `dst`.
    pub fn create(dst: &Path) -> Result<Self, Error> {
        let f = File::create(dst)?;
        Ok(Self::new(BufWriter::new(f)))
    }
}

impl<W: Write> TsvWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            nb_written: 0,
        }
    }

    /// Write a single pair.
    pub fn write_single<P: SourceTarget>(&mut self, pair: &P) -> Result<(), Error> {
        let source = clean_spaces(pair.source());
        let target = clean_spaces(pair.target());
        writeln!(self.inner, "{}\t{}", source, target)?;
        self.nb_written += 1;
        Ok(())
    }

    /// Write every pair of `pairs`, stopping at the first error.
    ///
    /// Pairs are fallible so that lazy pipelines can be written directly.
    pub fn write_all<P, I>(&mut self, pairs: I) -> Result<u64, Error>
    where
        P: SourceTarget,
        I: IntoIterator<Item = Result<P, Error>>,
    {
        for pair in pairs {
            self.write_single(&pair?)?;
        }
        Ok(self.nb_written)
    }

    pub fn nb_written(&self) -> u64 {
        self.nb_written
    }

    /// Flush and get the inner writer back.
    pub fn finish(mut self) -> Result<W, Error> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Write `pairs` to `dst`, returning the number of written pairs.
pub fn write_pairs<P, I>(pairs: I, dst: &Path) -> Result<u64, Error>
where
    P: SourceTarget,
    I: IntoIterator<Item = Result<P, Error>>,
{
    let mut w = TsvWriter::create(dst)?;
    let nb_written = w.write_all(pairs)?;
    w.finish()?;
    info!("Wrote the source-target pairs to:\n{}", dst.display());
    Ok(nb_written)
}
