/*! Word tokenization

Holds a [Tokenizer] trait, implemented by [RuleTokenizer], and the tokenization stage of the pipeline ([tokenize_pairs]).

The tokenization stage needs every pair in memory: sources and targets are split in two columns
that are segmented independently, in batches, then zipped back together.
Memory usage is then proportional to the number of pairs.
!*/
mod exceptions;
mod rules;

use indicatif::ProgressBar;
use itertools::Itertools;
use log::info;

pub use rules::RuleTokenizer;

use crate::error::Error;
use crate::pipelines::clang8::types::{AlignedPair, TokenizedPair};

/// Default number of texts segmented at once.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Segments text into word tokens.
pub trait Tokenizer {
    /// Segment a single text.
    fn segment(&self, text: &str) -> Vec<String>;

    /// Segment a batch of texts. Output must have the same length and order as `texts`.
    fn segment_batch(&self, texts: &[String]) -> Result<Vec<Vec<String>>, Error> {
        Ok(texts.iter().map(|t| self.segment(t)).collect())
    }

    /// Segment all `texts`, `batch_size` at a time.
    fn pipe(&self, texts: &[String], batch_size: usize) -> Result<Vec<Vec<String>>, Error> {
        pipe_with_progress(self, texts, batch_size, &ProgressBar::hidden())
    }
}

/// Segment all `texts`, `batch_size` at a time, advancing `progress` after each batch.
pub fn pipe_with_progress<T>(
    tokenizer: &T,
    texts: &[String],
    batch_size: usize,
    progress: &ProgressBar,
) -> Result<Vec<Vec<String>>, Error>
where
    T: Tokenizer + ?Sized,
{
    let mut ret = Vec::with_capacity(texts.len());
    for batch in texts.chunks(batch_size.max(1)) {
        let segmented = tokenizer.segment_batch(batch)?;
        if segmented.len() != batch.len() {
            return Err(Error::Tokenizer(format!(
                "got {} results for a batch of {} texts",
                segmented.len(),
                batch.len()
            )));
        }
        ret.extend(segmented);
        progress.inc(batch.len() as u64);
    }
    Ok(ret)
}

/// Tokenize sources and targets of `pairs`, keeping their order.
///
/// Tokens are joined by a single space.
/// `progress` counts segmented texts, that is twice the number of pairs.
pub fn tokenize_pairs<T>(
    pairs: Vec<AlignedPair>,
    tokenizer: &T,
    batch_size: usize,
    progress: ProgressBar,
) -> Result<Vec<TokenizedPair>, Error>
where
    T: Tokenizer + ?Sized,
{
    info!("Tokenizing...");
    let nb_pairs = pairs.len();
    let (sources, targets): (Vec<String>, Vec<String>) =
        pairs.into_iter().map(|p| (p.source, p.target)).unzip();

    progress.set_length(2 * nb_pairs as u64);
    let sources = pipe_with_progress(tokenizer, &sources, batch_size, &progress)?;
    let targets = pipe_with_progress(tokenizer, &targets, batch_size, &progress)?;

    if sources.len() != nb_pairs || targets.len() != nb_pairs {
        return Err(Error::Tokenizer(format!(
            "tokenized {} sources and {} targets out of {} pairs",
            sources.len(),
            targets.len(),
            nb_pairs
        )));
    }

    let tokenized = sources
        .into_iter()
        .zip(targets)
        .map(|(source, target)| TokenizedPair {
            source: source.iter().join(" "),
            target: target.iter().join(" "),
        })
        .collect();
    progress.finish();

    Ok(tokenized)
}
