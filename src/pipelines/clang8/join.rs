//! Lang-8/cLang-8 join.
//!
//! Raw records are streamed and looked up in a [TargetIndex].
//! Each target of a record yields the learner sentence it corrects along with the correction.
//!
//! Pairs come out in raw corpus order, then in targets file order within a record.
//! Targets whose record is absent from the raw corpus are dropped, which only shows
//! as a difference between [JoinStats::targets_read] and [JoinStats::pairs_emitted].
use indicatif::ProgressBar;
use log::info;

use crate::error::Error;
use crate::io::TargetIndex;

use super::types::{AlignedPair, RawRecord};

/// Counters of a join run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct JoinStats {
    pub records_read: u64,
    pub targets_read: u64,
    pub pairs_emitted: u64,
}

impl JoinStats {
    /// Number of targets that did not find their raw record (so far).
    pub fn unmatched(&self) -> u64 {
        self.targets_read.saturating_sub(self.pairs_emitted)
    }
}

/// Record being joined and the position of its next target.
struct Current<'a> {
    record: RawRecord,
    targets: &'a [(usize, String)],
    pos: usize,
}

/// Lazy join of raw records against a [TargetIndex].
///
/// Yields an error if a record can't be read, or if a target points past the end of its record.
pub struct Join<'a, I> {
    index: &'a TargetIndex,
    records: I,
    current: Option<Current<'a>>,
    stats: JoinStats,
    progress: ProgressBar,
    done: bool,
}

impl<'a, I> Join<'a, I>
where
    I: Iterator<Item = Result<RawRecord, Error>>,
{
    pub fn new(index: &'a TargetIndex, records: I, progress: ProgressBar) -> Self {
        Self {
            index,
            records,
            current: None,
            stats: JoinStats {
                targets_read: index.nb_targets(),
                ..Default::default()
            },
            progress,
            done: false,
        }
    }

    /// Join without progress display.
    pub fn quiet(index: &'a TargetIndex, records: I) -> Self {
        Self::new(index, records, ProgressBar::hidden())
    }

    pub fn stats(&self) -> JoinStats {
        self.stats
    }
}

impl<'a, I> Iterator for Join<'a, I>
where
    I: Iterator<Item = Result<RawRecord, Error>>,
{
    type Item = Result<AlignedPair, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            if let Some(cur) = &mut self.current {
                if let Some((number, target)) = cur.targets.get(cur.pos) {
                    cur.pos += 1;
                    let pair = match cur.record.sentences().get(*number) {
                        Some(source) => {
                            self.stats.pairs_emitted += 1;
                            self.progress.inc(1);
                            Ok(AlignedPair::new(source.clone(), target.clone()))
                        }
                        None => Err(Error::SentenceOutOfRange {
                            journal_id: cur.record.journal_id(),
                            sentence_id: cur.record.sentence_id(),
                            position: *number,
                            nb_sentences: cur.record.sentences().len(),
                        }),
                    };
                    return Some(pair);
                }
            }
            self.current = None;

            match self.records.next() {
                Some(Ok(record)) => {
                    self.stats.records_read += 1;
                    if let Some(targets) = self.index.get(&record.key()) {
                        self.current = Some(Current {
                            record,
                            targets,
                            pos: 0,
                        });
                    }
                }
                Some(Err(e)) => return Some(Err(e)),
                None => {
                    self.done = true;
                    self.progress.finish();
                    info!(
                        "{} sources mapped to cLang-8 targets.",
                        self.stats.pairs_emitted
                    );
                    return None;
                }
            }
        }
    }
}
