//! cLang-8 preparation pipeline.
//!
//! For each requested language:
//!
//! 1. cLang-8 targets are loaded in memory, keyed by Lang-8 ids,
//! 1. the Lang-8 raw corpus is streamed and joined against the targets,
//! 1. if requested, every pair is collected and tokenized,
//! 1. pairs are written in `output_dir`.
//!
//! By default, the first error aborts the whole run.
//! Setting [Config::keep_going] isolates languages from one another.
use std::path::PathBuf;

use log::{error, info, warn};

use crate::error::Error;
use crate::io::reader::targets_path;
use crate::io::writer::{output_path, write_pairs};
use crate::io::{Lang8Reader, TargetIndex};
use crate::lang::Lang;
use crate::pipelines::pipeline::Pipeline;
use crate::progress;
use crate::tokenize::{tokenize_pairs, RuleTokenizer, DEFAULT_BATCH_SIZE};

use super::join::{Join, JoinStats};
use super::types::AlignedPair;

/// Pipeline settings.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the Lang-8 raw corpus.
    pub lang8_dir: PathBuf,
    /// Directory holding `clang8_{lang}.detokenized.tsv` files.
    pub clang8_dir: PathBuf,
    /// Where output files are written. Created if missing.
    pub output_dir: PathBuf,
    pub tokenize_text: bool,
    /// Language codes, processed in order.
    pub languages: Vec<String>,
    pub batch_size: usize,
    /// Carry on with the next language when one fails.
    pub keep_going: bool,
    /// Display progress bars.
    pub progress: bool,
}

impl Config {
    /// Settings with defaults for everything but the Lang-8 directory.
    pub fn new(lang8_dir: PathBuf) -> Self {
        Self {
            lang8_dir,
            clang8_dir: PathBuf::from("./targets"),
            output_dir: PathBuf::from("./output_data"),
            tokenize_text: true,
            languages: vec!["ru".to_string(), "en".to_string(), "de".to_string()],
            batch_size: DEFAULT_BATCH_SIZE,
            keep_going: false,
            progress: true,
        }
    }
}

/// Outcome of the preparation of a single language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub lang: Lang,
    pub stats: JoinStats,
    pub pairs_written: u64,
    pub output_path: PathBuf,
}

pub struct Clang8 {
    config: Config,
}

impl Clang8 {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Prepare the dataset of a single language.
    ///
    /// The language is checked before any file is touched.
    pub fn prepare(&self, language: &str) -> Result<Report, Error> {
        let lang: Lang = language.parse()?;
        let config = &self.config;

        let index = TargetIndex::from_path(&targets_path(&config.clang8_dir, lang))?;
        let records = Lang8Reader::from_dir(&config.lang8_dir)?.records();
        let mut join = Join::new(
            &index,
            records,
            progress::bar(index.nb_targets(), config.progress)?,
        );

        std::fs::create_dir_all(&config.output_dir)?;
        let dst = output_path(&config.output_dir, lang, config.tokenize_text);

        let pairs_written = if config.tokenize_text {
            let tokenizer = RuleTokenizer::new(lang);
            let pairs = join.by_ref().collect::<Result<Vec<AlignedPair>, Error>>()?;
            let bar = progress::bar(2 * pairs.len() as u64, config.progress)?;
            let tokenized = tokenize_pairs(pairs, &tokenizer, config.batch_size, bar)?;
            write_pairs(tokenized.into_iter().map(Ok::<_, Error>), &dst)?
        } else {
            write_pairs(join.by_ref(), &dst)?
        };

        let stats = join.stats();
        if stats.unmatched() > 0 {
            warn!(
                "[{}] {} cLang-8 targets did not match any Lang-8 raw document",
                lang,
                stats.unmatched()
            );
        }

        Ok(Report {
            lang,
            stats,
            pairs_written,
            output_path: dst,
        })
    }

    fn log_report(report: &Report) {
        info!(
            "[{}] {} targets read, {} pairs written to {}",
            report.lang,
            report.stats.targets_read,
            report.pairs_written,
            report.output_path.display()
        );
    }
}

impl Pipeline<Vec<Report>> for Clang8 {
    fn run(&self) -> Result<Vec<Report>, Error> {
        if self.config.languages.is_empty() {
            warn!("no language to prepare");
        }
        let mut reports = Vec::with_capacity(self.config.languages.len());
        let mut failed = Vec::new();

        for language in &self.config.languages {
            info!("{}", language);
            match self.prepare(language) {
                Ok(report) => {
                    Self::log_report(&report);
                    reports.push(report);
                }
                Err(e) if self.config.keep_going => {
                    error!("[{}] preparation failed: {}", language, e);
                    failed.push(language.as_str());
                }
                Err(e) => return Err(e),
            }
        }

        if !failed.is_empty() {
            return Err(Error::Custom(format!(
                "preparation failed for languages: {}",
                failed.join(",")
            )));
        }
        Ok(reports)
    }
}
