/*! Rule based word segmentation.

Text is split on whitespace, then each chunk is split on Unicode word boundaries (UAX #29), with a few adjustments:

- abbreviations of the language are kept whole (`z.B.`, `т.е.`), even when surrounded by punctuation,
- runs of the same punctuation mark stay together (`...`, `!!`),
- English clitics are split off their host (`don't` → `do n't`, `I'm` → `I 'm`).
!*/
use std::collections::HashSet;

use itertools::Itertools;
use log::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::lang::Lang;

use super::exceptions;
use super::Tokenizer;

/// Punctuation that may precede an abbreviation within a whitespace-delimited chunk.
const OPENING: &[char] = &['(', '[', '{', '"', '\'', '«', '„', '“', '‘'];

/// Punctuation that may follow an abbreviation within a whitespace-delimited chunk.
const CLOSING: &[char] = &[
    ')', ']', '}', '"', '\'', '»', '“', '”', '’', ',', ';', ':', '!', '?',
];

/// Word tokenizer bound to a language.
#[derive(Debug, Clone)]
pub struct RuleTokenizer {
    abbreviations: &'static HashSet<&'static str>,
    clitics: &'static [&'static str],
}

impl RuleTokenizer {
    pub fn new(lang: Lang) -> Self {
        debug!(
            "loading rule tokenizer for {} (in place of {})",
            lang,
            lang.model_name()
        );
        Self {
            abbreviations: exceptions::abbreviations(lang),
            clitics: exceptions::suffix_clitics(lang),
        }
    }

    fn is_abbreviation(&self, chunk: &str) -> bool {
        self.abbreviations.contains(chunk.to_lowercase().as_str())
    }

    /// Try to find an abbreviation wrapped in opening/closing punctuation.
    ///
    /// Returns `(prefix, abbreviation, suffix)` on success.
    fn split_abbreviation<'t>(&self, chunk: &'t str) -> Option<(&'t str, &'t str, &'t str)> {
        let core = chunk.trim_start_matches(OPENING);
        let prefix = &chunk[..chunk.len() - core.len()];
        let stripped = core.trim_end_matches(CLOSING);
        let suffix = &core[stripped.len()..];

        if !stripped.is_empty() && self.is_abbreviation(stripped) {
            Some((prefix, stripped, suffix))
        } else {
            None
        }
    }

    /// Split a word off its clitic, if it ends with one.
    fn split_clitic<'t>(&self, word: &'t str) -> Option<(&'t str, &'t str)> {
        let lowered = word.to_lowercase();
        // lowercasing can change byte lengths outside of ASCII
        if lowered.len() != word.len() {
            return None;
        }
        self.clitics
            .iter()
            .find(|clitic| lowered.ends_with(*clitic) && lowered.len() > clitic.len())
            .map(|clitic| word.split_at(word.len() - clitic.len()))
    }

    fn segment_chunk(&self, chunk: &str, tokens: &mut Vec<String>) {
        if let Some((prefix, abbreviation, suffix)) = self.split_abbreviation(chunk) {
            tokens.extend(prefix.chars().map(String::from));
            tokens.push(abbreviation.to_string());
            tokens.extend(suffix.chars().map(String::from));
            return;
        }

        let words = chunk
            .split_word_bounds()
            .map(String::from)
            .coalesce(|a, b| {
                if is_same_punctuation_run(&a, &b) {
                    Ok(a + &b)
                } else {
                    Err((a, b))
                }
            });

        for word in words {
            match self.split_clitic(&word) {
                Some((host, clitic)) => {
                    tokens.push(host.to_string());
                    tokens.push(clitic.to_string());
                }
                None => tokens.push(word),
            }
        }
    }
}

/// true if both `a` and `b` are made of the same, single punctuation character.
fn is_same_punctuation_run(a: &str, b: &str) -> bool {
    let mut chars = a.chars();
    let c = match chars.next() {
        Some(c) => c,
        None => return false,
    };
    let is_punct = !c.is_alphanumeric() && !c.is_whitespace();
    is_punct && chars.all(|x| x == c) && !b.is_empty() && b.chars().all(|x| x == c)
}

impl Tokenizer for RuleTokenizer {
    fn segment(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for chunk in text.split_whitespace() {
            self.segment_chunk(chunk, &mut tokens);
        }
        tokens
    }
}
