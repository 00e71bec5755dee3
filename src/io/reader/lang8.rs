/*! Lang-8 raw corpus reader.

The raw corpus holds one JSON value per line. Two layouts are understood:

- the distributed one, a JSON array `[journal_id, sentence_id, learning_language, native_language, sources, targets]`,
  where ids are taken positionally and sentences are the second-to-last element,
- a JSON object with `journal_id`, `sentence_id` and `sources` keys.

Ids can either be integers or strings holding an integer.

Lines that can't be understood are not errors: they are reported as [RawLine::Skipped],
and [Records] drops them silently.
!*/
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::{info, trace};
use serde::Deserialize;
use serde_json::Value;

use crate::error::Error;
use crate::pipelines::clang8::types::RawRecord;

/// File name of the supported Lang-8 raw corpus release.
pub const LANG8_RAW_FILENAME: &str = "lang-8-20111007-L1-v2.dat";

/// Why a raw corpus line was not turned into a [RawRecord].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// line is not valid UTF-8
    Encoding,
    /// line is not valid JSON, or is not an array/object
    Json(String),
    /// JSON is valid but ids or sentences are missing or of the wrong type
    Layout(&'static str),
}

/// Outcome of parsing a single raw corpus line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawLine {
    Parsed(RawRecord),
    Skipped(SkipReason),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Id {
    Int(i64),
    Text(String),
}

impl Id {
    fn to_i64(&self) -> Option<i64> {
        match self {
            Id::Int(i) => Some(*i),
            Id::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawObject {
    journal_id: Id,
    sentence_id: Id,
    sources: Vec<String>,
}

fn value_to_id(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn value_to_sentences(v: &Value) -> Option<Vec<String>> {
    v.as_array()?
        .iter()
        .map(|s| s.as_str().map(String::from))
        .collect()
}

/// Parse a single raw corpus line.
pub fn parse_line(line: &[u8]) -> RawLine {
    let line = match std::str::from_utf8(line) {
        Ok(l) => l,
        Err(_) => return RawLine::Skipped(SkipReason::Encoding),
    };

    let value: Value = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => return RawLine::Skipped(SkipReason::Json(e.to_string())),
    };

    match value {
        Value::Object(_) => {
            // maps only: derived structs also accept positional arrays
            let o: RawObject = match serde_json::from_value(value) {
                Ok(o) => o,
                Err(e) => return RawLine::Skipped(SkipReason::Json(e.to_string())),
            };
            match (o.journal_id.to_i64(), o.sentence_id.to_i64()) {
                (Some(j), Some(s)) => RawLine::Parsed(RawRecord::new(j, s, o.sources)),
                _ => RawLine::Skipped(SkipReason::Layout("non integer id")),
            }
        }
        Value::Array(arr) => {
            // journal_id, sentence_id, ..., sources, targets
            if arr.len() < 4 {
                return RawLine::Skipped(SkipReason::Layout("too few elements"));
            }
            let ids = (value_to_id(&arr[0]), value_to_id(&arr[1]));
            let sentences = value_to_sentences(&arr[arr.len() - 2]);
            match (ids, sentences) {
                ((Some(j), Some(s)), Some(sentences)) => {
                    RawLine::Parsed(RawRecord::new(j, s, sentences))
                }
                ((Some(_), Some(_)), None) => {
                    RawLine::Skipped(SkipReason::Layout("sources is not a list of strings"))
                }
                _ => RawLine::Skipped(SkipReason::Layout("non integer id")),
            }
        }
        _ => RawLine::Skipped(SkipReason::Layout("neither an array nor an object")),
    }
}

/// Line-by-line raw corpus reader.
///
/// Yields a [RawLine] per line, and an [Error] only on I/O failure.
#[derive(Debug)]
pub struct Reader<T>
where
    T: Read,
{
    br: BufReader<T>,
    buf: Vec<u8>,
    nb_parsed: u64,
    nb_skipped: u64,
}

pub type Lang8Reader = Reader<File>;

impl Lang8Reader {
    /// Open [LANG8_RAW_FILENAME] in `lang8_dir`.
    pub fn from_dir(lang8_dir: &Path) -> Result<Self, Error> {
        Self::from_path(&lang8_dir.join(LANG8_RAW_FILENAME))
    }

    pub fn from_path(src: &Path) -> Result<Self, Error> {
        info!("reading Lang-8 raw corpus from {:?}", src);
        let f = File::open(src)?;
        Ok(Self::new(f))
    }
}

impl<T> Reader<T>
where
    T: Read,
{
    pub fn new(inner: T) -> Self {
        Self {
            br: BufReader::new(inner),
            buf: Vec::new(),
            nb_parsed: 0,
            nb_skipped: 0,
        }
    }

    /// Number of lines successfully parsed so far.
    pub fn nb_parsed(&self) -> u64 {
        self.nb_parsed
    }

    /// Number of lines skipped so far.
    pub fn nb_skipped(&self) -> u64 {
        self.nb_skipped
    }

    /// Iterate over parsed records only, dropping skipped lines.
    pub fn records(self) -> Records<T> {
        Records {
            reader: self,
            done: false,
        }
    }
}

impl<T> Iterator for Reader<T>
where
    T: Read,
{
    type Item = Result<RawLine, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.br.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Err(e) => Some(Err(Error::Io(e))),
            Ok(_) => {
                let parsed = parse_line(&self.buf);
                match parsed {
                    RawLine::Parsed(_) => self.nb_parsed += 1,
                    RawLine::Skipped(_) => self.nb_skipped += 1,
                }
                Some(Ok(parsed))
            }
        }
    }
}

/// [RawRecord] iterator over a raw corpus.
///
/// Logs the number of read documents once exhausted.
#[derive(Debug)]
pub struct Records<T>
where
    T: Read,
{
    reader: Reader<T>,
    done: bool,
}

impl<T> Records<T>
where
    T: Read,
{
    pub fn nb_parsed(&self) -> u64 {
        self.reader.nb_parsed()
    }
}

impl<T> Iterator for Records<T>
where
    T: Read,
{
    type Item = Result<RawRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.reader.next() {
                Some(Ok(RawLine::Parsed(record))) => return Some(Ok(record)),
                Some(Ok(RawLine::Skipped(reason))) => {
                    trace!("skipping raw corpus line: {:?}", reason);
                }
                Some(Err(e)) => return Some(Err(e)),
                None => {
                    self.done = true;
                    info!("{} Lang-8 raw documents read.", self.reader.nb_parsed());
                    return None;
                }
            }
        }
    }
}
