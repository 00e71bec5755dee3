/*! cLang-8 targets reading.

Targets files are tab-separated, with exactly five fields per line:

```text
journal_id	sentence_id	sentence_number	<unused>	target
```

Contrary to the raw corpus, a malformed line here is fatal.
!*/
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::Error;
use crate::lang::Lang;
use crate::pipelines::clang8::types::TargetEntry;

/// Number of tab-separated fields of a targets line.
const NB_FIELDS: usize = 5;

/// Path of the targets file of `lang` in `clang8_dir`.
pub fn targets_path(clang8_dir: &Path, lang: Lang) -> PathBuf {
    clang8_dir.join(format!("clang8_{}.detokenized.tsv", lang))
}

/// Parse a single targets line.
///
/// Returns a human readable reason on failure, that is then wrapped in [Error::MalformedTarget] by the caller.
pub fn parse_target_line(line: &str) -> Result<TargetEntry, String> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != NB_FIELDS {
        return Err(format!(
            "expected {} tab-separated fields, got {}",
            NB_FIELDS,
            fields.len()
        ));
    }

    let journal_id = fields[0]
        .trim()
        .parse()
        .map_err(|e| format!("invalid journal_id {:?}: {}", fields[0], e))?;
    let sentence_id = fields[1]
        .trim()
        .parse()
        .map_err(|e| format!("invalid sentence_id {:?}: {}", fields[1], e))?;
    let sentence_number: i64 = fields[2]
        .trim()
        .parse()
        .map_err(|e| format!("invalid sentence_number {:?}: {}", fields[2], e))?;
    let sentence_number = usize::try_from(sentence_number)
        .map_err(|_| format!("negative sentence_number {}", sentence_number))?;

    Ok(TargetEntry {
        journal_id,
        sentence_id,
        sentence_number,
        target: fields[4].to_string(),
    })
}

/// Targets keyed by Lang-8 `(journal_id, sentence_id)`.
///
/// Each key maps to `(sentence_number, target)` couples in file order,
/// `sentence_number` being the index of the learner sentence in the raw record.
#[derive(Debug, Default)]
pub struct TargetIndex {
    inner: HashMap<(i64, i64), Vec<(usize, String)>>,
    nb_targets: u64,
}

impl TargetIndex {
    /// Read a targets file into memory.
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        debug!("reading cLang-8 targets from {:?}", src);
        let content = std::fs::read_to_string(src)?;
        let index = Self::from_str_with_path(&content, src)?;
        info!("{} cLang-8 targets read.", index.nb_targets());
        debug!("{} distinct Lang-8 ids in targets", index.nb_keys());
        Ok(index)
    }

    /// Read targets from any reader. `src` is only used in errors.
    pub fn from_reader<R: Read>(mut r: R, src: &Path) -> Result<Self, Error> {
        let mut content = String::new();
        r.read_to_string(&mut content)?;
        Self::from_str_with_path(&content, src)
    }

    fn from_str_with_path(content: &str, src: &Path) -> Result<Self, Error> {
        let mut index = Self::default();
        for (idx, line) in content.lines().enumerate() {
            let entry = parse_target_line(line).map_err(|reason| Error::MalformedTarget {
                path: src.to_path_buf(),
                line: idx + 1,
                reason,
            })?;
            index.insert(entry);
        }
        Ok(index)
    }

    /// Append an entry to the list of its key.
    pub fn insert(&mut self, entry: TargetEntry) {
        self.inner
            .entry((entry.journal_id, entry.sentence_id))
            .or_default()
            .push((entry.sentence_number, entry.target));
        self.nb_targets += 1;
    }

    /// Targets of a raw record, in file order.
    pub fn get(&self, key: &(i64, i64)) -> Option<&[(usize, String)]> {
        self.inner.get(key).map(Vec::as_slice)
    }

    /// Total number of targets (not keys).
    pub fn nb_targets(&self) -> u64 {
        self.nb_targets
    }

    /// Number of distinct raw record keys.
    pub fn nb_keys(&self) -> usize {
        self.inner.len()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use super::*;

    #[test]
    fn parse_line() {
        let e = parse_target_line("1\t2\t0\t-\tHello world.").unwrap();
        assert_eq!(
            e,
            TargetEntry {
                journal_id: 1,
                sentence_id: 2,
                sentence_number: 0,
                target: "Hello world.".to_string()
            }
        );
    }

    #[test]
    fn parse_line_wrong_field_count() {
        assert!(parse_target_line("1\t2\t0\tHello world.").is_err());
        assert!(parse_target_line("1\t2\t0\t-\tHello\tworld.").is_err());
        assert!(parse_target_line("").is_err());
    }

    #[test]
    fn parse_line_non_integer() {
        assert!(parse_target_line("a\t2\t0\t-\tfoo").is_err());
        let err = parse_target_line("1\t2\t-1\t-\tfoo").unwrap_err();
        assert_eq!(err, "negative sentence_number -1");
    }

    #[test]
    fn index_keeps_file_order() {
        let data = "1\t2\t3\t-\tthird\n\
                    1\t2\t0\t-\tfirst\n\
                    5\t5\t0\t-\tother\n\
                    1\t2\t1\t-\tsecond\n";
        let index = TargetIndex::from_reader(Cursor::new(data), Path::new("mem")).unwrap();
        assert_eq!(index.nb_targets(), 4);
        assert_eq!(index.nb_keys(), 2);

        let targets = index.get(&(1, 2)).unwrap();
        let numbers: Vec<usize> = targets.iter().map(|(n, _)| *n).collect();
        assert_eq!(numbers, vec![3, 0, 1]);
        assert_eq!(targets[0].1, "third");
        assert!(index.get(&(2, 1)).is_none());
    }

    #[test]
    fn malformed_line_is_fatal() {
        let data = "1\t2\t0\t-\tok\n1\t2\t1\tmissing field\n";
        match TargetIndex::from_reader(Cursor::new(data), Path::new("t.tsv")) {
            Err(Error::MalformedTarget { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected MalformedTarget, got {:?}", other),
        }
    }

    #[test]
    fn from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = targets_path(dir.path(), Lang::En);
        assert!(path.ends_with("clang8_en.detokenized.tsv"));

        assert!(matches!(TargetIndex::from_path(&path), Err(Error::Io(_))));

        let mut f = std::fs::File::create(&path).unwrap();
        write!(f, "1\t2\t0\t-\tHello world.\r\n9\t9\t0\t-\tfoo").unwrap();
        let index = TargetIndex::from_path(&path).unwrap();
        assert_eq!(index.nb_targets(), 2);
        assert_eq!(index.get(&(1, 2)).unwrap()[0].1, "Hello world.");
    }
}
