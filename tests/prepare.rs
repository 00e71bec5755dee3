use std::fs;
use std::path::{Path, PathBuf};

use clang8::error::Error;
use clang8::io::reader::LANG8_RAW_FILENAME;
use clang8::pipelines::clang8::{Config, Report};
use clang8::pipelines::{Clang8, Pipeline};

/// Lays out a Lang-8 directory and a cLang-8 targets directory in `root`.
fn corpus(root: &Path, raw: &str, targets: &[(&str, &str)]) -> Config {
    let lang8_dir = root.join("lang8");
    let clang8_dir = root.join("targets");
    fs::create_dir_all(&lang8_dir).unwrap();
    fs::create_dir_all(&clang8_dir).unwrap();
    fs::write(lang8_dir.join(LANG8_RAW_FILENAME), raw).unwrap();
    for (lang, content) in targets {
        fs::write(
            clang8_dir.join(format!("clang8_{}.detokenized.tsv", lang)),
            content,
        )
        .unwrap();
    }

    let mut config = Config::new(lang8_dir);
    config.clang8_dir = clang8_dir;
    config.output_dir = root.join("output_data");
    config.progress = false;
    config
}

fn output(config: &Config, name: &str) -> PathBuf {
    config.output_dir.join(name)
}

#[test_log::test]
fn hello_world_untokenized() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = corpus(
        dir.path(),
        "{\"journal_id\":1,\"sentence_id\":2,\"sources\":[\"Hello wrold.\",\"Next sentence.\"]}\n",
        &[("en", "1\t2\t0\t-\tHello world.\n")],
    );
    config.tokenize_text = false;
    config.languages = vec!["en".to_string()];

    let reports = Clang8::new(config.clone()).run().unwrap();
    assert_eq!(reports.len(), 1);

    let content = fs::read_to_string(output(&config, "clang8_source_target_en.tsv")).unwrap();
    assert_eq!(content, "Hello wrold.\tHello world.\n");
}

#[test_log::test]
fn absent_key_yields_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = corpus(
        dir.path(),
        "{\"journal_id\":1,\"sentence_id\":2,\"sources\":[\"Hello wrold.\"]}\n",
        &[("en", "9\t9\t0\t-\tNever matched.\n")],
    );
    config.tokenize_text = false;
    config.languages = vec!["en".to_string()];

    let reports: Vec<Report> = Clang8::new(config.clone()).run().unwrap();
    let report = &reports[0];
    assert_eq!(report.stats.targets_read, 1);
    assert_eq!(report.stats.pairs_emitted, 0);
    assert_eq!(report.pairs_written, 0);
    assert!(report.stats.targets_read > report.pairs_written);

    let content = fs::read_to_string(output(&config, "clang8_source_target_en.tsv")).unwrap();
    assert!(content.is_empty());
}

#[test]
fn unsupported_language() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = corpus(dir.path(), "", &[]);
    config.languages = vec!["fr".to_string()];

    match Clang8::new(config.clone()).run() {
        Err(Error::UnknownLang(lang)) => assert_eq!(lang, "fr"),
        other => panic!("expected UnknownLang, got {:?}", other),
    }
    assert!(!config.output_dir.exists());
}

/// Raw corpus in the distributed array layout, with a malformed line.
const RAW_MULTI: &str = r#"["10","1","English","Japanese",["I goes to school.","She have\ta cat."],[]]
{"journal_id":
["20","5","German","English",["Ich habe gestern ein Buch gelest.","Es war gut."],[]]
["30","7","Russian","English",["Я люблю читать книга.","Это\nинтересно."],[]]
"#;

fn multi_corpus(root: &Path) -> Config {
    corpus(
        root,
        RAW_MULTI,
        &[
            (
                "en",
                "10\t1\t1\t-\tShe has a cat.\n10\t1\t0\t-\tI go to school.\n11\t1\t0\t-\tLost.\n",
            ),
            ("de", "20\t5\t0\t-\tIch habe gestern ein Buch gelesen.\n"),
            ("ru", "30\t7\t0\t-\tЯ люблю читать книги.\n30\t7\t1\t-\tЭто интересно.\n"),
        ],
    )
}

#[test_log::test]
fn all_languages_tokenized() {
    let dir = tempfile::tempdir().unwrap();
    let config = multi_corpus(dir.path());

    let reports = Clang8::new(config.clone()).run().unwrap();
    let written: Vec<(String, u64)> = reports
        .iter()
        .map(|r| (r.lang.to_string(), r.pairs_written))
        .collect();
    assert_eq!(
        written,
        vec![
            ("ru".to_string(), 2),
            ("en".to_string(), 2),
            ("de".to_string(), 1)
        ]
    );

    let en = fs::read_to_string(output(
        &config,
        "clang8_source_target_en.spacy_tokenized.tsv",
    ))
    .unwrap();
    assert_eq!(
        en,
        "She have a cat .\tShe has a cat .\nI goes to school .\tI go to school .\n"
    );

    let ru = fs::read_to_string(output(
        &config,
        "clang8_source_target_ru.spacy_tokenized.tsv",
    ))
    .unwrap();
    assert_eq!(
        ru,
        "Я люблю читать книга .\tЯ люблю читать книги .\nЭто интересно .\tЭто интересно .\n"
    );
}

#[test]
fn every_line_has_one_tab() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = multi_corpus(dir.path());
    config.tokenize_text = false;
    config.languages = vec!["en".to_string(), "ru".to_string()];

    Clang8::new(config.clone()).run().unwrap();
    for name in ["clang8_source_target_en.tsv", "clang8_source_target_ru.tsv"] {
        let content = fs::read_to_string(output(&config, name)).unwrap();
        assert!(content.ends_with('\n'));
        for line in content.lines() {
            assert_eq!(line.matches('\t').count(), 1, "line {:?}", line);
            assert!(!line.contains('\r'));
        }
    }
}

#[test]
fn runs_are_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let config = multi_corpus(dir.path());
    let files = [
        "clang8_source_target_en.spacy_tokenized.tsv",
        "clang8_source_target_de.spacy_tokenized.tsv",
        "clang8_source_target_ru.spacy_tokenized.tsv",
    ];

    Clang8::new(config.clone()).run().unwrap();
    let first: Vec<Vec<u8>> = files
        .iter()
        .map(|f| fs::read(output(&config, f)).unwrap())
        .collect();

    Clang8::new(config.clone()).run().unwrap();
    let second: Vec<Vec<u8>> = files
        .iter()
        .map(|f| fs::read(output(&config, f)).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn malformed_targets_abort_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = corpus(
        dir.path(),
        RAW_MULTI,
        &[
            ("ru", "30\t7\t0\tonly four fields\n"),
            ("en", "10\t1\t0\t-\tI go to school.\n"),
        ],
    );
    config.languages = vec!["ru".to_string(), "en".to_string()];

    assert!(matches!(
        Clang8::new(config.clone()).run(),
        Err(Error::MalformedTarget { line: 1, .. })
    ));
    assert!(!output(&config, "clang8_source_target_en.spacy_tokenized.tsv").exists());
}

#[test]
fn unwritable_output_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = corpus(
        dir.path(),
        "{\"journal_id\":1,\"sentence_id\":2,\"sources\":[\"Hello wrold.\"]}\n",
        &[("en", "1\t2\t0\t-\tHello world.\n")],
    );
    config.tokenize_text = false;
    config.languages = vec!["en".to_string()];
    // a directory sits where the output file should be created
    fs::create_dir_all(output(&config, "clang8_source_target_en.tsv")).unwrap();

    let result = Clang8::new(config).run();
    assert!(matches!(result, Err(Error::Io(_))));
}
