//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use clang8::pipelines::clang8::Config;
use clang8::tokenize::DEFAULT_BATCH_SIZE;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "clang8",
    about = "Combine cLang-8 targets with the original Lang-8 sources."
)]
/// cLang-8 preparation parameters.
///
/// ```sh
/// USAGE:
///     clang8 [FLAGS] [OPTIONS] --lang8-dir <lang8-dir>
///
/// FLAGS:
///     -h, --help           Prints help information
///         --keep-going     carry on with the next language when one fails
///         --no-progress    do not display progress bars
///     -V, --version        Prints version information
/// ```
pub struct Clang8 {
    #[structopt(
        parse(from_os_str),
        long = "lang8-dir",
        help = "directory containing the Lang-8 raw corpus (lang-8-20111007-L1-v2.dat)"
    )]
    pub lang8_dir: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "clang8-dir",
        help = "directory containing the cLang-8 targets",
        default_value = "./targets"
    )]
    pub clang8_dir: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "output-dir",
        help = "directory where the output files are written",
        default_value = "./output_data"
    )]
    pub output_dir: PathBuf,
    #[structopt(
        long = "tokenize-text",
        help = "whether to tokenize sources and targets",
        default_value = "true",
        parse(try_from_str)
    )]
    pub tokenize_text: bool,
    #[structopt(
        long = "languages",
        help = "comma-separated list of languages for which to generate cLang-8",
        default_value = "ru,en,de",
        use_delimiter = true
    )]
    pub languages: Vec<String>,
    #[structopt(
        long = "batch-size",
        help = "number of texts tokenized at once",
        default_value = "1000"
    )]
    pub batch_size: usize,
    #[structopt(long = "keep-going", help = "carry on with the next language when one fails")]
    pub keep_going: bool,
    #[structopt(long = "no-progress", help = "do not display progress bars")]
    pub no_progress: bool,
}

impl From<Clang8> for Config {
    fn from(opt: Clang8) -> Config {
        Config {
            lang8_dir: opt.lang8_dir,
            clang8_dir: opt.clang8_dir,
            output_dir: opt.output_dir,
            tokenize_text: opt.tokenize_text,
            languages: opt
                .languages
                .into_iter()
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty())
                .collect(),
            batch_size: if opt.batch_size == 0 {
                DEFAULT_BATCH_SIZE
            } else {
                opt.batch_size
            },
            keep_going: opt.keep_going,
            progress: !opt.no_progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opt = Clang8::from_iter_safe(["clang8", "--lang8-dir", "raw"]).unwrap();
        let config = Config::from(opt);
        assert_eq!(config.lang8_dir, PathBuf::from("raw"));
        assert_eq!(config.clang8_dir, PathBuf::from("./targets"));
        assert_eq!(config.output_dir, PathBuf::from("./output_data"));
        assert!(config.tokenize_text);
        assert_eq!(config.languages, vec!["ru", "en", "de"]);
        assert_eq!(config.batch_size, 1000);
        assert!(config.progress);
        assert!(!config.keep_going);
    }

    #[test]
    fn flags() {
        let opt = Clang8::from_iter_safe([
            "clang8",
            "--lang8-dir",
            "raw",
            "--tokenize-text",
            "false",
            "--languages",
            "en,de",
            "--batch-size",
            "0",
            "--keep-going",
            "--no-progress",
        ])
        .unwrap();
        let config = Config::from(opt);
        assert!(!config.tokenize_text);
        assert_eq!(config.languages, vec!["en", "de"]);
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
        assert!(config.keep_going);
        assert!(!config.progress);
    }

    #[test]
    fn empty_languages_are_dropped() {
        let opt =
            Clang8::from_iter_safe(["clang8", "--lang8-dir", "raw", "--languages", ""]).unwrap();
        assert!(Config::from(opt).languages.is_empty());

        let opt = Clang8::from_iter_safe(["clang8", "--lang8-dir", "raw", "--languages", "en,, de"])
            .unwrap();
        assert_eq!(Config::from(opt).languages, vec!["en", "de"]);
    }

    #[test]
    fn lang8_dir_is_required() {
        assert!(Clang8::from_iter_safe(["clang8"]).is_err());
    }

    #[test]
    fn no_positional_arguments() {
        assert!(Clang8::from_iter_safe(["clang8", "--lang8-dir", "raw", "extra"]).is_err());
    }
}
