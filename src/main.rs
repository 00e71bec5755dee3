//! # clang8
//!
//! Combines cLang-8 targets with the original Lang-8 sources.
//!
//! Before running this, download the Lang-8 raw corpus (`lang-8-20111007-L1-v2.dat`)
//! and the cLang-8 targets, then:
//!
//! ```sh
//! clang8 --lang8-dir <lang8 dir> --clang8-dir ./targets --output-dir ./output_data --languages ru,en,de
//! ```
//!
//! Logging is controlled through `RUST_LOG` (default is `info`).
use structopt::StructOpt;

use clang8::error::Error;
use clang8::pipelines::clang8::Config;
use clang8::pipelines::{Clang8, Pipeline};

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opt = cli::Clang8::from_args();
    debug!("cli args\n{:#?}", opt);

    let p = Clang8::new(Config::from(opt));
    let reports = p.run()?;
    debug!("reports\n{:#?}", reports);
    Ok(())
}
