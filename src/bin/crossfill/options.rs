use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::ArgMatches;

#[derive(Clone)]
pub(crate) struct Options {
    structure_path: PathBuf,
    words_path: PathBuf,
    output_path: Option<PathBuf>,
    stats: bool,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let path = |name: &str| {
            matches
                .value_of(name)
                .map(PathBuf::from)
                .ok_or_else(|| anyhow!("missing {} argument", name))
        };
        Ok(Self {
            structure_path: path("structure")?,
            words_path: path("words")?,
            output_path: matches.value_of("output").map(PathBuf::from),
            stats: matches.is_present("stats"),
        })
    }

    pub fn structure_path(&self) -> &Path {
        &self.structure_path
    }

    pub fn words_path(&self) -> &Path {
        &self.words_path
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    pub fn stats(&self) -> bool {
        self.stats
    }
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, AppSettings, Arg};

    App::new("crossfill")
        .about("Fill a crossword structure with words")
        .setting(AppSettings::ArgRequiredElseHelp)
        .arg(
            Arg::with_name("structure")
                .required(true)
                .value_name("STRUCTURE")
                .help("crossword structure file, with _ for each fillable cell"),
        )
        .arg(
            Arg::with_name("words")
                .required(true)
                .value_name("WORDS")
                .help("word list file, one word per line"),
        )
        .arg(
            Arg::with_name("output")
                .value_name("OUTPUT")
                .help("file to save the filled crossword"),
        )
        .arg(
            Arg::with_name("stats")
                .long("stats")
                .help("print statistics about the search"),
        )
}
