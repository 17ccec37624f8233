//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::{load_dictionary, ApplicationError, Dictionary};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::TreeNodeConvert;

/// A loaded dictionary plus the settings it was loaded with.
#[derive(Debug)]
struct Session {
    dictionary: Dictionary,
    settings: Settings,
}

impl Session {
    fn open(cli: &Cli) -> CliResult<Self> {
        let settings = Settings::load()?;
        let path = cli
            .file
            .clone()
            .unwrap_or_else(|| settings.dictionary_path());
        debug!("dictionary path: {}", path.display());
        let dictionary = load_dictionary(&path)?;
        Ok(Self {
            dictionary,
            settings,
        })
    }
}

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage("no command given, see --help".into()));
    };

    match command {
        Commands::Lookup { phrase } => lookup(&Session::open(cli)?, phrase),
        Commands::Word { word } => word_search(&Session::open(cli)?, word),
        Commands::First => first(&Session::open(cli)?),
        Commands::Last => last(&Session::open(cli)?),
        Commands::Prev { phrase } => prev(&Session::open(cli)?, phrase),
        Commands::Next { phrase } => next(&Session::open(cli)?, phrase),
        Commands::List => list(&Session::open(cli)?),
        Commands::Tree => tree(&Session::open(cli)?),
        Commands::Stats => stats(&Session::open(cli)?),
        Commands::Config { command } => config(command),
        Commands::Completion { shell } => {
            completion(*shell);
            Ok(())
        }
    }
}

#[instrument(skip(session))]
fn lookup(session: &Session, phrase: &str) -> CliResult<()> {
    if phrase.trim().is_empty() {
        return Err(CliError::InvalidArgs("phrase must not be empty".into()));
    }
    match session.dictionary.search(phrase) {
        Some(entry) => output::entry(entry, session.settings.show_explanations),
        None => output::warning(&format!("no proverb for phrase: {}", phrase)),
    }
    Ok(())
}

#[instrument(skip(session))]
fn word_search(session: &Session, word: &str) -> CliResult<()> {
    if word.split_whitespace().count() != 1 {
        return Err(CliError::InvalidArgs(format!(
            "expected a single word, got {:?}",
            word
        )));
    }
    let hits = session.dictionary.lookup_word(word);
    if hits.is_empty() {
        output::warning(&format!("no proverb contains: {}", word));
        return Ok(());
    }
    for entry in hits {
        output::entry(entry, session.settings.show_explanations);
    }
    Ok(())
}

#[instrument(skip(session))]
fn first(session: &Session) -> CliResult<()> {
    let entry = session.dictionary.first().map_err(ApplicationError::from)?;
    output::entry(entry, session.settings.show_explanations);
    Ok(())
}

#[instrument(skip(session))]
fn last(session: &Session) -> CliResult<()> {
    let entry = session.dictionary.last().map_err(ApplicationError::from)?;
    output::entry(entry, session.settings.show_explanations);
    Ok(())
}

#[instrument(skip(session))]
fn prev(session: &Session, phrase: &str) -> CliResult<()> {
    match session.dictionary.predecessor(phrase) {
        Some(entry) => output::entry(entry, session.settings.show_explanations),
        None => output::warning(&format!("nothing before: {}", phrase)),
    }
    Ok(())
}

#[instrument(skip(session))]
fn next(session: &Session, phrase: &str) -> CliResult<()> {
    match session.dictionary.successor(phrase) {
        Some(entry) => output::entry(entry, session.settings.show_explanations),
        None => output::warning(&format!("nothing after: {}", phrase)),
    }
    Ok(())
}

#[instrument(skip(session))]
fn list(session: &Session) -> CliResult<()> {
    if session.dictionary.is_empty() {
        output::warning("dictionary is empty");
        return Ok(());
    }
    output::info(&session.dictionary.iter().join("\n"));
    Ok(())
}

#[instrument(skip(session))]
fn tree(session: &Session) -> CliResult<()> {
    output::info(&session.dictionary.tree().to_tree_string());
    Ok(())
}

#[instrument(skip(session))]
fn stats(session: &Session) -> CliResult<()> {
    let tree = session.dictionary.tree();
    let bound = 2.0 * ((tree.len() + 1) as f64).log2();

    output::action("entries", &tree.len());
    output::action("words", &session.dictionary.words().len());
    output::action("height", &tree.height());
    output::action("height bound", &format!("{:.2}", bound));
    output::action("black height", &tree.black_height());

    match tree.check_invariants() {
        Ok(_) => {
            output::success("red-black invariants hold");
            Ok(())
        }
        Err(e) => {
            output::failure(&e);
            Err(ApplicationError::from(e).into())
        }
    }
}

#[instrument]
fn config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => {
            let settings = Settings::load()?;
            match global_config_path() {
                Some(path) => output::action("global", &path.display()),
                None => output::action("global", "unavailable"),
            }
            output::action("dictionary", &settings.dictionary_path().display());
        }
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}

fn completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    eprintln!("Generating completion file for {shell:?}...");
    generate(shell, &mut cmd, name, &mut io::stdout());
}
