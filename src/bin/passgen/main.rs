use std::path::PathBuf;
use std::process;

use clap::Parser;
use passgen::{CharacterClass, ClassSet, Config, ValidationError};

mod clipboard;
mod generate;
mod interactive;

#[derive(Parser)]
enum Args {
    /// Generate one or more passwords and print them.
    Generate(GenerateArgs),
    /// Fill in the password length and character types from a menu, then generate, copy or reset.
    Interactive {
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct GenerateArgs {
    /// Number of characters, between 4 and 100. Defaults to the configured length.
    #[arg(short, long, allow_hyphen_values = true)]
    length: Option<String>,
    /// Include lowercase letters.
    #[arg(long)]
    lowercase: bool,
    /// Include uppercase letters.
    #[arg(long)]
    uppercase: bool,
    /// Include numbers.
    #[arg(long)]
    digits: bool,
    /// Include symbols.
    #[arg(long)]
    symbols: bool,
    /// How many passwords to generate.
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,
    /// Copy the password to the clipboard instead of printing it.
    #[arg(long, conflicts_with_all = ["json", "count"])]
    copy: bool,
    /// Print the passwords as a JSON array.
    #[arg(long)]
    json: bool,
    #[arg(long)]
    config: Option<PathBuf>,
}

impl GenerateArgs {
    /// The classes picked on the command line, if any were.
    fn classes(&self) -> Option<ClassSet> {
        let picked = [
            (CharacterClass::Uppercase, self.uppercase),
            (CharacterClass::Lowercase, self.lowercase),
            (CharacterClass::Digit, self.digits),
            (CharacterClass::Symbol, self.symbols),
        ];
        let set: ClassSet = picked
            .into_iter()
            .filter(|(_, on)| *on)
            .map(|(class, _)| class)
            .collect();
        if set.is_empty() {
            None
        } else {
            Some(set)
        }
    }
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();

    match args {
        Args::Generate(args) => generate::generate(args)?,
        Args::Interactive { config } => interactive::run(config)?,
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => (),
        Err(ProgError::Other(err)) => {
            log::error!("{err:?}");
            eprintln!("Error: {err:#}");
            process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn load_config(config_path: Option<PathBuf>) -> Result<Config, ProgError> {
    Ok(Config::load(config_path.as_deref())?)
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("{0}")]
    Invalid(#[from] ValidationError),
    #[error("Config error: {0}")]
    Config(#[from] passgen::ConfigError),
    #[error("Nothing has been generated yet.")]
    NothingToCopy,
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}
