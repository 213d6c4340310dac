//! Command line handling for the `tradedesk` binary

use std::path::PathBuf;
use thiserror::Error;

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    /// Run a session, from a config file or the demo data
    Run { config: Option<PathBuf> },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("--config requires a path argument")]
    MissingConfigPath,

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
}

/// Parse arguments, excluding the program name
///
/// `--help` wins over anything after it; a repeated `--config` keeps the last path.
pub fn parse_args<I>(args: I) -> Result<Invocation, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut config = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Invocation::Help),
            "--config" | "-c" => {
                let path = args.next().ok_or(UsageError::MissingConfigPath)?;
                config = Some(PathBuf::from(path));
            }
            _ => return Err(UsageError::UnknownArgument(arg)),
        }
    }

    Ok(Invocation::Run { config })
}
