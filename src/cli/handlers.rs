use crate::io::config_io::read_settings;
use crate::io::discovery::{ConfigSource, TaskCommand};
use crate::io::paths::ConfigPaths;
use crate::io::rc_io::RcError;
use crate::model::CoefficientSet;
use crate::ops::build::{BuildError, build_coefficients};
use crate::ops::persist::persist_overrides;
use crate::tui::{self, SessionOutcome};

use super::commands::Cli;

/// Error type for a whole invocation
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error("no matching urgency coefficients")]
    NothingToEdit,
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
    #[error(transparent)]
    Write(#[from] RcError),
    #[error("aborted, no changes written")]
    Aborted,
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Aborted => 130,
            _ => 1,
        }
    }
}

/// Load, edit interactively, save
pub fn dispatch(cli: Cli) -> Result<(), CliError> {
    let paths = ConfigPaths::from_home();
    let settings = read_settings(&paths.settings);
    let source = TaskCommand::from_config(&settings.discovery);

    let coefficients = load_for_editing(&paths, &source, &cli.categories)?;
    let outcome = tui::run_session(coefficients, &settings.ui)?;
    finish_session(&paths, outcome)
}

/// Build the working set; an empty result is a user-facing error
pub fn load_for_editing(
    paths: &ConfigPaths,
    source: &dyn ConfigSource,
    categories: &[String],
) -> Result<CoefficientSet, CliError> {
    let coefficients = build_coefficients(paths, source, categories)?;
    if coefficients.is_empty() {
        return Err(CliError::NothingToEdit);
    }
    Ok(coefficients)
}

/// Persist a finished session; an aborted one writes nothing
pub fn finish_session(paths: &ConfigPaths, outcome: SessionOutcome) -> Result<(), CliError> {
    match outcome {
        SessionOutcome::Finished(coefficients) => {
            persist_overrides(paths, coefficients)?;
            Ok(())
        }
        SessionOutcome::Aborted => Err(CliError::Aborted),
    }
}
