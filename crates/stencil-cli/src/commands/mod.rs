//! Command handlers, one module per subcommand.

use std::path::Path;

use stencil_adapters::DirectorySource;

use crate::error::{CliError, CliResult};

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod inspect;

/// Collections source rooted at `input`; a missing directory is not-found.
pub(crate) fn open_source(input: &Path) -> CliResult<DirectorySource> {
    if !input.is_dir() {
        return Err(CliError::InputNotFound {
            path: input.to_path_buf(),
        });
    }
    Ok(DirectorySource::new(input))
}
