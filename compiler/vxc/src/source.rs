//! Loading source files.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use vx_lexer_core::SourceBuffer;

/// Failure outside the language itself: files and output streams.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Offsets are `u32`, so larger files cannot be addressed.
    #[error("'{}' is too large ({len} bytes, limit is 4 GiB)", path.display())]
    TooLarge { path: PathBuf, len: u64 },
    #[error("cannot write output")]
    Output(#[from] io::Error),
}

/// Read `path` into a padded source buffer.
pub fn read_source(path: &Path) -> Result<SourceBuffer, CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if u32::try_from(bytes.len()).is_err() {
        return Err(CliError::TooLarge {
            path: path.to_path_buf(),
            len: bytes.len() as u64,
        });
    }
    debug!(path = %path.display(), len = bytes.len(), "read source");
    Ok(SourceBuffer::from_bytes(&bytes))
}
