//! Resolution and reading of the text URLs are extracted from

use log::debug;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::core::error::{Result, UrlookError};

/// Where the input text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Files(Vec<PathBuf>),
}

impl InputSource {
    /// Pick the source from the given files and whether stdin is piped.
    ///
    /// Piped text and file names are mutually exclusive; without a pipe at
    /// least one file is required.
    pub fn resolve(files: &[PathBuf], stdin_is_pipe: bool) -> Result<Self> {
        match (stdin_is_pipe, files.is_empty()) {
            (true, false) => Err(UrlookError::Input(
                "please specify at least one filename or pass text from standard input"
                    .to_string(),
            )),
            (true, true) => Ok(InputSource::Stdin),
            (false, true) => Err(UrlookError::Input(
                "specify at least one filename".to_string(),
            )),
            (false, false) => Ok(InputSource::Files(files.to_vec())),
        }
    }

    /// Resolve against the real standard input of this process.
    pub fn detect(files: &[PathBuf]) -> Result<Self> {
        Self::resolve(files, stdin_is_pipe())
    }

    pub fn read_to_string(&self) -> Result<String> {
        match self {
            InputSource::Stdin => read_from(io::stdin().lock()),
            InputSource::Files(paths) => {
                let mut text = String::new();
                for path in paths {
                    text.push_str(&read_file(path)?);
                    text.push('\n');
                }
                Ok(text)
            }
        }
    }
}

/// True when text is piped or redirected into stdin.
///
/// Character devices (a terminal, `/dev/null`) do not count as input.
pub fn stdin_is_pipe() -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::FileTypeExt;
        if let Ok(meta) = fs::metadata("/dev/stdin") {
            return !meta.file_type().is_char_device();
        }
    }
    !atty::is(atty::Stream::Stdin)
}

// Input is decoded lossily; invalid bytes never hide the URLs around them
fn read_file(path: &Path) -> Result<String> {
    debug!("Reading {}", path.display());
    let bytes = fs::read(path)
        .map_err(|e| UrlookError::Input(format!("could not open file {}: {e}", path.display())))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn read_from<R: Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| UrlookError::Input(format!("could not read content: {e}")))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
