//! Message sources for the CLI
//!
//! Text given on the command line is one message. Files and stdin hold one
//! message per line; blank lines are skipped.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("No input given; pass message text, --file <path> or --stdin")]
    Missing,

    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Where messages are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Text(String),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Pick the source from parsed arguments. A file wins over stdin, and
    /// stdin over positional text.
    pub fn from_args(
        text: Option<String>,
        file: Option<PathBuf>,
        stdin: bool,
    ) -> Result<Self, InputError> {
        match (file, stdin, text) {
            (Some(path), _, _) => Ok(InputSource::File(path)),
            (None, true, _) => Ok(InputSource::Stdin),
            (None, false, Some(text)) => Ok(InputSource::Text(text)),
            (None, false, None) => Err(InputError::Missing),
        }
    }

    /// Read every message from this source
    pub fn read_messages(&self) -> Result<Vec<String>, InputError> {
        match self {
            InputSource::Text(text) => Ok(vec![text.clone()]),
            InputSource::File(path) => {
                let display = path.display().to_string();
                let file = File::open(path).map_err(|source| InputError::Io {
                    path: display.clone(),
                    source,
                })?;
                messages_from_reader(BufReader::new(file)).map_err(|source| InputError::Io {
                    path: display,
                    source,
                })
            }
            InputSource::Stdin => {
                let stdin = io::stdin();
                messages_from_reader(stdin.lock()).map_err(|source| InputError::Io {
                    path: "<stdin>".to_string(),
                    source,
                })
            }
        }
    }
}

/// One message per non-blank line
pub fn messages_from_reader<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut messages = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let message = line.trim_end_matches('\r');
        if !message.trim().is_empty() {
            messages.push(message.to_string());
        }
    }
    Ok(messages)
}
