//! Whole-file reads and writes.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fmt;
use std::fs;
use std::str::FromStr;

use fsops_path::PathSpec;

use crate::error::OperationError;

/// Text decoding applied by [`read_file_contents`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    /// Strict UTF-8.
    #[default]
    Utf8,
    /// ISO-8859-1: every byte maps to the code point of the same value.
    Latin1,
}

impl FromStr for Encoding {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Self::Utf8),
            "latin1" | "binary" | "iso-8859-1" => Ok(Self::Latin1),
            _ => Err(OperationError::UnsupportedEncoding(s.to_string())),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utf8 => write!(f, "utf8"),
            Self::Latin1 => write!(f, "latin1"),
        }
    }
}

/// Contents of a file, either decoded text or raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContents {
    /// Decoded text.
    Text(String),
    /// Raw bytes.
    Bytes(Vec<u8>),
}

impl FileContents {
    /// The text, if these contents were decoded.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Bytes(_) => None,
        }
    }

    /// The contents as bytes. Text is returned as its UTF-8 encoding.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Bytes(bytes) => bytes,
        }
    }

    /// Consume the contents, returning bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Text(text) => text.into_bytes(),
            Self::Bytes(bytes) => bytes,
        }
    }
}

impl AsRef<[u8]> for FileContents {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<String> for FileContents {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for FileContents {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<u8>> for FileContents {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

/// Read a whole file.
///
/// # Arguments
///
/// * `path` - File to read
/// * `encoding` - Text decoding to apply, or `None` for raw bytes
///
/// # Errors
///
/// * If the file cannot be read
/// * If the content is not valid UTF-8 when [`Encoding::Utf8`] is requested
pub fn read_file_contents(
    path: &str,
    encoding: Option<Encoding>,
) -> Result<FileContents, OperationError> {
    let path = PathSpec::new(path);

    log::debug!(
        "Reading {path} as {}",
        encoding.map_or_else(|| "bytes".to_string(), |e| e.to_string())
    );

    let bytes = fs::read(path.as_path()).map_err(|e| OperationError::IoError {
        path: path.as_path().to_path_buf(),
        source: e,
    })?;

    Ok(match encoding {
        None => FileContents::Bytes(bytes),
        Some(Encoding::Utf8) => {
            FileContents::Text(String::from_utf8(bytes).map_err(|e| {
                OperationError::DecodeError {
                    path: path.into_path_buf(),
                    source: e,
                }
            })?)
        }
        Some(Encoding::Latin1) => {
            FileContents::Text(bytes.iter().copied().map(char::from).collect())
        }
    })
}

/// Write a whole file, creating missing parent directories first.
///
/// Any existing file is truncated and replaced.
///
/// # Arguments
///
/// * `path` - File to write
/// * `contents` - Text or bytes to write
///
/// # Errors
///
/// * If a parent directory cannot be created
/// * If the file cannot be written
pub fn write_file_contents(path: &str, contents: impl AsRef<[u8]>) -> Result<(), OperationError> {
    let path = PathSpec::new(path);
    let contents = contents.as_ref();

    log::debug!("Writing {} bytes to {path}", contents.len());

    if let Some(parent) = path.as_path().parent().filter(|p| !p.as_os_str().is_empty()) {
        fsops_copy::ensure_directory(parent).map_err(|e| OperationError::IoError {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    fs::write(path.as_path(), contents).map_err(|e| OperationError::IoError {
        path: path.into_path_buf(),
        source: e,
    })
}
