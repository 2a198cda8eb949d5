//! # STEP Exchange Files
//!
//! Reader for ISO 10303-21 clear-text files, the encoding of `.ifc` models.
//! Text → tokens → [`StepFile`] is a pure function; [`loader`] turns the
//! result into a [`MemoryModel`].

pub mod ast;
pub mod lexer;
pub mod loader;
pub mod parser;

use std::borrow::Cow;
use std::path::Path;

use tracing::{debug, warn};

use crate::storage::MemoryModel;
use crate::{Error, Result};
use ast::StepFile;

pub use loader::LoadStats;

/// Parse exchange-file text.
pub fn parse(input: &str) -> Result<StepFile> {
    let tokens = lexer::tokenize(input)?;
    parser::parse_file(&tokens)
}

/// Parse text and load it into a new in-memory model.
pub fn load_str(input: &str) -> Result<(MemoryModel, LoadStats)> {
    let file = parse(input)?;
    Ok(loader::load(&file))
}

/// Read, parse and load a `.ifc` file.
///
/// Exchange files are nominally ASCII, but exporters do write raw Latin-1
/// bytes into string literals. Invalid UTF-8 is replaced with U+FFFD rather
/// than rejecting the file.
pub fn load_file(path: impl AsRef<Path>) -> Result<(MemoryModel, LoadStats)> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::NotFound(format!("input file {}", path.display())));
    }
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = text {
        warn!(path = %path.display(), "exchange file is not valid UTF-8, invalid bytes replaced");
    }
    debug!(path = %path.display(), bytes = bytes.len(), "read exchange file");
    load_str(&text)
}
