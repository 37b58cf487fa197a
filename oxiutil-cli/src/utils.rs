//! Utility functions for the CLI.

use crate::Alphabet;
use oxiutil_ascii85::{Ascii85, HeaderSafeAscii85};
use oxiutil_core::TextEncoding;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

/// Read all of `path`, or stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    match path {
        Some(path) if path != Path::new("-") => {
            File::open(path)?.read_to_end(&mut data)?;
        }
        _ => {
            io::stdin().lock().read_to_end(&mut data)?;
        }
    }
    Ok(data)
}

/// Read all of `path` (or stdin) as UTF-8 text.
pub fn read_text(path: Option<&Path>) -> Result<String, Box<dyn std::error::Error>> {
    Ok(String::from_utf8(read_input(path)?)?)
}

/// Open `path` for writing, or stdout when `path` is `None` or `-`.
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(path) if path != Path::new("-") => Ok(Box::new(BufWriter::new(File::create(path)?))),
        _ => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// The encoding implementing `alphabet`.
pub fn text_encoding(alphabet: Alphabet) -> &'static dyn TextEncoding {
    match alphabet {
        Alphabet::Ascii85 => &Ascii85,
        Alphabet::HttpHeader => &HeaderSafeAscii85,
    }
}

/// Encoded size as a percentage of the raw size.
pub fn expansion_percent(raw: usize, encoded: usize) -> f64 {
    if raw == 0 {
        0.0
    } else {
        encoded as f64 / raw as f64 * 100.0
    }
}
