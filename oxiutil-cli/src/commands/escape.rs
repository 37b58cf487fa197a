//! Escape and unescape command implementations.

use crate::utils::read_text;
use oxiutil_ascii85::header;
use std::path::Path;

pub fn cmd_escape(input: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_text(input)?;
    println!("{}", header::encode(text.trim_end_matches(['\r', '\n']))?);
    Ok(())
}

pub fn cmd_unescape(input: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_text(input)?;
    println!("{}", header::decode(text.trim_end_matches(['\r', '\n']))?);
    Ok(())
}
