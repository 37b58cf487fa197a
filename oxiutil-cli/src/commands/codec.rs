//! Encode and decode command implementations.

use crate::Alphabet;
use crate::utils::{expansion_percent, open_output, read_input, read_text, text_encoding};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// JSON summary of an encode run.
#[derive(Debug, Serialize, Deserialize)]
struct EncodeJson {
    alphabet: String,
    input_bytes: usize,
    output_chars: usize,
    output: String,
}

/// Options shared by the encode and decode commands.
pub struct CodecOptions<'a> {
    pub input: Option<&'a Path>,
    pub output: Option<&'a Path>,
    pub alphabet: Alphabet,
    pub json: bool,
    pub verbose: bool,
}

pub fn cmd_encode(options: &CodecOptions) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(options.input)?;
    let encoding = text_encoding(options.alphabet);
    let encoded = encoding.encode(&data)?;

    if options.verbose {
        eprintln!(
            "{}: {} bytes -> {} chars ({:.1}%)",
            encoding.name(),
            data.len(),
            encoded.len(),
            expansion_percent(data.len(), encoded.len())
        );
    }

    let mut out = open_output(options.output)?;
    if options.json {
        let summary = EncodeJson {
            alphabet: encoding.name().to_string(),
            input_bytes: data.len(),
            output_chars: encoded.len(),
            output: encoded,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        writeln!(out, "{}", encoded)?;
    }
    out.flush()?;

    Ok(())
}

pub fn cmd_decode(options: &CodecOptions) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_text(options.input)?;
    let encoding = text_encoding(options.alphabet);
    let decoded = encoding.decode(text.trim())?;

    if options.verbose {
        eprintln!(
            "{}: {} chars -> {} bytes",
            encoding.name(),
            text.trim().len(),
            decoded.len()
        );
    }

    let mut out = open_output(options.output)?;
    out.write_all(&decoded)?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_json_shape() {
        let summary = EncodeJson {
            alphabet: "ascii85".to_string(),
            input_bytes: 4,
            output_chars: 1,
            output: "z".to_string(),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["alphabet"], "ascii85");
        assert_eq!(json["input_bytes"], 4);
        assert_eq!(json["output"], "z");
    }
}
