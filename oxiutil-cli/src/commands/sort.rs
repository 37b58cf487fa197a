//! Sort command implementation.
//!
//! Each `-k` key becomes one level of the ordering: the first through
//! `order_by*`, the rest through `then_by*`. Lines tied on every key keep
//! their input order.

use crate::utils::{open_output, read_text};
use oxiutil_sort::{
    OrderedSequence, order_by, order_by_descending, order_by_descending_with, order_by_with,
};
use std::cmp::Ordering;
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

type Lines<'a> = OrderedSequence<'a, Vec<String>>;

/// One sort key: a 1-based field with optional numeric and descending flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySpec {
    pub field: usize,
    pub numeric: bool,
    pub descending: bool,
}

impl FromStr for KeySpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits_end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let field: usize = s[..digits_end]
            .parse()
            .map_err(|_| format!("key '{}' must start with a field number", s))?;
        if field == 0 {
            return Err("field numbers start at 1".to_string());
        }

        let mut spec = KeySpec {
            field,
            numeric: false,
            descending: false,
        };
        for flag in s[digits_end..].chars() {
            match flag {
                'n' => spec.numeric = true,
                'r' => spec.descending = true,
                other => return Err(format!("unknown key flag '{}' (expected n or r)", other)),
            }
        }
        Ok(spec)
    }
}

impl fmt::Display for KeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field)?;
        if self.numeric {
            write!(f, "n")?;
        }
        if self.descending {
            write!(f, "r")?;
        }
        Ok(())
    }
}

/// Options for the sort command.
pub struct SortOptions<'a> {
    pub input: Option<&'a Path>,
    pub keys: &'a [KeySpec],
    pub delimiter: Option<char>,
    pub head: Option<usize>,
    pub seed: Option<u64>,
    pub verbose: bool,
}

pub fn cmd_sort(options: &SortOptions) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_text(options.input)?;
    let lines: Vec<String> = text.lines().map(String::from).collect();
    let total = lines.len();

    let mut ordered = build_ordering(lines, options.keys, options.delimiter);
    if let Some(seed) = options.seed {
        ordered = ordered.with_seed(seed);
    }

    let mut out = open_output(None)?;
    let mut written = 0;
    for line in ordered.into_iter().take(options.head.unwrap_or(usize::MAX)) {
        writeln!(out, "{}", line)?;
        written += 1;
    }
    out.flush()?;

    if options.verbose {
        let keys: Vec<String> = options.keys.iter().map(KeySpec::to_string).collect();
        eprintln!(
            "sorted {} of {} lines by [{}]",
            written,
            total,
            keys.join(", ")
        );
    }

    Ok(())
}

fn build_ordering<'a>(
    lines: Vec<String>,
    keys: &[KeySpec],
    delimiter: Option<char>,
) -> Lines<'a> {
    let Some((first, rest)) = keys.split_first() else {
        return order_by(lines, |line: &String| line.clone());
    };

    rest.iter().fold(first_level(lines, *first, delimiter), |ordered, spec| {
        next_level(ordered, *spec, delimiter)
    })
}

fn first_level<'a>(lines: Vec<String>, spec: KeySpec, delimiter: Option<char>) -> Lines<'a> {
    let field = spec.field;
    match (spec.numeric, spec.descending) {
        (false, false) => order_by(lines, move |line: &String| text_key(line, field, delimiter)),
        (false, true) => {
            order_by_descending(lines, move |line: &String| text_key(line, field, delimiter))
        }
        (true, false) => order_by_with(
            lines,
            move |line: &String| numeric_key(line, field, delimiter),
            compare_numeric,
        ),
        (true, true) => order_by_descending_with(
            lines,
            move |line: &String| numeric_key(line, field, delimiter),
            compare_numeric,
        ),
    }
}

fn next_level<'a>(ordered: Lines<'a>, spec: KeySpec, delimiter: Option<char>) -> Lines<'a> {
    let field = spec.field;
    match (spec.numeric, spec.descending) {
        (false, false) => ordered.then_by(move |line: &String| text_key(line, field, delimiter)),
        (false, true) => {
            ordered.then_by_descending(move |line: &String| text_key(line, field, delimiter))
        }
        (true, false) => ordered.then_by_with(
            move |line: &String| numeric_key(line, field, delimiter),
            compare_numeric,
        ),
        (true, true) => ordered.then_by_descending_with(
            move |line: &String| numeric_key(line, field, delimiter),
            compare_numeric,
        ),
    }
}

/// The 1-based `field` of `line`, or `""` if the line is shorter.
fn nth_field(line: &str, field: usize, delimiter: Option<char>) -> &str {
    match delimiter {
        Some(delimiter) => line.split(delimiter).nth(field - 1),
        None => line.split_whitespace().nth(field - 1),
    }
    .unwrap_or("")
}

fn text_key(line: &str, field: usize, delimiter: Option<char>) -> String {
    nth_field(line, field, delimiter).to_string()
}

fn numeric_key(line: &str, field: usize, delimiter: Option<char>) -> Option<f64> {
    nth_field(line, field, delimiter).trim().parse().ok()
}

/// Non-numeric fields sort before all numbers.
fn compare_numeric(left: &Option<f64>, right: &Option<f64>) -> Ordering {
    match (left, right) {
        (Some(l), Some(r)) => l.total_cmp(r),
        (l, r) => l.is_some().cmp(&r.is_some()),
    }
}
