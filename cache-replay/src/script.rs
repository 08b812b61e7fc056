//! Script parsing
//!
//! One operation per line. Blank lines and lines starting with `#` are
//! skipped, keywords are case-insensitive. A `put` value is everything after
//! the single separator following the key, kept verbatim (surrounding
//! whitespace included):
//!
//! ```text
//! resize 2
//! put a 1
//! put b hello world
//! get a
//! peek b
//! dump
//! ```

use crate::error::{ReplayError, Result};
use crate::models::Op;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// Parse a single script line. `line_no` is 1-based and only used in errors.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Op>> {
    let raw = line.trim_end_matches(['\n', '\r']).trim_start();
    let line = raw.trim_end();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (keyword, rest) = split_word(line);
    let op = match keyword.to_ascii_lowercase().as_str() {
        "put" => {
            let (key, value) = split_put_args(raw);
            if key.is_empty() {
                return Err(ReplayError::parse(line_no, "put is missing a key"));
            }
            if value.is_empty() {
                return Err(ReplayError::parse(
                    line_no,
                    format!("put {key} is missing a value"),
                ));
            }
            Op::Put {
                key: key.to_string(),
                value: value.to_string(),
            }
        }
        "get" => Op::Get {
            key: single_arg(rest, "get", line_no)?.to_string(),
        },
        "peek" => Op::Peek {
            key: single_arg(rest, "peek", line_no)?.to_string(),
        },
        "resize" => {
            let arg = single_arg(rest, "resize", line_no)?;
            Op::Resize {
                capacity: parse_capacity(arg, line_no)?,
            }
        }
        "dump" => {
            if !rest.is_empty() {
                return Err(ReplayError::parse(line_no, "dump takes no arguments"));
            }
            Op::Dump
        }
        other => {
            return Err(ReplayError::parse(
                line_no,
                format!("unknown operation '{other}'"),
            ))
        }
    };
    Ok(Some(op))
}

/// Parse a non-negative capacity argument.
pub fn parse_capacity(arg: &str, line_no: usize) -> Result<usize> {
    if let Some(digits) = arg.strip_prefix('-') {
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ReplayError::parse(
                line_no,
                format!("capacity must not be negative, got {arg}"),
            ));
        }
    }
    arg.parse::<usize>()
        .map_err(|_| ReplayError::parse(line_no, format!("invalid capacity '{arg}'")))
}

/// Key and verbatim value of a `put` line. `raw` starts at the keyword and
/// still carries any trailing whitespace.
fn split_put_args(raw: &str) -> (&str, &str) {
    let Some((_, args)) = raw.split_once(char::is_whitespace) else {
        return ("", "");
    };
    let args = args.trim_start();
    match args.split_once(char::is_whitespace) {
        Some((key, value)) => (key, value),
        None => (args, ""),
    }
}

/// Split off the first whitespace-delimited word; the remainder is trimmed.
fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (s, ""),
    }
}

fn single_arg<'a>(rest: &'a str, keyword: &str, line_no: usize) -> Result<&'a str> {
    let (arg, extra) = split_word(rest);
    if arg.is_empty() {
        return Err(ReplayError::parse(
            line_no,
            format!("{keyword} expects one argument"),
        ));
    }
    if !extra.is_empty() {
        return Err(ReplayError::parse(
            line_no,
            format!("{keyword} expects one argument, found trailing '{extra}'"),
        ));
    }
    Ok(arg)
}

/// Streams operations from a script without loading it into memory.
///
/// Yields `(line_number, op)` pairs, skipping blank and comment lines.
pub struct ScriptReader<R> {
    reader: R,
    line_no: usize,
    line_buffer: String,
}

impl ScriptReader<BufReader<File>> {
    /// Open a script file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> ScriptReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            line_buffer: String::with_capacity(128),
        }
    }
}

impl<R: BufRead> Iterator for ScriptReader<R> {
    type Item = Result<(usize, Op)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line_buffer.clear();
            match self.reader.read_line(&mut self.line_buffer) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_no += 1;
                    match parse_line(&self.line_buffer, self.line_no) {
                        Ok(Some(op)) => return Some(Ok((self.line_no, op))),
                        Ok(None) => continue,
                        Err(e) => return Some(Err(e)),
                    }
                }
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    self.line_no += 1;
                    return Some(Err(ReplayError::parse(
                        self.line_no,
                        "line is not valid UTF-8",
                    )));
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}
