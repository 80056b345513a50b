//! Interactive prompt helpers.
//!
//! The validation predicates themselves live in `crate::validate` and the
//! category parsers in `crate::record`; only the retry loops live here.

use std::io::{self, Write};

use anyhow::Result;

/// Prints the label and reads one trimmed line from stdin.
pub fn read_line(label: &str) -> Result<String> {
    print!("{label} ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

/// Re-prompts until the predicate accepts the input.
pub fn read_until_valid(
    label: &str,
    retry_label: &str,
    is_valid: impl Fn(&str) -> bool,
) -> Result<String> {
    let mut value = read_line(label)?;
    while !is_valid(&value) {
        value = read_line(retry_label)?;
    }

    Ok(value)
}

/// Re-prompts until the parser accepts the input.
pub fn read_parsed<T>(
    label: &str,
    retry_label: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T> {
    let mut input = read_line(label)?;
    loop {
        if let Some(value) = parse(&input) {
            return Ok(value);
        }
        input = read_line(retry_label)?;
    }
}

/// Re-prompts until the answer is "sim" or "não".
pub fn read_yes_no(label: &str) -> Result<bool> {
    loop {
        match read_line(label)?.to_lowercase().as_str() {
            "sim" => return Ok(true),
            "não" | "nao" => return Ok(false),
            _ => println!("Responda com 'sim' ou 'não'."),
        }
    }
}
