//! Numbered selection menus on stdout/stdin.
//!
//! One line of input per prompt, parsed as a 1-based index. Invalid
//! input is an error for the caller to treat as fatal; there is no
//! retry loop.

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MenuError {
    #[error("invalid choice '{input}' (expected a number between 1 and {count})")]
    InvalidChoice { input: String, count: usize },
}

/// Print a numbered menu in ascending index order.
pub fn render<'a>(heading: &str, labels: impl IntoIterator<Item = &'a str>) {
    println!("{}", heading.bold());
    println!("-------------------------------");
    for (index, label) in labels.into_iter().enumerate() {
        println!("{}. {}", index + 1, label);
    }
}

/// Ask for a selection and validate it against the menu size.
pub fn prompt_choice(prompt: &str, count: usize) -> Result<usize> {
    print!("{prompt}");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read selection")?;

    Ok(parse_choice(&line, count)?)
}

fn parse_choice(input: &str, count: usize) -> Result<usize, MenuError> {
    let trimmed = input.trim();
    match trimmed.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(n),
        _ => Err(MenuError::InvalidChoice {
            input: trimmed.to_string(),
            count,
        }),
    }
}
