//! Rendering command results in the resolved output mode

use crate::domain::OutputMode;
use anyhow::{Context, Result};
use console::style;
use serde::Serialize;

/// Print `payload` as JSON, or `lines` (`key=value` text) for plain and human output.
pub fn print_data<T: Serialize>(mode: OutputMode, payload: &T, lines: &[String]) -> Result<()> {
    match mode {
        OutputMode::Json => {
            let text =
                serde_json::to_string_pretty(payload).context("Failed to serialize output")?;
            println!("{}", text);
        }
        OutputMode::Plain => {
            for line in lines {
                println!("{}", line);
            }
        }
        OutputMode::Human => {
            for line in lines {
                println!("{}", human_line(line));
            }
        }
    }
    Ok(())
}

fn human_line(line: &str) -> String {
    match line.split_once('=') {
        Some((key, value)) => format!("{}: {}", style(key).bold(), value),
        None => line.to_string(),
    }
}
