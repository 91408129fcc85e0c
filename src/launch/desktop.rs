use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::launch::types::DesktopApp;

/// Exec field codes the launcher cannot fill in; they are removed, not
/// substituted.
const FIELD_CODES: [&str; 2] = ["%u", "%F"];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("application name not found")]
    NameNotFound,

    #[error("no launch command found")]
    NoCommands,
}

/// Parse one .desktop file into a launchable application.
///
/// A descriptor without a `Name=` line or without any usable `Exec=`
/// line is rejected so that every surviving entry can be launched.
pub fn parse_descriptor(path: &Path) -> Result<DesktopApp> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read desktop file '{}'", path.display()))?;

    let name = app_name(&content).ok_or(DescriptorError::NameNotFound)?;
    let commands = launch_commands(&content);
    if commands.is_empty() {
        return Err(DescriptorError::NoCommands.into());
    }

    Ok(DesktopApp {
        name,
        path: path.to_path_buf(),
        commands,
    })
}

/// First `Name=` line wins. The value is everything after the prefix,
/// kept verbatim.
fn app_name(content: &str) -> Option<String> {
    content
        .lines()
        .find_map(|line| line.strip_prefix("Name="))
        .map(|name| name.to_string())
}

/// Collect every `Exec=` line in file order, with field codes removed
/// and the result trimmed.
fn launch_commands(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| line.strip_prefix("Exec="))
        .map(clean_command)
        .collect()
}

fn clean_command(exec: &str) -> String {
    let mut command = exec.to_string();
    for code in FIELD_CODES {
        command = command.replace(code, "");
    }
    command.trim().to_string()
}
