use anyhow::{Context, Result};
use colored::Colorize;
use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};

/// Spawn a launch command through the shell, detached from our process
/// group. The child handle is dropped on purpose: the launcher never
/// waits on it, and exiting must not take the application down.
pub fn spawn_detached(command: &str) -> Result<()> {
    println!("{} {}", "Launching".green(), command);

    Command::new("sh")
        .arg("-c")
        .arg(command)
        .process_group(0)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to launch '{command}'"))?;

    Ok(())
}
