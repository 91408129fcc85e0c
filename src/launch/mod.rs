use anyhow::Result;
use std::collections::BTreeMap;

pub mod desktop;
pub mod execute;
pub mod scan;
pub mod types;

use crate::menu;
use types::DesktopApp;

/// Run the whole launcher flow: scan, list, select, spawn.
///
/// Returns the process exit code. Per-descriptor parse failures are
/// reported and skipped; every other failure aborts the run.
pub fn handle_launch() -> Result<i32> {
    let files = scan::descriptor_files()?;
    if files.is_empty() {
        println!("No applications found.");
        return Ok(1);
    }

    // Working set keyed by display index, built once and passed along.
    let mut apps: BTreeMap<usize, DesktopApp> = BTreeMap::new();
    for path in &files {
        match desktop::parse_descriptor(path) {
            Ok(app) => {
                apps.insert(apps.len() + 1, app);
            }
            Err(e) => {
                println!("Skipping '{}': {e:#}", path.display());
            }
        }
    }

    if apps.is_empty() {
        println!("No launchable applications found.");
        return Ok(1);
    }

    menu::render(
        "Select an application to launch:",
        apps.values().map(|app| app.name.as_str()),
    );
    let choice = menu::prompt_choice("Enter the number of the application to launch: ", apps.len())?;
    let app = &apps[&choice];

    let command = match app.single_command() {
        Some(command) => command,
        None => {
            menu::render(
                "Select an option to launch:",
                app.commands.iter().map(|cmd| cmd.as_str()),
            );
            let option =
                menu::prompt_choice("Enter the number of the option to launch: ", app.commands.len())?;
            app.commands[option - 1].as_str()
        }
    };

    execute::spawn_detached(command)?;
    Ok(0)
}
