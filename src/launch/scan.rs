use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// System directory holding desktop entries. Fixed, not configurable.
pub const APPLICATIONS_DIR: &str = "/usr/share/applications";

/// Find all desktop entry files on the system.
pub fn descriptor_files() -> Result<Vec<PathBuf>> {
    descriptor_files_in(Path::new(APPLICATIONS_DIR))
}

fn descriptor_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/*.desktop", dir.display());
    let entries = glob::glob(&pattern)
        .with_context(|| format!("Invalid glob pattern '{pattern}'"))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.context("Failed to scan for desktop entry files")?;
        files.push(path);
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_finds_only_desktop_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("editor.desktop"), "Name=Editor\n").unwrap();
        fs::write(dir.path().join("browser.desktop"), "Name=Browser\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "not a descriptor\n").unwrap();

        let mut files = descriptor_files_in(dir.path()).unwrap();
        files.sort();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["browser.desktop", "editor.desktop"]);
    }

    #[test]
    fn test_empty_directory_yields_no_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(descriptor_files_in(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_yields_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("does-not-exist");
        assert!(descriptor_files_in(&gone).unwrap().is_empty());
    }
}
