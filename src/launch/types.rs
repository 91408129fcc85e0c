use std::path::PathBuf;

/// Desktop application parsed from a .desktop file
#[derive(Debug, Clone)]
pub struct DesktopApp {
    pub name: String,
    pub path: PathBuf,
    pub commands: Vec<String>,
}

impl DesktopApp {
    /// Return the only command when no secondary selection is needed.
    pub fn single_command(&self) -> Option<&str> {
        match self.commands.as_slice() {
            [cmd] => Some(cmd),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(commands: &[&str]) -> DesktopApp {
        DesktopApp {
            name: "Test".to_string(),
            path: PathBuf::from("/usr/share/applications/test.desktop"),
            commands: commands.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_single_command() {
        assert_eq!(app(&["editor"]).single_command(), Some("editor"));
        assert_eq!(app(&["editor", "editor --new"]).single_command(), None);
    }
}
