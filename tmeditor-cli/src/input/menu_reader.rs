//! Menu snapshot loading

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tmeditor_core::Menu;

/// Reads TOML menu snapshots
pub struct MenuReader;

impl MenuReader {
    /// Read and parse a menu snapshot with the given number of algorithm slots
    pub fn read(path: &Path, max_algorithms: u32) -> Result<Menu> {
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read menu: {}", path.display()))?;
        let menu = Menu::from_toml_str(&text)
            .with_context(|| format!("Failed to load menu: {}", path.display()))?
            .with_max_algorithms(max_algorithms);
        log::info!(
            "loaded menu {} with {} algorithm(s) from {}",
            menu.name,
            menu.algorithms().len(),
            path.display()
        );
        Ok(menu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_menu() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("menu.toml");
        fs::write(
            &path,
            r#"
name = "L1Menu_Reader"

[[algorithms]]
index = 7
name = "L1_SingleMu10"
expression = "MU10"
"#,
        )
        .unwrap();

        let menu = MenuReader::read(&path, 64).unwrap();
        assert_eq!(menu.name, "L1Menu_Reader");
        assert_eq!(menu.max_algorithms(), 64);
        assert_eq!(menu.algorithm_by_index(7).unwrap().name, "L1_SingleMu10");
    }

    #[test]
    fn test_missing_file() {
        let error = MenuReader::read(Path::new("/nonexistent/menu.toml"), 512).unwrap_err();
        assert_eq!(error.to_string(), "File not found: /nonexistent/menu.toml");
    }

    #[test]
    fn test_malformed_menu() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "name = ").unwrap();

        let error = MenuReader::read(&path, 512).unwrap_err();
        assert!(error.to_string().contains("Failed to load menu"));
    }
}
