//! Theme loading functionality
//!
//! Theme files are YAML overlays: they only list the colors they change and
//! are merged over the built-in theme when a stepper renders.

use super::overlay::ThemePatch;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".config";
const APP_CONFIG_DIR: &str = "progress-stepper";
const THEMES_DIR: &str = "themes";
const THEME_EXTENSION: &str = "yml";

/// Themes shipped with the crate, written to the themes directory on demand.
const BUNDLED_THEMES: &[(&str, &str)] = &[
    ("ocean", include_str!("../../themes/ocean.yml")),
    ("terminal", include_str!("../../themes/terminal.yml")),
];

/// Error type for theme file failures
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("Could not find home directory")]
    NoHomeDir,
    #[error("Theme file not found: {0}")]
    NotFound(PathBuf),
    #[error("Could not read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid theme file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Load a theme overlay by name, falling back to the built-in theme.
///
/// The fallback is an empty overlay, which leaves every default in place.
pub fn load_theme(theme_name: &str) -> ThemePatch {
    let result = themes_dir().and_then(|dir| load_theme_in(&dir, theme_name));
    match result {
        Ok(patch) => {
            info!("Successfully loaded theme: {theme_name}");
            patch
        }
        Err(e) => {
            warn!("Failed to load theme '{theme_name}': {e}. Using default theme.");
            ThemePatch::default()
        }
    }
}

/// Load the theme `theme_name` from the given themes directory.
pub fn load_theme_in(dir: &Path, theme_name: &str) -> Result<ThemePatch, ThemeError> {
    let theme_path = dir.join(format!("{theme_name}.{THEME_EXTENSION}"));
    if !theme_path.exists() {
        return Err(ThemeError::NotFound(theme_path));
    }
    load_theme_from_path(&theme_path)
}

/// Load a theme overlay from a YAML file.
pub fn load_theme_from_path(path: &Path) -> Result<ThemePatch, ThemeError> {
    debug!("Loading theme from: {}", path.display());
    let content = fs::read_to_string(path)?;
    parse_theme(&content)
}

/// Parse a theme overlay from YAML text. An empty document is an empty overlay.
pub fn parse_theme(content: &str) -> Result<ThemePatch, ThemeError> {
    if content.trim().is_empty() {
        return Ok(ThemePatch::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// Path of the user's themes directory, `~/.config/progress-stepper/themes`.
pub fn themes_dir() -> Result<PathBuf, ThemeError> {
    let home_dir = dirs::home_dir().ok_or(ThemeError::NoHomeDir)?;
    Ok(home_dir.join(CONFIG_DIR).join(APP_CONFIG_DIR).join(THEMES_DIR))
}

/// Write the bundled themes into `dir`, creating it if needed.
///
/// Existing files are left untouched so user modifications survive.
pub fn install_bundled_themes(dir: &Path) -> Result<(), ThemeError> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
        debug!("Created themes directory: {}", dir.display());
    }

    for (name, content) in BUNDLED_THEMES {
        let dest_path = dir.join(format!("{name}.{THEME_EXTENSION}"));
        if dest_path.exists() {
            debug!("Theme file already exists, skipping: {}", dest_path.display());
        } else {
            fs::write(&dest_path, content)?;
            info!("Installed theme file: {}", dest_path.display());
        }
    }
    Ok(())
}

/// List the theme names available in `dir`, sorted.
pub fn list_available_themes(dir: &Path) -> Result<Vec<String>, ThemeError> {
    if !dir.exists() {
        return Ok(vec![]);
    }

    let mut themes = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(THEME_EXTENSION) {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                themes.push(stem.to_string());
            }
        }
    }

    themes.sort();
    Ok(themes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::FullTheme;

    #[test]
    fn test_missing_theme_falls_back_to_defaults() {
        let patch = load_theme("nonexistent-theme-for-tests");
        assert!(patch.is_empty());
        assert_eq!(FullTheme::resolve(&patch), FullTheme::default());
    }

    #[test]
    fn test_load_theme_in_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_theme_in(dir.path(), "nope");
        assert!(matches!(result, Err(ThemeError::NotFound(_))));
    }

    #[test]
    fn test_bundled_themes_parse() {
        for (name, content) in BUNDLED_THEMES {
            let patch = parse_theme(content).unwrap_or_else(|e| panic!("theme {name}: {e}"));
            assert!(!patch.is_empty(), "theme {name} is empty");
        }
    }

    #[test]
    fn test_install_and_list_bundled_themes() {
        let dir = tempfile::tempdir().unwrap();
        let themes_dir = dir.path().join("themes");
        install_bundled_themes(&themes_dir).unwrap();
        assert_eq!(
            list_available_themes(&themes_dir).unwrap(),
            vec!["ocean".to_string(), "terminal".to_string()]
        );
        assert!(load_theme_in(&themes_dir, "ocean").is_ok());
    }

    #[test]
    fn test_install_keeps_user_modifications() {
        let dir = tempfile::tempdir().unwrap();
        let custom = "light:\n  step:\n    pending:\n      color: red\n";
        fs::write(dir.path().join("ocean.yml"), custom).unwrap();
        install_bundled_themes(dir.path()).unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("ocean.yml")).unwrap(), custom);
    }

    #[test]
    fn test_list_ignores_other_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        fs::write(dir.path().join("b.yml"), "").unwrap();
        fs::write(dir.path().join("a.yml"), "").unwrap();
        assert_eq!(
            list_available_themes(dir.path()).unwrap(),
            vec!["a".to_string(), "b".to_string()]
        );
        assert!(list_available_themes(&dir.path().join("missing"))
            .unwrap()
            .is_empty());
    }
}
