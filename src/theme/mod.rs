//! Theme system for the progress stepper
//!
//! A [`FullTheme`] holds a light and a dark [`StepTheme`], each defining
//! colors for every [`Status`]. Users customise it with a partial
//! [`ThemePatch`], either built in code or loaded from a YAML file.

pub mod loader;
pub mod models;
pub mod overlay;
pub mod parser;

#[cfg(test)]
mod tests;

pub use loader::{load_theme, ThemeError};
pub use models::{
    ContentTheme, FullTheme, ProgressBarTheme, Status, StatusThemeSet, StepTheme, TextTheme,
    ThemeColors,
};
pub use overlay::{Merge, ThemePatch};
