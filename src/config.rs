//! Demo configuration: the steps to show and the initial display options.

use color_eyre::eyre::{eyre, Result};
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::stepper::{Step, StepDescription, StepNumber, StepStatus, StepTitle};

const FILE_NAME: &str = "demo.yml";
const CONFIG_DIR: &str = ".config";
const APP_CONFIG_DIR: &str = "progress-stepper";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub steps: Vec<StepConfig>,
    /// Index of the step in progress at startup
    pub start_step: usize,
    pub vertical: bool,
    pub dark: bool,
    pub numbered: bool,
    /// Name of a theme file in the themes directory
    pub theme: Option<String>,
    pub status_labels: StatusLabels,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepConfig {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Replaces the number or check mark in the node
    #[serde(default)]
    pub symbol: Option<String>,
}

/// Overrides for the status badge labels.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusLabels {
    pub progress: Option<String>,
    pub completed: Option<String>,
    pub pending: Option<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        let step = |title: &str, description: &str| StepConfig {
            title: title.to_string(),
            description: Some(description.to_string()),
            symbol: None,
        };
        DemoConfig {
            steps: vec![
                step("Cart", "Review items"),
                step("Shipping", "Pick an address"),
                step("Payment", "Card or transfer"),
                step("Confirmation", "All done"),
            ],
            start_step: 0,
            vertical: false,
            dark: false,
            numbered: true,
            theme: None,
            status_labels: StatusLabels::default(),
        }
    }
}

impl DemoConfig {
    /// `~/.config/progress-stepper/demo.yml`
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(eyre!("No $HOME directory found for demo config"))?;
        Ok(home.join(CONFIG_DIR).join(APP_CONFIG_DIR).join(FILE_NAME))
    }

    /// Load the configuration at `path`, or the built-in demo if there is no
    /// file there.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(
                "No demo config at {}, using built-in steps",
                path.display()
            );
            return Ok(DemoConfig::default());
        }
        let config_string = fs::read_to_string(path)?;
        let config = Self::parse(&config_string)
            .map_err(|e| eyre!("Invalid demo config {}: {}", path.display(), e))?;
        debug!("Loaded demo config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: DemoConfig = serde_yaml::from_str(content)?;
        if config.steps.is_empty() {
            warn!("Demo config has no steps, nothing will be shown");
        }
        if config.start_step > config.steps.len() {
            warn!(
                "Start step {} is past the last step ({})",
                config.start_step,
                config.steps.len()
            );
        }
        Ok(config)
    }

    /// Build the stepper steps described by the configuration.
    pub fn build_steps(&self) -> Vec<Step> {
        let mut status = StepStatus::new();
        if let Some(text) = &self.status_labels.progress {
            status = status.text_progress(text);
        }
        if let Some(text) = &self.status_labels.completed {
            status = status.text_completed(text);
        }
        if let Some(text) = &self.status_labels.pending {
            status = status.text_pending(text);
        }

        self.steps
            .iter()
            .map(|config| {
                let mut step = Step::new()
                    .content(StepNumber::new())
                    .content(StepTitle::new(&config.title))
                    .content(status.clone());
                if let Some(description) = &config.description {
                    step = step.content(StepDescription::new(description));
                }
                if let Some(symbol) = &config.symbol {
                    step = step.custom_content(symbol);
                }
                step
            })
            .collect()
    }
}
