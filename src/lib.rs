//! A themeable, multi-step progress stepper for ratatui.
//!
//! ```no_run
//! use progress_stepper::stepper::{Step, StepNumber, StepStatus, StepTitle, Stepper};
//!
//! let steps = ["Cart", "Shipping", "Payment"]
//!     .into_iter()
//!     .map(|title| {
//!         Step::new()
//!             .content(StepNumber::new())
//!             .content(StepTitle::new(title))
//!             .content(StepStatus::new())
//!     })
//!     .collect();
//! let stepper = Stepper::new(steps).step(1).dark(true);
//! # let _ = stepper;
//! ```

pub mod stepper;
pub mod theme;

// Interactive demo
pub mod app;
pub mod config;
pub mod inputs;
pub mod logger;
pub mod tui;
pub mod ui;
