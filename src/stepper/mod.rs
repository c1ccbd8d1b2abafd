//! Progress stepper widget
//!
//! A [`Stepper`] shows an ordered list of [`Step`]s. From the index of the
//! step in progress it derives the [`Status`](crate::theme::Status) of every
//! step, and each step narrows the resolved theme down to its status before
//! drawing its node, connector and content.

pub mod content;
pub mod state;
pub mod status;
pub mod step;
pub mod widget;

pub use content::{StepContent, StepDescription, StepNumber, StepStatus, StepTitle};
pub use state::StepperState;
pub use status::{derive_steps, ContentContext, StepContext};
pub use step::Step;
pub use widget::Stepper;
