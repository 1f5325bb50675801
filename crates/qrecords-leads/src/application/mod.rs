//! Application layer
//!
//! Orchestrates submissions and drives the multi-step form.

pub mod commands;
pub mod dto;
pub mod stepper;

pub use commands::{ContactService, DemoRequestService};
pub use dto::*;
pub use stepper::{DemoRequestStepper, FormStep, StepperError};
