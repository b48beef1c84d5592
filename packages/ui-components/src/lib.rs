//! Editor form components for Imprint

pub mod components;

pub use components::*;
