pub mod background_form;
pub mod field;
pub mod swatch;
pub mod text_settings;

pub use background_form::*;
pub use field::*;
pub use swatch::*;
pub use text_settings::*;
