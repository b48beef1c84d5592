pub mod background;
pub mod catalog;
pub mod color;
pub mod config;
pub mod error;
pub mod store;
pub mod text;

pub use background::{
    apply_patch, to_background_shorthand, Background, BackgroundKind, BackgroundPatch, ColorStop,
    GradientDirection, GridOverlay, GridPattern, LinearGradient, SolidColor,
};
pub use color::{Color, CssColor};
pub use config::EditorConfig;
pub use error::{ImprintError, ImprintResult};
pub use store::{SubscriptionId, Template, TemplateStore};
pub use text::{apply_text_patch, FontFamily, FontWeight, TextPatch, TextStyle};
