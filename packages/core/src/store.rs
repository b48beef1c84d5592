//! State holder for the template being edited
//!
//! The store is an ordinary value owned by the application and passed to the
//! controls that edit it. Every write replaces the stored value, bumps the
//! revision and synchronously notifies subscribers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::background::{apply_patch, Background, BackgroundPatch, LinearGradient};
use crate::config::EditorConfig;
use crate::text::{apply_text_patch, TextPatch, TextStyle};
use crate::ImprintResult;

/// The template being edited
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub updated_at: DateTime<Utc>,
    pub background: Background,
    pub text: TextStyle,
}

impl Template {
    pub fn new(background: Background, text: TextStyle) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            updated_at: Utc::now(),
            background,
            text,
        }
    }

    pub fn mark_modified(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new(Background::default(), TextStyle::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&Template)>;

pub struct TemplateStore {
    template: Template,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    revision: u64,
}

impl std::fmt::Debug for TemplateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateStore")
            .field("template", &self.template)
            .field("subscribers", &self.subscribers.len())
            .field("revision", &self.revision)
            .finish()
    }
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore {
    /// Store holding the default template
    pub fn new() -> Self {
        Self::from_sanitized(Template::default())
    }

    /// Store holding `template`, sanitized like any other write
    pub fn with_template(template: Template) -> ImprintResult<Self> {
        let template = Template {
            background: template.background.sanitized()?,
            text: template.text.sanitized()?,
            ..template
        };
        Ok(Self::from_sanitized(template))
    }

    fn from_sanitized(template: Template) -> Self {
        Self {
            template,
            subscribers: Vec::new(),
            next_subscription: 0,
            revision: 0,
        }
    }

    /// Store whose initial background follows the editor configuration
    pub fn from_config(config: &EditorConfig) -> ImprintResult<Self> {
        let preset = config.gradient_preset()?;
        let background = Background::LinearGradient(LinearGradient {
            direction: config.default_direction,
            color_stops: preset.color_stops(),
            noise: config.default_noise,
            grid_overlay: None,
        });

        info!(
            "Creating template with the {} gradient, {}",
            preset.name, config.default_direction
        );
        Self::with_template(Template::new(background, TextStyle::default()))
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn background(&self) -> &Background {
        &self.template.background
    }

    pub fn text(&self) -> &TextStyle {
        &self.template.text
    }

    /// Number of writes so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_background(&mut self, next: Background) -> ImprintResult<()> {
        let next = next.sanitized()?;
        if next == self.template.background {
            debug!("Background unchanged, skipping write");
            return Ok(());
        }
        self.template.background = next;
        self.commit();
        Ok(())
    }

    pub fn set_text_style(&mut self, next: TextStyle) -> ImprintResult<()> {
        let next = next.sanitized()?;
        if next == self.template.text {
            debug!("Text style unchanged, skipping write");
            return Ok(());
        }
        self.template.text = next;
        self.commit();
        Ok(())
    }

    pub fn apply(&mut self, patch: BackgroundPatch) -> ImprintResult<()> {
        let next = apply_patch(&self.template.background, patch)?;
        self.set_background(next)
    }

    pub fn apply_text(&mut self, patch: TextPatch) -> ImprintResult<()> {
        let next = apply_text_patch(&self.template.text, patch)?;
        self.set_text_style(next)
    }

    pub fn subscribe(&mut self, callback: impl Fn(&Template) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns whether the subscription existed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    fn commit(&mut self) {
        self.template.mark_modified();
        self.revision += 1;
        debug!(
            "Template {} revision {} ({} subscribers)",
            self.template.id,
            self.revision,
            self.subscribers.len()
        );
        for (_, subscriber) in &self.subscribers {
            subscriber(&self.template);
        }
    }
}
