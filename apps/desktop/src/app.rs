//! Main application wiring the editor forms to the template store

use crate::ui::main_view;
use imprint_core::{EditorConfig, ImprintError, TemplateStore};
use imprint_ui::{BackgroundForm, BackgroundFormMessage, TextSettings, TextSettingsMessage};
use iced::{executor, Application, Command, Element, Theme};
use tracing::{debug, info, warn};

pub struct ImprintApp {
    pub store: TemplateStore,
    pub background_form: BackgroundForm,
    pub text_settings: TextSettings,
    pub theme: Theme,
    /// Last rejected edit, cleared by the next accepted one
    pub last_error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Background(BackgroundFormMessage),
    Text(TextSettingsMessage),
    DismissError,
}

impl Application for ImprintApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = EditorConfig;

    fn new(config: EditorConfig) -> (Self, Command<Message>) {
        info!("Initializing Imprint application");

        let mut store = TemplateStore::from_config(&config).unwrap_or_else(|e| {
            warn!("Ignoring editor config: {}", e);
            TemplateStore::new()
        });
        store.subscribe(|template| {
            debug!("Template {} updated at {}", template.id, template.updated_at);
        });

        (
            Self {
                background_form: BackgroundForm::new(store.background()),
                text_settings: TextSettings::new(store.text()),
                store,
                theme: Theme::Dark,
                last_error: None,
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        match &self.last_error {
            Some(_) => "Imprint - Invalid edit".to_string(),
            None => "Imprint".to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        debug!("Handling message: {:?}", message);

        let result = match message {
            Message::Background(message) => self.background_form.update(&mut self.store, message),
            Message::Text(message) => self.text_settings.update(&mut self.store, message),
            Message::DismissError => {
                self.last_error = None;
                return Command::none();
            }
        };
        self.record(result);

        Command::none()
    }

    fn view(&self) -> Element<Message> {
        main_view(self)
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

impl ImprintApp {
    fn record(&mut self, result: Result<(), ImprintError>) {
        match result {
            Ok(()) => self.last_error = None,
            Err(e) => {
                warn!("Edit rejected: {}", e);
                self.last_error = Some(e.to_string());
            }
        }
    }
}

impl Default for ImprintApp {
    fn default() -> Self {
        let (app, _) = Self::new(EditorConfig::default());
        app
    }
}
