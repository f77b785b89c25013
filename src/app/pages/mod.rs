//! Page view models.
//!
//! Each page owns the texts it displays and turns its state into a
//! [`PageContent`] that the shell renders. Pages never touch widgets.

pub mod error_page;
pub mod history;
pub mod home;
pub mod orders;
pub mod participants;
pub mod placeholder;
pub mod settings;

use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use super::context::AppContext;
use super::domain::messages::{Message, PageCommand};
use super::domain::page::Page;
use super::infrastructure::error::Result;

pub use error_page::ErrorPage;
pub use history::HistoryPage;
pub use home::HomePage;
pub use orders::OrdersPage;
pub use participants::ParticipantsPage;
pub use placeholder::PlaceholderPage;
pub use settings::SettingsPage;

/// Re-read every displayed string from the current language.
///
/// Implementations pull texts from the shared context at call time and must
/// be idempotent.
pub trait TextRefresh {
    fn refresh_text(&mut self);
}

pub trait PageView {
    fn page(&self) -> Page;

    fn content(&self) -> PageContent;

    /// Pages that follow language switches return themselves here.
    fn text_refresh(&mut self) -> Option<&mut dyn TextRefresh> {
        None
    }

    fn handle(&mut self, _command: &PageCommand) -> Vec<Notice> {
        Vec::new()
    }

    /// Apply finished background work. Returns true if the content changed.
    fn poll_background(&mut self) -> bool {
        false
    }

    /// Called right before the view is replaced.
    fn unmount(&mut self) {}
}

/// Builds the view for a page.
pub trait PageFactory {
    fn build(&self, page: Page, ctx: &Rc<AppContext>) -> Result<Box<dyn PageView>>;
}

/// The factory used by the application.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardPages;

impl PageFactory for StandardPages {
    fn build(&self, page: Page, ctx: &Rc<AppContext>) -> Result<Box<dyn PageView>> {
        let ctx = Rc::clone(ctx);
        let view: Box<dyn PageView> = match page {
            Page::Home => Box::new(HomePage::new(ctx)),
            Page::History => Box::new(HistoryPage::new(ctx)),
            Page::Settings => Box::new(SettingsPage::new(ctx)),
            Page::Orders => Box::new(OrdersPage::new(ctx)),
            Page::Telc => Box::new(PlaceholderPage::telc(ctx)),
            Page::Exams => Box::new(PlaceholderPage::exams(ctx)),
            Page::Participants => Box::new(ParticipantsPage::new(ctx)),
        };
        Ok(view)
    }
}

/// Texts a view displays, keyed by translation key.
#[derive(Debug, Clone, Default)]
pub struct TextCache {
    entries: &'static [(&'static str, &'static str)],
    texts: HashMap<&'static str, String>,
}

impl TextCache {
    /// `entries` are `(key, fallback)` pairs.
    pub fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            entries,
            texts: HashMap::new(),
        }
    }

    pub fn refresh(&mut self, ctx: &AppContext) {
        for (key, fallback) in self.entries {
            self.texts.insert(*key, ctx.text_or(key, fallback));
        }
    }

    /// Cached text, or the key itself if it was never declared.
    pub fn get(&self, key: &str) -> String {
        self.texts
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct PageContent {
    pub title: String,
    pub elements: Vec<Element>,
}

impl PageContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, element: Element) -> &mut Self {
        self.elements.push(element);
        self
    }

    /// Every string the user would see, in display order.
    pub fn visible_text(&self) -> Vec<String> {
        let mut texts = vec![self.title.clone()];
        for element in &self.elements {
            let text = match element {
                Element::Heading(t)
                | Element::Text(t)
                | Element::Status(t)
                | Element::Item(t)
                | Element::Error(t) => t.clone(),
                Element::Action(action) => action.label.clone(),
                Element::Input(field) => format!("{}: {}", field.label, field.value),
            };
            texts.push(text);
        }
        texts
    }

    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.elements.iter().filter_map(|e| match e {
            Element::Action(action) => Some(action),
            _ => None,
        })
    }

    pub fn action(&self, label: &str) -> Option<&Action> {
        self.actions().find(|a| a.label == label)
    }

    pub fn inputs(&self) -> impl Iterator<Item = &InputField> {
        self.elements.iter().filter_map(|e| match e {
            Element::Input(field) => Some(field),
            _ => None,
        })
    }
}

#[derive(Debug, Clone)]
pub enum Element {
    Heading(String),
    Text(String),
    Status(String),
    Item(String),
    Error(String),
    Action(Action),
    Input(InputField),
}

#[derive(Debug, Clone)]
pub struct Action {
    pub label: String,
    pub command: Command,
    pub enabled: bool,
    /// Rendered highlighted (selected language, open section, ...).
    pub active: bool,
}

impl Action {
    pub fn new(label: impl Into<String>, command: Command) -> Self {
        Self {
            label: label.into(),
            command,
            enabled: true,
            active: false,
        }
    }

    pub fn send(label: impl Into<String>, message: impl Into<Message>) -> Self {
        Self::new(label, Command::Send(message.into()))
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

impl From<Action> for Element {
    fn from(action: Action) -> Self {
        Element::Action(action)
    }
}

/// What the shell does when an action is triggered.
#[derive(Debug, Clone)]
pub enum Command {
    Send(Message),
    /// Ask for a line of text first.
    Prompt {
        title: String,
        label: String,
        initial: String,
        submit: fn(String) -> Message,
    },
    /// Ask for a destination file first.
    SaveFile {
        title: String,
        file_name: String,
        filter: String,
        submit: fn(PathBuf) -> Message,
    },
}

/// Editable field; `submit` turns the committed value into a message.
#[derive(Debug, Clone)]
pub struct InputField {
    pub label: String,
    pub value: String,
    pub multiline: bool,
    pub submit: fn(String) -> Message,
}

impl From<InputField> for Element {
    fn from(field: InputField) -> Self {
        Element::Input(field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Modal acknowledgement shown by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Info, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Error, title, message)
    }

    fn with_level(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::rc::Rc;

    use crate::app::context::AppContext;
    use crate::app::domain::preferences::Language;
    use crate::app::domain::settings::ConfigStore;

    pub fn context(language: Language) -> Rc<AppContext> {
        let mut config = ConfigStore::in_memory();
        config.set_language(language);
        AppContext::new(config)
    }
}
