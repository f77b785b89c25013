use std::cell::{Cell, Ref, RefCell, RefMut};
use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, info};

use super::domain::activity::ActivityLog;
use super::domain::preferences::{Language, Theme};
use super::domain::settings::ConfigStore;
use super::services::i18n::Translator;
use super::services::search::{SearchRunner, Waker};

/// Simulated latency of the order search.
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_secs(2);

/// Services shared by the navigation controller and every page.
///
/// Lives on the UI thread behind an `Rc`; pages receive it at construction.
pub struct AppContext {
    config: RefCell<ConfigStore>,
    i18n: RefCell<Translator>,
    theme: Cell<Theme>,
    activity: RefCell<ActivityLog>,
    waker: RefCell<Option<Waker>>,
    search_delay: Cell<Duration>,
}

impl AppContext {
    pub fn new(config: ConfigStore) -> Rc<Self> {
        let language = config.language();
        let theme = config.theme();
        info!(%language, %theme, "application context ready");
        Rc::new(Self {
            config: RefCell::new(config),
            i18n: RefCell::new(Translator::new(language)),
            theme: Cell::new(theme),
            activity: RefCell::new(ActivityLog::new()),
            waker: RefCell::new(None),
            search_delay: Cell::new(DEFAULT_SEARCH_DELAY),
        })
    }

    pub fn config(&self) -> Ref<'_, ConfigStore> {
        self.config.borrow()
    }

    pub fn config_mut(&self) -> RefMut<'_, ConfigStore> {
        self.config.borrow_mut()
    }

    pub fn text(&self, key: &str) -> String {
        self.i18n.borrow().get_text(key)
    }

    pub fn text_or(&self, key: &str, fallback: &str) -> String {
        self.i18n.borrow().get_text_or(key, fallback)
    }

    pub fn language(&self) -> Language {
        self.i18n.borrow().language()
    }

    /// Switch the UI language and persist it.
    pub fn set_language(&self, language: Language) {
        self.i18n.borrow_mut().set_language(language);
        let mut config = self.config.borrow_mut();
        config.set_language(language);
        config.save();
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Switch the theme and persist it.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        let mut config = self.config.borrow_mut();
        config.set_theme(theme);
        config.save();
        debug!(%theme, "theme changed");
    }

    /// Append to the session's activity history, attributed to the current user.
    pub fn record_activity(&self, kind: &str, message: impl Into<String>) {
        let message = message.into();
        let user = self.config.borrow().current_user_name();
        info!(kind, %user, "activity: {message}");
        self.activity.borrow_mut().record(kind, message, &user);
    }

    pub fn activity(&self) -> Ref<'_, ActivityLog> {
        self.activity.borrow()
    }

    pub fn clear_activity(&self) {
        self.activity.borrow_mut().clear();
    }

    /// Installed by the shell so background work can wake its event loop.
    pub fn set_waker(&self, waker: Waker) {
        *self.waker.borrow_mut() = Some(waker);
    }

    pub fn set_search_delay(&self, delay: Duration) {
        self.search_delay.set(delay);
    }

    pub fn search_runner(&self) -> SearchRunner {
        SearchRunner::new(self.search_delay.get(), self.waker.borrow().clone())
    }
}
