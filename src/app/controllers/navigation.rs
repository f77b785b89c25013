use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, error, info};

use crate::app::context::AppContext;
use crate::app::domain::messages::PageCommand;
use crate::app::domain::page::Page;
use crate::app::domain::preferences::{Language, Palette, Theme};
use crate::app::infrastructure::error::AppError;
use crate::app::pages::{
    ErrorPage, Notice, PageContent, PageFactory, PageView, StandardPages, TextCache, TextRefresh,
};

static CHROME_TEXTS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("history", "History"),
    ("settings", "Settings"),
    ("back", "Back"),
    ("light", "Light"),
    ("dark", "Dark"),
    ("notifications", "Notifications"),
    ("noNotifications", "No new notifications."),
];

/// Cross-fade played when the content is swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub fade_out: Duration,
    pub fade_in: Duration,
}

pub const PAGE_TRANSITION: Transition = Transition {
    fade_out: Duration::from_millis(150),
    fade_in: Duration::from_millis(300),
};

/// Header and sidebar labels owned by the controller itself.
pub struct NavChrome {
    ctx: Rc<AppContext>,
    texts: TextCache,
}

impl NavChrome {
    fn new(ctx: Rc<AppContext>) -> Self {
        let mut chrome = Self {
            ctx,
            texts: TextCache::new(CHROME_TEXTS),
        };
        chrome.refresh_text();
        chrome
    }

    pub fn label(&self, key: &str) -> String {
        self.texts.get(key)
    }

    pub fn page_label(&self, page: Page) -> String {
        self.ctx.text(page.title_key())
    }

    pub fn language_active(&self, language: Language) -> bool {
        self.ctx.language() == language
    }

    pub fn theme_active(&self, theme: Theme) -> bool {
        self.ctx.theme() == theme
    }
}

impl TextRefresh for NavChrome {
    fn refresh_text(&mut self) {
        self.texts.refresh(&self.ctx);
    }
}

/// Owns the current page and the view mounted in the content area.
///
/// Navigation swaps the content; there is no back stack, "back" always
/// leads home.
pub struct NavigationController {
    ctx: Rc<AppContext>,
    factory: Box<dyn PageFactory>,
    current: Page,
    view: Box<dyn PageView>,
    chrome: NavChrome,
    history_dot: bool,
    notification_dot: bool,
    activity_seen: u64,
    /// The mounted view is the error placeholder.
    placeholder: bool,
}

impl NavigationController {
    pub fn new(ctx: Rc<AppContext>) -> Self {
        Self::with_factory(ctx, Box::new(StandardPages))
    }

    pub fn with_factory(ctx: Rc<AppContext>, factory: Box<dyn PageFactory>) -> Self {
        let current = Page::Home;
        let (view, placeholder) = match factory.build(current, &ctx) {
            Ok(view) => (view, false),
            Err(e) => (Self::placeholder_for(current, &e), true),
        };
        let chrome = NavChrome::new(Rc::clone(&ctx));
        let mut controller = Self {
            ctx,
            factory,
            current,
            view,
            chrome,
            history_dot: false,
            notification_dot: false,
            activity_seen: 0,
            placeholder,
        };
        controller.refresh_view();
        controller
    }

    fn placeholder_for(page: Page, e: &AppError) -> Box<dyn PageView> {
        error!(%page, "failed to load page: {e}");
        Box::new(ErrorPage::new(page, e.to_string()))
    }

    fn refresh_view(&mut self) {
        if let Some(view) = self.view.text_refresh() {
            view.refresh_text();
        }
    }

    /// Mount the view for `page`. When the view cannot be built an error
    /// placeholder is shown and the current page stays unchanged.
    pub fn navigate_to(&mut self, page: Page) {
        let (view, placeholder) = match self.factory.build(page, &self.ctx) {
            Ok(view) => {
                debug!(from = %self.current, to = %page, "navigate");
                self.current = page;
                (view, false)
            }
            Err(e) => (Self::placeholder_for(page, &e), true),
        };
        self.view.unmount();
        self.view = view;
        self.placeholder = placeholder;
        self.refresh_view();

        if !placeholder && self.current == Page::History {
            self.history_dot = false;
            self.activity_seen = self.ctx.activity().recorded_total();
        }
    }

    pub fn navigate_back(&mut self) {
        self.navigate_to(Page::Home);
    }

    pub fn current_page(&self) -> Page {
        self.current
    }

    /// Exactly one marker is active: the current page's.
    pub fn marker_active(&self, page: Page) -> bool {
        self.current == page
    }

    /// Also shown while an error placeholder covers the home page.
    pub fn back_visible(&self) -> bool {
        self.current != Page::Home || self.placeholder
    }

    pub fn theme_controls_visible(&self) -> bool {
        self.current == Page::Home
    }

    pub fn transition(&self) -> Transition {
        PAGE_TRANSITION
    }

    pub fn chrome(&self) -> &NavChrome {
        &self.chrome
    }

    pub fn history_dot(&self) -> bool {
        self.history_dot
    }

    pub fn notification_dot(&self) -> bool {
        self.notification_dot
    }

    pub fn set_language(&mut self, language: Language) {
        if self.ctx.language() != language {
            info!(%language, "switching language");
        }
        self.ctx.set_language(language);
        self.chrome.refresh_text();
        self.refresh_view();
    }

    /// Switch the theme; the returned palette is applied by the shell.
    pub fn set_theme(&mut self, theme: Theme) -> Palette {
        self.ctx.set_theme(theme);
        theme.palette()
    }

    pub fn palette(&self) -> Palette {
        self.ctx.theme().palette()
    }

    pub fn view(&self) -> &dyn PageView {
        self.view.as_ref()
    }

    pub fn view_mut(&mut self) -> &mut dyn PageView {
        self.view.as_mut()
    }

    pub fn content(&self) -> PageContent {
        self.view.content()
    }

    pub fn handle_command(&mut self, command: &PageCommand) -> Vec<Notice> {
        let notices = self.view.handle(command);
        self.track_activity();
        notices
    }

    pub fn poll_background(&mut self) -> bool {
        let changed = self.view.poll_background();
        self.track_activity();
        changed
    }

    pub fn show_notifications(&mut self) -> Notice {
        self.notification_dot = false;
        Notice::info(
            self.chrome.label("notifications"),
            self.chrome.label("noNotifications"),
        )
    }

    fn track_activity(&mut self) {
        let total = self.ctx.activity().recorded_total();
        if self.current == Page::History {
            self.activity_seen = total;
        } else if total != self.activity_seen {
            self.history_dot = true;
            self.activity_seen = total;
        }
    }
}

impl Drop for NavigationController {
    fn drop(&mut self) {
        self.view.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::activity::MAX_EVENTS;
    use crate::app::domain::settings::ConfigStore;
    use crate::app::infrastructure::error::Result;
    use crate::app::pages::test_support::context;

    /// Builds everything except the orders page.
    struct BrokenOrders;

    impl PageFactory for BrokenOrders {
        fn build(&self, page: Page, ctx: &Rc<AppContext>) -> Result<Box<dyn PageView>> {
            if page == Page::Orders {
                return Err(AppError::PageUnavailable(page));
            }
            StandardPages.build(page, ctx)
        }
    }

    #[test]
    fn test_starts_on_home() {
        let nav = NavigationController::new(context(Language::En));
        assert_eq!(nav.current_page(), Page::Home);
        assert!(!nav.back_visible());
        assert!(nav.theme_controls_visible());
        assert_eq!(nav.content().title, "Home");
    }

    #[test]
    fn test_only_current_marker_active() {
        let mut nav = NavigationController::new(context(Language::En));
        nav.navigate_to(Page::Settings);
        assert!(nav.back_visible());
        assert!(!nav.theme_controls_visible());
        nav.navigate_to(Page::Home);
        let active: Vec<_> = Page::all().iter().filter(|p| nav.marker_active(**p)).collect();
        assert_eq!(active, vec![&Page::Home]);
    }

    #[test]
    fn test_back_goes_home() {
        let mut nav = NavigationController::new(context(Language::En));
        nav.navigate_to(Page::Orders);
        nav.navigate_to(Page::Participants);
        nav.navigate_back();
        assert_eq!(nav.current_page(), Page::Home);
    }

    #[test]
    fn test_failed_view_keeps_previous_page() {
        let ctx = context(Language::En);
        let mut nav = NavigationController::with_factory(ctx, Box::new(BrokenOrders));
        nav.navigate_to(Page::Settings);
        nav.navigate_to(Page::Orders);

        assert_eq!(nav.current_page(), Page::Settings);
        assert!(nav.marker_active(Page::Settings));
        assert!(!nav.marker_active(Page::Orders));
        assert!(
            nav.content()
                .visible_text()
                .contains(&"Page not found: orders".to_string())
        );
    }

    #[test]
    fn test_language_switch_refreshes_view_and_chrome() {
        let mut nav = NavigationController::new(context(Language::En));
        nav.navigate_to(Page::Settings);
        assert_eq!(nav.chrome().label("back"), "Back");

        nav.set_language(Language::De);
        assert_eq!(nav.content().title, "Einstellungen");
        assert_eq!(nav.chrome().label("back"), "Zurück");
        assert_eq!(nav.chrome().page_label(Page::Home), "Start");
        assert!(nav.chrome().language_active(Language::De));

        // Idempotent
        nav.set_language(Language::De);
        assert_eq!(nav.content().title, "Einstellungen");
    }

    #[test]
    fn test_preferences_survive_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        {
            let ctx = AppContext::new(ConfigStore::initialize(&path));
            let mut nav = NavigationController::new(ctx);
            nav.set_language(Language::En);
            let palette = nav.set_theme(Theme::Light);
            assert_eq!(palette, Theme::Light.palette());
        }
        let ctx = AppContext::new(ConfigStore::initialize(&path));
        let nav = NavigationController::new(ctx);
        assert!(nav.chrome().theme_active(Theme::Light));
        assert_eq!(nav.content().title, "Home");
    }

    #[test]
    fn test_history_dot_cleared_on_visit() {
        let mut nav = NavigationController::new(context(Language::En));
        nav.navigate_to(Page::Orders);
        nav.handle_command(&PageCommand::NewOrders);
        assert!(nav.history_dot());

        nav.navigate_to(Page::History);
        assert!(!nav.history_dot());
        assert_eq!(nav.content().elements.len(), 3);
    }

    #[test]
    fn test_history_dot_after_log_is_full() {
        let mut nav = NavigationController::new(context(Language::En));
        nav.navigate_to(Page::Orders);
        for _ in 0..=MAX_EVENTS {
            nav.handle_command(&PageCommand::NewOrders);
        }
        nav.navigate_to(Page::History);
        assert!(!nav.history_dot());

        nav.navigate_to(Page::Orders);
        nav.handle_command(&PageCommand::NewOrders);
        assert!(nav.history_dot());
    }

    #[test]
    fn test_back_visible_when_home_fails_to_load() {
        struct NoHome;

        impl PageFactory for NoHome {
            fn build(&self, page: Page, ctx: &Rc<AppContext>) -> Result<Box<dyn PageView>> {
                if page == Page::Home {
                    return Err(AppError::PageUnavailable(page));
                }
                StandardPages.build(page, ctx)
            }
        }

        let mut nav = NavigationController::with_factory(context(Language::En), Box::new(NoHome));
        assert_eq!(nav.current_page(), Page::Home);
        assert!(nav.back_visible());

        nav.navigate_to(Page::Settings);
        nav.navigate_to(Page::Home);
        assert_eq!(nav.current_page(), Page::Settings);
        assert!(nav.back_visible());
    }

    #[test]
    fn test_notifications() {
        let mut nav = NavigationController::new(context(Language::De));
        let notice = nav.show_notifications();
        assert_eq!(notice.title, "Mitteilungen");
        assert_eq!(notice.message, "Keine neuen Mitteilungen.");
        assert!(!nav.notification_dot());
    }

    #[test]
    fn test_transition_timing() {
        let nav = NavigationController::new(context(Language::En));
        assert_eq!(nav.transition().fade_out, Duration::from_millis(150));
        assert_eq!(nav.transition().fade_in, Duration::from_millis(300));
    }
}
