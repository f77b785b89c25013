use std::rc::Rc;

use tracing::{debug, info};

use super::context::AppContext;
use super::controllers::navigation::NavigationController;
use super::domain::messages::Message;
use super::domain::preferences::Palette;
use super::pages::Notice;

/// What the shell has to do after a message was handled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dispatch {
    pub notices: Vec<Notice>,
    /// New palette to apply to the whole widget tree.
    pub palette: Option<Palette>,
    /// Page content or header labels changed and must be rebuilt.
    pub content_changed: bool,
    /// Only status lines changed; widgets stay in place.
    pub status_changed: bool,
    pub quit: bool,
}

impl Dispatch {
    fn redraw() -> Self {
        Self {
            content_changed: true,
            ..Self::default()
        }
    }
}

/// Main application coordinator. Every message from the UI channel goes
/// through [`AppState::handle`] on the UI thread.
pub struct AppState {
    pub ctx: Rc<AppContext>,
    pub nav: NavigationController,
}

impl AppState {
    pub fn new(ctx: Rc<AppContext>) -> Self {
        let nav = NavigationController::new(Rc::clone(&ctx));
        Self { ctx, nav }
    }

    pub fn with_navigation(ctx: Rc<AppContext>, nav: NavigationController) -> Self {
        Self { ctx, nav }
    }

    pub fn handle(&mut self, msg: Message) -> Dispatch {
        match msg {
            Message::Navigate(page) => {
                self.nav.navigate_to(page);
                Dispatch::redraw()
            }
            Message::NavigateBack => {
                self.nav.navigate_back();
                Dispatch::redraw()
            }
            Message::SetLanguage(language) => {
                self.nav.set_language(language);
                Dispatch::redraw()
            }
            Message::SetTheme(theme) => {
                let palette = self.nav.set_theme(theme);
                Dispatch {
                    palette: Some(palette),
                    ..Dispatch::redraw()
                }
            }
            Message::ShowNotifications => Dispatch {
                notices: vec![self.nav.show_notifications()],
                ..Dispatch::redraw()
            },
            Message::Page(command) => {
                debug!(?command, page = %self.nav.current_page(), "page command");
                let notices = self.nav.handle_command(&command);
                if command.is_field_edit() && notices.is_empty() {
                    Dispatch {
                        notices,
                        status_changed: true,
                        ..Dispatch::default()
                    }
                } else {
                    Dispatch {
                        notices,
                        ..Dispatch::redraw()
                    }
                }
            }
            Message::BackgroundReady => Dispatch {
                content_changed: self.nav.poll_background(),
                ..Dispatch::default()
            },
            Message::WindowClose => {
                info!("closing window");
                self.ctx.config().save();
                Dispatch {
                    quit: true,
                    ..Dispatch::default()
                }
            }
        }
    }

    /// Remember the window geometry for the next start.
    pub fn remember_window_size(&self, width: i32, height: i32) {
        self.ctx.config_mut().set_window_size(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::messages::PageCommand;
    use crate::app::domain::page::Page;
    use crate::app::domain::preferences::{Language, Theme};
    use crate::app::domain::settings::ConfigStore;
    use crate::app::pages::test_support::context;
    use std::time::{Duration, Instant};

    #[test]
    fn test_navigation_messages() {
        let mut state = AppState::new(context(Language::En));
        let dispatch = state.handle(Message::Navigate(Page::Orders));
        assert!(dispatch.content_changed);
        assert_eq!(state.nav.current_page(), Page::Orders);

        state.handle(Message::NavigateBack);
        assert_eq!(state.nav.current_page(), Page::Home);
    }

    #[test]
    fn test_theme_message_returns_palette() {
        let mut state = AppState::new(context(Language::En));
        let dispatch = state.handle(Message::SetTheme(Theme::Light));
        assert_eq!(dispatch.palette, Some(Theme::Light.palette()));
        assert_eq!(state.ctx.theme(), Theme::Light);
    }

    #[test]
    fn test_page_command_notices() {
        let mut state = AppState::new(context(Language::En));
        let dispatch = state.handle(PageCommand::ShowNeedsAttention.into());
        assert_eq!(dispatch.notices.len(), 1);
        assert!(!dispatch.quit);
    }

    #[test]
    fn test_field_edit_keeps_widgets() {
        let mut state = AppState::new(context(Language::En));
        state.handle(Message::Navigate(Page::Participants));
        state.handle(
            PageCommand::ToggleParticipantsSection(
                crate::app::pages::participants::ParticipantsSection::Registration,
            )
            .into(),
        );

        let dispatch = state.handle(PageCommand::SetOrderInput("1001 1002".into()).into());
        assert!(!dispatch.content_changed);
        assert!(dispatch.status_changed);
        assert!(state.nav.content().visible_text().contains(&"Parsed: 2".to_string()));

        // The run action still goes through after the edit
        let dispatch = state.handle(PageCommand::RunParticipantsAction.into());
        assert!(dispatch.content_changed);
        assert_eq!(dispatch.notices.len(), 1);
    }

    #[test]
    fn test_settings_edits_do_not_rebuild() {
        let mut state = AppState::new(context(Language::En));
        state.handle(Message::Navigate(Page::Settings));
        for command in [
            PageCommand::SetSheetUrl("https://docs.google.com/sheet".into()),
            PageCommand::SetServiceAccountEmail("bot@example.com".into()),
            PageCommand::SetOrdersWebsite("shop.example.com".into()),
        ] {
            assert!(!state.handle(command.into()).content_changed);
        }
        assert_eq!(state.ctx.config().orders_website_url(), "shop.example.com");
    }

    #[test]
    fn test_command_for_other_page_is_ignored() {
        let mut state = AppState::new(context(Language::En));
        let dispatch = state.handle(PageCommand::ClearHistory.into());
        assert!(dispatch.notices.is_empty());
        assert_eq!(state.nav.current_page(), Page::Home);
    }

    #[test]
    fn test_background_search_round_trip() {
        let ctx = context(Language::En);
        ctx.set_search_delay(Duration::ZERO);
        let mut state = AppState::new(ctx);
        state.handle(Message::Navigate(Page::Orders));
        state.handle(PageCommand::SearchOrders("1001".into()).into());

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut changed = false;
        while !changed && Instant::now() < deadline {
            changed = state.handle(Message::BackgroundReady).content_changed;
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(changed);
        assert!(
            state
                .nav
                .content()
                .visible_text()
                .contains(&"Order 1001 - Customer 1".to_string())
        );
    }

    #[test]
    fn test_close_saves_window_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut state = AppState::new(AppContext::new(ConfigStore::initialize(&path)));
        state.remember_window_size(1440, 900);
        assert!(state.handle(Message::WindowClose).quit);

        let reloaded = ConfigStore::initialize(&path);
        assert_eq!(reloaded.window_size(), (1440, 900));
    }
}
