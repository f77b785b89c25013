use std::path::PathBuf;

use super::page::Page;
use super::preferences::{Language, Theme};
use crate::app::pages::participants::ParticipantsSection;
use crate::app::pages::settings::SettingsSection;

/// All messages that can be sent through the UI channel.
/// Every button callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Header
    Navigate(Page),
    NavigateBack,
    SetLanguage(Language),
    SetTheme(Theme),
    ShowNotifications,

    // Routed to the mounted page
    Page(PageCommand),

    // Background work finished
    BackgroundReady,

    WindowClose,
}

/// Commands understood by individual pages. A page ignores the ones that
/// are not meant for it.
#[derive(Debug, Clone, PartialEq)]
pub enum PageCommand {
    // Home
    ShowNeedsAttention,

    // History
    RefreshHistory,
    ClearHistory,

    // Settings
    OpenSettingsSection(SettingsSection),
    CloseSettingsPanel,
    SetSheetUrl(String),
    SetServiceAccountEmail(String),
    SetPrivateKey(String),
    SaveGoogleSheets,
    SetOrdersWebsite(String),

    // Orders
    NewOrders,
    SearchOrders(String),
    ExportOrders(PathBuf),
    OpenWebsite,
    ConfigureWebsite(String),

    // Participants
    ToggleParticipantsSection(ParticipantsSection),
    SetOrderInput(String),
    RunParticipantsAction,
}

impl PageCommand {
    /// Commits the value of an input field. Only derived status lines
    /// change, so the shell keeps the existing widgets.
    pub fn is_field_edit(&self) -> bool {
        matches!(
            self,
            PageCommand::SetSheetUrl(_)
                | PageCommand::SetServiceAccountEmail(_)
                | PageCommand::SetPrivateKey(_)
                | PageCommand::SetOrdersWebsite(_)
                | PageCommand::SetOrderInput(_)
        )
    }
}

impl From<PageCommand> for Message {
    fn from(command: PageCommand) -> Self {
        Message::Page(command)
    }
}
