use std::rc::Rc;

use super::{Action, Element, Notice, PageContent, PageView, TextCache, TextRefresh};
use crate::app::context::AppContext;
use crate::app::domain::messages::PageCommand;
use crate::app::domain::page::Page;

static TEXTS: &[(&str, &str)] = &[
    ("history", "History"),
    ("noHistory", "No entries yet."),
    ("historyCleared", "History cleared"),
    ("refresh", "Refresh"),
    ("clearHistory", "Clear history"),
];

/// Activity of this session, newest first.
pub struct HistoryPage {
    ctx: Rc<AppContext>,
    texts: TextCache,
    entries: Vec<String>,
    cleared: bool,
}

impl HistoryPage {
    pub fn new(ctx: Rc<AppContext>) -> Self {
        let mut page = Self {
            ctx,
            texts: TextCache::new(TEXTS),
            entries: Vec::new(),
            cleared: false,
        };
        page.reload();
        page.refresh_text();
        page
    }

    fn reload(&mut self) {
        self.entries = self
            .ctx
            .activity()
            .recent()
            .iter()
            .map(|event| event.summary())
            .collect();
        self.cleared = false;
    }
}

impl TextRefresh for HistoryPage {
    fn refresh_text(&mut self) {
        self.texts.refresh(&self.ctx);
    }
}

impl PageView for HistoryPage {
    fn page(&self) -> Page {
        Page::History
    }

    fn content(&self) -> PageContent {
        let mut content = PageContent::new(self.texts.get("history"));
        if self.entries.is_empty() {
            let key = if self.cleared { "historyCleared" } else { "noHistory" };
            content.push(Element::Text(self.texts.get(key)));
        } else {
            for entry in &self.entries {
                content.push(Element::Item(entry.clone()));
            }
        }
        content
            .push(Action::send(self.texts.get("refresh"), PageCommand::RefreshHistory).into())
            .push(
                Action::send(self.texts.get("clearHistory"), PageCommand::ClearHistory)
                    .enabled(!self.entries.is_empty())
                    .into(),
            );
        content
    }

    fn text_refresh(&mut self) -> Option<&mut dyn TextRefresh> {
        Some(self)
    }

    fn handle(&mut self, command: &PageCommand) -> Vec<Notice> {
        match command {
            PageCommand::RefreshHistory => self.reload(),
            PageCommand::ClearHistory => {
                self.ctx.clear_activity();
                self.entries.clear();
                self.cleared = true;
            }
            _ => {}
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::preferences::Language;
    use crate::app::pages::test_support::context;

    #[test]
    fn test_empty_history() {
        let page = HistoryPage::new(context(Language::En));
        let content = page.content();
        assert_eq!(content.visible_text()[1], "No entries yet.");
        assert!(!content.action("Clear history").unwrap().enabled);
    }

    #[test]
    fn test_lists_recorded_activity() {
        let ctx = context(Language::En);
        ctx.record_activity("orders_export", "Exported orders CSV");
        let page = HistoryPage::new(Rc::clone(&ctx));
        let texts = page.content().visible_text();
        assert!(texts[1].ends_with("User: Exported orders CSV"));
    }

    #[test]
    fn test_refresh_picks_up_new_entries() {
        let ctx = context(Language::En);
        let mut page = HistoryPage::new(Rc::clone(&ctx));
        ctx.record_activity("orders_open", "Opened New Orders");
        page.handle(&PageCommand::RefreshHistory);
        assert!(page.content().visible_text()[1].ends_with("Opened New Orders"));
    }

    #[test]
    fn test_clear_history() {
        let ctx = context(Language::De);
        ctx.record_activity("orders_open", "Opened New Orders");
        let mut page = HistoryPage::new(Rc::clone(&ctx));
        page.handle(&PageCommand::ClearHistory);
        assert!(ctx.activity().is_empty());
        assert_eq!(page.content().visible_text()[1], "Verlauf gelöscht");
    }
}
