use std::rc::Rc;

use super::{Action, Element, Notice, PageContent, PageView, TextCache, TextRefresh};
use crate::app::context::AppContext;
use crate::app::domain::messages::{Message, PageCommand};
use crate::app::domain::page::Page;

static TEXTS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("telcArea", "Telc Area"),
    ("orders", "Orders"),
    ("manageParticipants", "Manage Participants"),
    ("exams", "Exams"),
    ("needsAttention", "Needs Attention"),
    ("needsAttentionEmpty", "Nothing needs your attention right now."),
    ("heroTitle", "inlingua®"),
    ("heroSubtitle", "... to be able to speak with the world."),
];

/// Landing page: hero text plus the sidebar into the work areas.
pub struct HomePage {
    ctx: Rc<AppContext>,
    texts: TextCache,
}

impl HomePage {
    pub fn new(ctx: Rc<AppContext>) -> Self {
        let mut page = Self {
            ctx,
            texts: TextCache::new(TEXTS),
        };
        page.refresh_text();
        page
    }
}

impl TextRefresh for HomePage {
    fn refresh_text(&mut self) {
        self.texts.refresh(&self.ctx);
    }
}

impl PageView for HomePage {
    fn page(&self) -> Page {
        Page::Home
    }

    fn content(&self) -> PageContent {
        let mut content = PageContent::new(self.texts.get("home"));
        content
            .push(Element::Heading(self.texts.get("heroTitle")))
            .push(Element::Text(self.texts.get("heroSubtitle")));

        for page in Page::sidebar_pages() {
            content.push(Action::send(self.texts.get(page.title_key()), Message::Navigate(*page)).into());
        }
        content.push(Action::send(self.texts.get("needsAttention"), PageCommand::ShowNeedsAttention).into());
        content
    }

    fn text_refresh(&mut self) -> Option<&mut dyn TextRefresh> {
        Some(self)
    }

    fn handle(&mut self, command: &PageCommand) -> Vec<Notice> {
        match command {
            PageCommand::ShowNeedsAttention => vec![Notice::info(
                self.texts.get("needsAttention"),
                self.texts.get("needsAttentionEmpty"),
            )],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::preferences::Language;
    use crate::app::pages::Command;
    use crate::app::pages::test_support::context;

    #[test]
    fn test_sidebar_navigates() {
        let page = HomePage::new(context(Language::En));
        let content = page.content();
        let orders = content.action("Orders").unwrap();
        assert!(matches!(orders.command, Command::Send(Message::Navigate(Page::Orders))));
        assert!(content.action("Manage Participants").is_some());
        assert!(content.action("Telc Area").is_some());
    }

    #[test]
    fn test_refresh_follows_language() {
        let ctx = context(Language::En);
        let mut page = HomePage::new(Rc::clone(&ctx));
        assert_eq!(page.content().title, "Home");

        ctx.set_language(Language::De);
        // Pull model: nothing changes until the page is asked to refresh
        assert_eq!(page.content().title, "Home");
        page.refresh_text();
        assert_eq!(page.content().title, "Start");
        assert!(page.content().action("Prüfungen").is_some());
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let mut page = HomePage::new(context(Language::De));
        page.refresh_text();
        let first = page.content().visible_text();
        page.refresh_text();
        assert_eq!(first, page.content().visible_text());
    }

    #[test]
    fn test_needs_attention_notice() {
        let mut page = HomePage::new(context(Language::En));
        let notices = page.handle(&PageCommand::ShowNeedsAttention);
        assert_eq!(notices, vec![Notice::info("Needs Attention", "Nothing needs your attention right now.")]);
        assert!(page.handle(&PageCommand::ClearHistory).is_empty());
    }
}
