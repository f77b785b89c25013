use std::rc::Rc;

use super::{Element, PageContent, PageView, TextCache, TextRefresh};
use crate::app::context::AppContext;
use crate::app::domain::page::Page;

static TELC_TEXTS: &[(&str, &str)] = &[
    ("telcArea", "Telc Area"),
    ("telcPlaceholder", "Telc area functionality coming soon."),
];

static EXAMS_TEXTS: &[(&str, &str)] = &[
    ("exams", "Exams"),
    ("examsPlaceholder", "Exam management coming soon."),
];

/// Title plus a "coming soon" line. Used for telc and exams.
pub struct PlaceholderPage {
    ctx: Rc<AppContext>,
    page: Page,
    title_key: &'static str,
    body_key: &'static str,
    texts: TextCache,
}

impl PlaceholderPage {
    pub fn telc(ctx: Rc<AppContext>) -> Self {
        Self::new(ctx, Page::Telc, "telcArea", "telcPlaceholder", TELC_TEXTS)
    }

    pub fn exams(ctx: Rc<AppContext>) -> Self {
        Self::new(ctx, Page::Exams, "exams", "examsPlaceholder", EXAMS_TEXTS)
    }

    fn new(
        ctx: Rc<AppContext>,
        page: Page,
        title_key: &'static str,
        body_key: &'static str,
        entries: &'static [(&'static str, &'static str)],
    ) -> Self {
        let mut view = Self {
            ctx,
            page,
            title_key,
            body_key,
            texts: TextCache::new(entries),
        };
        view.refresh_text();
        view
    }
}

impl TextRefresh for PlaceholderPage {
    fn refresh_text(&mut self) {
        self.texts.refresh(&self.ctx);
    }
}

impl PageView for PlaceholderPage {
    fn page(&self) -> Page {
        self.page
    }

    fn content(&self) -> PageContent {
        let mut content = PageContent::new(self.texts.get(self.title_key));
        content.push(Element::Text(self.texts.get(self.body_key)));
        content
    }

    fn text_refresh(&mut self) -> Option<&mut dyn TextRefresh> {
        Some(self)
    }
}
