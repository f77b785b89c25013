use super::{Element, PageContent, PageView};
use crate::app::domain::page::Page;

/// Inert stand-in mounted when a page could not be built.
pub struct ErrorPage {
    page: Page,
    reason: String,
}

impl ErrorPage {
    pub fn new(page: Page, reason: impl Into<String>) -> Self {
        Self {
            page,
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl PageView for ErrorPage {
    /// The page the user tried to open.
    fn page(&self) -> Page {
        self.page
    }

    fn content(&self) -> PageContent {
        let mut content = PageContent::new(self.page.as_str());
        content.push(Element::Error(format!("Page not found: {}", self.page)));
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_page_is_inert() {
        let mut page = ErrorPage::new(Page::Orders, "missing layout");
        assert!(page.text_refresh().is_none());
        assert_eq!(page.reason(), "missing layout");
        let texts = page.content().visible_text();
        assert_eq!(texts, vec!["orders", "Page not found: orders"]);
    }
}
