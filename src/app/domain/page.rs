use std::fmt;
use std::str::FromStr;

use crate::app::infrastructure::error::AppError;

/// Every navigable content view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Page {
    Home,
    History,
    Settings,
    Orders,
    Telc,
    Participants,
    Exams,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::History => "history",
            Self::Settings => "settings",
            Self::Orders => "orders",
            Self::Telc => "telc",
            Self::Participants => "participants",
            Self::Exams => "exams",
        }
    }

    /// Translation key of the page's navigation caption.
    pub fn title_key(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::History => "history",
            Self::Settings => "settings",
            Self::Orders => "orders",
            Self::Telc => "telcArea",
            Self::Participants => "manageParticipants",
            Self::Exams => "exams",
        }
    }

    pub fn all() -> &'static [Page] {
        &[
            Self::Home,
            Self::History,
            Self::Settings,
            Self::Orders,
            Self::Telc,
            Self::Participants,
            Self::Exams,
        ]
    }

    /// Pages reachable from the header bar; the rest live in the home sidebar.
    pub fn header_pages() -> &'static [Page] {
        &[Self::Home, Self::History, Self::Settings]
    }

    pub fn sidebar_pages() -> &'static [Page] {
        &[Self::Telc, Self::Orders, Self::Participants, Self::Exams]
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| AppError::InvalidSetting {
                key: "page".to_string(),
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_pages() {
        for page in Page::all() {
            assert_eq!(page.as_str().parse::<Page>().unwrap(), *page);
        }
    }

    #[test]
    fn test_parse_unknown_page() {
        assert!("dashboard".parse::<Page>().is_err());
    }

    #[test]
    fn test_header_and_sidebar_cover_all_pages() {
        let mut pages: Vec<Page> = Page::header_pages()
            .iter()
            .chain(Page::sidebar_pages())
            .copied()
            .collect();
        pages.sort();
        let mut all = Page::all().to_vec();
        all.sort();
        assert_eq!(pages, all);
    }
}
