use std::path::Path;
use std::rc::Rc;

use chrono::Local;
use tracing::{debug, warn};

use super::{Action, Command, Element, Notice, PageContent, PageView, TextCache, TextRefresh};
use crate::app::context::AppContext;
use crate::app::domain::messages::PageCommand;
use crate::app::domain::page::Page;
use crate::app::infrastructure::error::AppError;
use crate::app::infrastructure::platform::open_in_browser;
use crate::app::services::orders::{OrderSummary, export_file_name, export_orders, sample_orders};
use crate::app::services::search::{SearchOutcome, SearchRunner};

static TEXTS: &[(&str, &str)] = &[
    ("orders", "Orders"),
    ("newOrders", "New Orders"),
    ("searchOrders", "Search Orders"),
    ("export", "Export"),
    ("openWebsite", "Open Website"),
    ("newOrdersReady", "Ready to create or fetch new orders."),
    ("searchPrompt", "Search orders by ID or keyword:"),
    ("searching", "Searching..."),
    ("searchCompleted", "Search completed"),
    ("searchFailed", "Search failed"),
    ("searchResults", "Search Results"),
    ("noResultsFound", "No Results Found"),
    ("exportOrders", "Export Orders"),
    ("exportComplete", "Export Complete"),
    ("exportSucceeded", "Orders exported successfully to"),
    ("exportFailed", "Export Failed"),
    ("websitePrompt", "No website URL configured. Enter website URL:"),
    ("websiteFailed", "Failed to Open Website"),
];

#[derive(Debug, Clone, PartialEq)]
enum Status {
    Idle,
    Ready,
    Searching(String),
    Completed,
    Failed,
}

/// Orders work area: new orders, search, CSV export, shop website.
pub struct OrdersPage {
    ctx: Rc<AppContext>,
    texts: TextCache,
    status: Status,
    results: Option<Vec<OrderSummary>>,
    search: SearchRunner,
}

impl OrdersPage {
    pub fn new(ctx: Rc<AppContext>) -> Self {
        let search = ctx.search_runner();
        let mut page = Self {
            ctx,
            texts: TextCache::new(TEXTS),
            status: Status::Idle,
            results: None,
            search,
        };
        page.refresh_text();
        page
    }

    fn has_orders_data(&self) -> bool {
        !sample_orders().is_empty()
    }

    fn website_action(&self) -> Action {
        let label = self.texts.get("openWebsite");
        if self.ctx.config().orders_website_url().trim().is_empty() {
            Action::new(
                label.clone(),
                Command::Prompt {
                    title: label,
                    label: self.texts.get("websitePrompt"),
                    initial: String::new(),
                    submit: |url| PageCommand::ConfigureWebsite(url).into(),
                },
            )
        } else {
            Action::send(label, PageCommand::OpenWebsite)
        }
    }

    fn status_text(&self) -> Option<String> {
        match &self.status {
            Status::Idle => None,
            Status::Ready => Some(self.texts.get("newOrdersReady")),
            Status::Searching(term) => Some(format!("{} {}", self.texts.get("searching"), term)),
            Status::Completed => Some(self.texts.get("searchCompleted")),
            Status::Failed => Some(self.texts.get("searchFailed")),
        }
    }

    fn new_orders(&mut self) -> Vec<Notice> {
        self.status = Status::Ready;
        self.ctx.record_activity("orders_open", "Opened New Orders");
        vec![Notice::info(self.texts.get("newOrders"), self.texts.get("newOrdersReady"))]
    }

    fn start_search(&mut self, term: &str) {
        let term = term.trim();
        if term.is_empty() {
            return;
        }
        self.status = Status::Searching(term.to_string());
        self.results = None;
        self.search.start(term);
        self.ctx.record_activity("orders_search", format!("Searched orders: {term}"));
    }

    fn export(&mut self, path: &Path) -> Vec<Notice> {
        match export_orders(path, &sample_orders()) {
            Ok(()) => {
                self.ctx.record_activity("orders_export", "Exported orders CSV");
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                vec![Notice::info(
                    self.texts.get("exportComplete"),
                    format!("{} {}", self.texts.get("exportSucceeded"), file_name),
                )]
            }
            Err(e) => {
                warn!(path = %path.display(), "failed to export orders: {e}");
                vec![Notice::error(
                    self.texts.get("exportFailed"),
                    format!("{}: {e}", self.texts.get("exportFailed")),
                )]
            }
        }
    }

    fn configure_website(&mut self, url: &str) -> Vec<Notice> {
        let url = url.trim();
        if url.is_empty() {
            return Vec::new();
        }
        {
            let mut config = self.ctx.config_mut();
            config.set_orders_website_url(url);
            config.save();
        }
        open_orders_website(&self.ctx, &self.texts.get("openWebsite"), &self.texts.get("websiteFailed"))
    }
}

/// Open the configured shop website. Failures come back as notices.
pub(crate) fn open_orders_website(ctx: &AppContext, title: &str, failure_title: &str) -> Vec<Notice> {
    let url = ctx.config().orders_website_url();
    match open_in_browser(&url) {
        Ok(()) => {
            ctx.record_activity("orders_open_website", format!("Opened website: {url}"));
            Vec::new()
        }
        Err(AppError::WebsiteNotConfigured) => {
            vec![Notice::warning(title, AppError::WebsiteNotConfigured.to_string())]
        }
        Err(e) => {
            warn!("failed to open website: {e}");
            vec![Notice::error(failure_title, e.to_string())]
        }
    }
}

impl TextRefresh for OrdersPage {
    fn refresh_text(&mut self) {
        self.texts.refresh(&self.ctx);
    }
}

impl PageView for OrdersPage {
    fn page(&self) -> Page {
        Page::Orders
    }

    fn content(&self) -> PageContent {
        let mut content = PageContent::new(self.texts.get("orders"));
        let search_label = self.texts.get("searchOrders");

        content
            .push(Action::send(self.texts.get("newOrders"), PageCommand::NewOrders).into())
            .push(
                Action::new(
                    search_label.clone(),
                    Command::Prompt {
                        title: search_label,
                        label: self.texts.get("searchPrompt"),
                        initial: String::new(),
                        submit: |term| PageCommand::SearchOrders(term).into(),
                    },
                )
                .into(),
            )
            .push(
                Action::new(
                    self.texts.get("export"),
                    Command::SaveFile {
                        title: self.texts.get("exportOrders"),
                        file_name: export_file_name(Local::now().date_naive()),
                        filter: "CSV Files\t*.csv".to_string(),
                        submit: |path| PageCommand::ExportOrders(path).into(),
                    },
                )
                .enabled(self.has_orders_data())
                .into(),
            )
            .push(self.website_action().into());

        if let Some(status) = self.status_text() {
            content.push(Element::Status(status));
        }

        if let Some(results) = &self.results {
            content.push(Element::Heading(self.texts.get("searchResults")));
            if results.is_empty() {
                content.push(Element::Text(self.texts.get("noResultsFound")));
            }
            for order in results {
                content.push(Element::Item(order.label()));
            }
        }
        content
    }

    fn text_refresh(&mut self) -> Option<&mut dyn TextRefresh> {
        Some(self)
    }

    fn handle(&mut self, command: &PageCommand) -> Vec<Notice> {
        match command {
            PageCommand::NewOrders => self.new_orders(),
            PageCommand::SearchOrders(term) => {
                self.start_search(term);
                Vec::new()
            }
            PageCommand::ExportOrders(path) => self.export(path),
            PageCommand::OpenWebsite => open_orders_website(
                &self.ctx,
                &self.texts.get("openWebsite"),
                &self.texts.get("websiteFailed"),
            ),
            PageCommand::ConfigureWebsite(url) => self.configure_website(url),
            _ => Vec::new(),
        }
    }

    fn poll_background(&mut self) -> bool {
        match self.search.poll() {
            Some(SearchOutcome::Completed { term, results }) => {
                debug!(%term, count = results.len(), "search completed");
                self.status = Status::Completed;
                self.results = Some(results);
                true
            }
            Some(SearchOutcome::Failed { term, error }) => {
                warn!(%term, "search failed: {error}");
                self.status = Status::Failed;
                true
            }
            None => false,
        }
    }

    fn unmount(&mut self) {
        self.search.cancel();
    }
}
