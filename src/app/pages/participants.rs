use std::rc::Rc;

use tracing::debug;

use super::{Action, Element, InputField, Notice, PageContent, PageView, TextCache, TextRefresh};
use crate::app::context::AppContext;
use crate::app::domain::messages::PageCommand;
use crate::app::domain::page::Page;
use crate::app::services::orders::parse_order_numbers;

static TEXTS: &[(&str, &str)] = &[
    ("manageParticipants", "Manage Participants"),
    ("registrationConfirmation", "Registration Confirmation"),
    ("participationConfirmation", "Participation Confirmation"),
    ("addressPostList", "Address Post List"),
    ("makeRegistrationConfirmation", "Make Registration Confirmation"),
    ("makeParticipationConfirmation", "Make Participation Confirmation"),
    ("makeAddressPostList", "Make Address Post List"),
    ("orderNumbers", "Order numbers"),
    ("parsed", "Parsed"),
    ("noOrderNumbers", "Please enter at least one order number."),
    ("actionQueued", "Action queued for orders:"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantsSection {
    Registration,
    Participation,
    AddressList,
}

impl ParticipantsSection {
    pub fn all() -> &'static [ParticipantsSection] {
        &[
            ParticipantsSection::Registration,
            ParticipantsSection::Participation,
            ParticipantsSection::AddressList,
        ]
    }

    pub fn title_key(self) -> &'static str {
        match self {
            ParticipantsSection::Registration => "registrationConfirmation",
            ParticipantsSection::Participation => "participationConfirmation",
            ParticipantsSection::AddressList => "addressPostList",
        }
    }

    fn action_key(self) -> &'static str {
        match self {
            ParticipantsSection::Registration => "makeRegistrationConfirmation",
            ParticipantsSection::Participation => "makeParticipationConfirmation",
            ParticipantsSection::AddressList => "makeAddressPostList",
        }
    }

    fn activity_kind(self) -> &'static str {
        match self {
            ParticipantsSection::Registration => "participants_registration",
            ParticipantsSection::Participation => "participants_participation",
            ParticipantsSection::AddressList => "participants_address_list",
        }
    }
}

/// Participant documents generated from a list of order numbers.
pub struct ParticipantsPage {
    ctx: Rc<AppContext>,
    texts: TextCache,
    open: Option<ParticipantsSection>,
    input: String,
    order_numbers: Vec<String>,
}

impl ParticipantsPage {
    pub fn new(ctx: Rc<AppContext>) -> Self {
        let mut page = Self {
            ctx,
            texts: TextCache::new(TEXTS),
            open: None,
            input: String::new(),
            order_numbers: Vec::new(),
        };
        page.refresh_text();
        page
    }

    pub fn open_section(&self) -> Option<ParticipantsSection> {
        self.open
    }

    pub fn order_numbers(&self) -> &[String] {
        &self.order_numbers
    }

    fn toggle(&mut self, section: ParticipantsSection) {
        self.open = if self.open == Some(section) {
            None
        } else {
            Some(section)
        };
    }

    fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.order_numbers = parse_order_numbers(text);
        debug!(count = self.order_numbers.len(), "order numbers parsed");
    }

    fn run(&mut self) -> Vec<Notice> {
        let Some(section) = self.open else {
            return Vec::new();
        };
        let title = self.texts.get(section.action_key());
        if self.order_numbers.is_empty() {
            return vec![Notice::warning(title, self.texts.get("noOrderNumbers"))];
        }
        let ids = self.order_numbers.join(", ");
        self.ctx
            .record_activity(section.activity_kind(), format!("{title}: {ids}"));
        vec![Notice::info(title, format!("{} {ids}", self.texts.get("actionQueued")))]
    }
}

impl TextRefresh for ParticipantsPage {
    fn refresh_text(&mut self) {
        self.texts.refresh(&self.ctx);
    }
}

impl PageView for ParticipantsPage {
    fn page(&self) -> Page {
        Page::Participants
    }

    fn content(&self) -> PageContent {
        let mut content = PageContent::new(self.texts.get("manageParticipants"));
        for section in ParticipantsSection::all() {
            content.push(
                Action::send(
                    self.texts.get(section.title_key()),
                    PageCommand::ToggleParticipantsSection(*section),
                )
                .active(self.open == Some(*section))
                .into(),
            );
        }

        if let Some(section) = self.open {
            content
                .push(Element::Heading(self.texts.get(section.title_key())))
                .push(
                    InputField {
                        label: self.texts.get("orderNumbers"),
                        value: self.input.clone(),
                        multiline: true,
                        submit: |text| PageCommand::SetOrderInput(text).into(),
                    }
                    .into(),
                )
                .push(Element::Status(format!(
                    "{}: {}",
                    self.texts.get("parsed"),
                    self.order_numbers.len()
                )))
                .push(
                    Action::send(self.texts.get(section.action_key()), PageCommand::RunParticipantsAction)
                        .into(),
                );
        }
        content
    }

    fn text_refresh(&mut self) -> Option<&mut dyn TextRefresh> {
        Some(self)
    }

    fn handle(&mut self, command: &PageCommand) -> Vec<Notice> {
        match command {
            PageCommand::ToggleParticipantsSection(section) => self.toggle(*section),
            PageCommand::SetOrderInput(text) => self.set_input(text),
            PageCommand::RunParticipantsAction => return self.run(),
            _ => {}
        }
        Vec::new()
    }
}
