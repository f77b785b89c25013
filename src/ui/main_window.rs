use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

use super::page_renderer::RenderedPage;
use super::theme::rgb;
use crate::app::controllers::navigation::NavigationController;
use crate::app::domain::messages::Message;
use crate::app::domain::page::Page;
use crate::app::domain::preferences::{Language, Palette, Theme};

pub const HEADER_HEIGHT: i32 = 40;
const TITLE_HEIGHT: i32 = 44;

pub struct Header {
    pub row: Flex,
    pub back: Button,
    pub home: Button,
    pub history: Button,
    pub settings: Button,
    pub german: Button,
    pub english: Button,
    pub light: Button,
    pub dark: Button,
    pub notifications: Button,
}

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub header: Header,
    pub title: Frame,
    pub content: Flex,
    pub rendered: RenderedPage,
}

fn header_button(row: &mut Flex, width: i32, sender: &Sender<Message>, msg: Message) -> Button {
    let mut button = Button::default();
    button.set_frame(FrameType::FlatBox);
    button.set_callback({
        let sender = sender.clone();
        move |_| sender.send(msg.clone())
    });
    row.fixed(&button, width);
    button
}

fn build_header(sender: &Sender<Message>) -> Header {
    let mut row = Flex::default().row();
    row.set_margin(4);
    row.set_spacing(4);

    let back = header_button(&mut row, 80, sender, Message::NavigateBack);
    let home = header_button(&mut row, 90, sender, Message::Navigate(Page::Home));
    let history = header_button(&mut row, 90, sender, Message::Navigate(Page::History));
    let settings = header_button(&mut row, 110, sender, Message::Navigate(Page::Settings));

    // Spacer
    Frame::default();

    let german = header_button(&mut row, 40, sender, Message::SetLanguage(Language::De));
    let english = header_button(&mut row, 40, sender, Message::SetLanguage(Language::En));
    let light = header_button(&mut row, 70, sender, Message::SetTheme(Theme::Light));
    let dark = header_button(&mut row, 70, sender, Message::SetTheme(Theme::Dark));
    let notifications = header_button(&mut row, 120, sender, Message::ShowNotifications);
    row.end();

    Header {
        row,
        back,
        home,
        history,
        settings,
        german,
        english,
        light,
        dark,
        notifications,
    }
}

pub fn build_main_window(width: i32, height: i32, sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, width, height, "LinguaOps");
    wind.set_xclass("LinguaOps");

    let mut flex = Flex::new(0, 0, width, height, None);
    flex.set_type(fltk::group::FlexType::Column);

    let header = build_header(sender);
    flex.fixed(&header.row, HEADER_HEIGHT);

    let mut title = Frame::default();
    title.set_label_size(22);
    title.set_label_font(Font::HelveticaBold);
    title.set_align(Align::Left | Align::Inside);
    flex.fixed(&title, TITLE_HEIGHT);

    let mut content = Flex::default().column();
    content.set_margin(12);
    content.set_spacing(6);
    content.end();

    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        flex,
        header,
        title,
        content,
        rendered: RenderedPage::default(),
    }
}

fn mark(button: &mut Button, active: bool, palette: &Palette) {
    if active {
        button.set_color(rgb(palette.active));
        button.set_label_color(rgb(palette.background));
    } else {
        button.set_color(rgb(palette.surface));
        button.set_label_color(rgb(palette.text));
    }
}

fn with_dot(label: String, dot: bool) -> String {
    if dot { format!("{label} \u{2022}") } else { label }
}

/// Labels, visibility and active markers of the header.
pub fn update_header(header: &mut Header, nav: &NavigationController, palette: &Palette) {
    let chrome = nav.chrome();

    header.row.set_color(rgb(palette.surface));
    header.back.set_label(&chrome.label("back"));
    header.home.set_label(&chrome.label("home"));
    header
        .history
        .set_label(&with_dot(chrome.label("history"), nav.history_dot()));
    header.settings.set_label(&chrome.label("settings"));
    header.german.set_label("DE");
    header.english.set_label("EN");
    header.light.set_label(&chrome.label("light"));
    header.dark.set_label(&chrome.label("dark"));
    header
        .notifications
        .set_label(&with_dot(chrome.label("notifications"), nav.notification_dot()));

    mark(&mut header.back, false, palette);
    mark(&mut header.notifications, false, palette);
    mark(&mut header.home, nav.marker_active(Page::Home), palette);
    mark(&mut header.history, nav.marker_active(Page::History), palette);
    mark(&mut header.settings, nav.marker_active(Page::Settings), palette);
    mark(&mut header.german, chrome.language_active(Language::De), palette);
    mark(&mut header.english, chrome.language_active(Language::En), palette);
    mark(&mut header.light, chrome.theme_active(Theme::Light), palette);
    mark(&mut header.dark, chrome.theme_active(Theme::Dark), palette);

    if nav.back_visible() {
        header.back.show();
    } else {
        header.back.hide();
    }
    for button in [&mut header.light, &mut header.dark] {
        if nav.theme_controls_visible() {
            button.show();
        } else {
            button.hide();
        }
    }

    header.row.layout();
    header.row.redraw();
}
