use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, CallbackTrigger, Font},
    frame::Frame,
    group::Flex,
    input::{Input, MultilineInput},
    prelude::*,
};

use super::dialogs::prompt::prompt_text;
use super::file_dialogs::native_save_dialog;
use super::theme::rgb;
use crate::app::domain::messages::Message;
use crate::app::domain::preferences::Palette;
use crate::app::pages::{Action, Command, Element, InputField, PageContent};

const LINE_HEIGHT: i32 = 24;
const HEADING_HEIGHT: i32 = 32;
const BUTTON_HEIGHT: i32 = 32;
const MULTILINE_HEIGHT: i32 = 90;

fn text_frame(container: &mut Flex, text: &str, color: (u8, u8, u8), height: i32) -> Frame {
    let mut frame = Frame::default().with_label(text);
    frame.set_align(Align::Left | Align::Inside | Align::Clip);
    frame.set_label_color(rgb(color));
    container.fixed(&frame, height);
    frame
}

fn action_button(container: &mut Flex, action: &Action, palette: &Palette, sender: &Sender<Message>) {
    let mut row = Flex::default().row();
    let mut button = Button::default().with_label(&action.label);
    if action.active {
        button.set_color(rgb(palette.active));
        button.set_label_color(rgb(palette.background));
    } else {
        button.set_color(rgb(palette.surface));
        button.set_label_color(rgb(palette.text));
    }
    if !action.enabled {
        button.deactivate();
    }
    row.fixed(&button, 260);
    Frame::default();
    row.end();
    container.fixed(&row, BUTTON_HEIGHT);

    let sender = sender.clone();
    let command = action.command.clone();
    let palette = *palette;
    button.set_callback(move |_| match &command {
        Command::Send(msg) => sender.send(msg.clone()),
        Command::Prompt {
            title,
            label,
            initial,
            submit,
        } => {
            if let Some(value) = prompt_text(title, label, initial, &palette) {
                sender.send(submit(value));
            }
        }
        Command::SaveFile {
            title,
            file_name,
            filter,
            submit,
        } => {
            if let Some(path) = native_save_dialog(title, file_name, filter) {
                sender.send(submit(path));
            }
        }
    });
}

fn input_field(container: &mut Flex, field: &InputField, palette: &Palette, sender: &Sender<Message>) {
    text_frame(container, &field.label, palette.muted_text, LINE_HEIGHT);

    let submit = field.submit;
    let sender = sender.clone();
    // Committed on Enter or when focus leaves the field
    if field.multiline {
        let mut input = MultilineInput::default();
        input.set_value(&field.value);
        input.set_trigger(CallbackTrigger::Release);
        input.set_callback(move |i| sender.send(submit(i.value())));
        container.fixed(&input, MULTILINE_HEIGHT);
    } else {
        let mut input = Input::default();
        input.set_value(&field.value);
        input.set_trigger(CallbackTrigger::EnterKey | CallbackTrigger::Release);
        input.set_callback(move |i| sender.send(submit(i.value())));
        container.fixed(&input, BUTTON_HEIGHT);
    }
}

/// Widgets of the rendered page that can change without a rebuild.
#[derive(Default)]
pub struct RenderedPage {
    status: Vec<Frame>,
}

/// Relabel the status lines in place. Returns false when the page has a
/// different number of them and needs a full rebuild.
pub fn update_status(rendered: &mut RenderedPage, content: &PageContent) -> bool {
    let texts: Vec<&String> = content
        .elements
        .iter()
        .filter_map(|e| match e {
            Element::Status(text) => Some(text),
            _ => None,
        })
        .collect();
    if texts.len() != rendered.status.len() {
        return false;
    }
    for (frame, text) in rendered.status.iter_mut().zip(texts) {
        frame.set_label(text);
        frame.redraw();
    }
    true
}

/// Replace everything in `container` with widgets for `content`.
pub fn render_page(
    container: &mut Flex,
    title: &mut Frame,
    content: &PageContent,
    palette: &Palette,
    sender: &Sender<Message>,
) -> RenderedPage {
    let mut rendered = RenderedPage::default();
    container.clear();
    container.begin();

    title.set_label(&format!("  {}", content.title));
    title.set_label_color(rgb(palette.text));

    for element in &content.elements {
        match element {
            Element::Heading(text) => {
                let mut frame = text_frame(container, text, palette.text, HEADING_HEIGHT);
                frame.set_label_size(17);
                frame.set_label_font(Font::HelveticaBold);
            }
            Element::Text(text) => {
                text_frame(container, text, palette.text, LINE_HEIGHT);
            }
            Element::Status(text) => {
                let mut frame = text_frame(container, text, palette.accent, LINE_HEIGHT);
                frame.set_label_font(Font::HelveticaItalic);
                rendered.status.push(frame);
            }
            Element::Item(text) => {
                text_frame(container, &format!("\u{2022} {text}"), palette.text, LINE_HEIGHT);
            }
            Element::Error(text) => {
                text_frame(container, text, palette.error, LINE_HEIGHT);
            }
            Element::Action(action) => action_button(container, action, palette, sender),
            Element::Input(field) => input_field(container, field, palette, sender),
        }
    }

    // Filler
    Frame::default();

    container.end();
    container.layout();
    container.redraw();
    title.redraw();
    rendered
}
