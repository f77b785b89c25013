use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    button::Button,
    enums::CallbackTrigger,
    frame::Frame,
    group::Flex,
    input::Input,
    prelude::*,
    window::Window,
};

use super::run_dialog;
use crate::app::domain::preferences::Palette;
use crate::ui::theme::rgb;

/// Ask for one line of text. `None` when cancelled or left blank.
pub fn prompt_text(title: &str, label: &str, initial: &str, palette: &Palette) -> Option<String> {
    let mut dialog = Window::default()
        .with_size(440, 150)
        .with_label(title)
        .center_screen();
    dialog.make_modal(true);
    dialog.set_color(rgb(palette.surface));

    let mut flex = Flex::new(10, 10, 420, 130, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(8);

    let mut prompt = Frame::default().with_label(label);
    prompt.set_label_color(rgb(palette.text));
    flex.fixed(&prompt, 25);

    let mut input = Input::default();
    input.set_value(initial);
    flex.fixed(&input, 30);

    Frame::default();

    let mut button_row = Flex::default().row();
    Frame::default();
    let mut ok_btn = Button::default().with_label("OK");
    let mut cancel_btn = Button::default().with_label("Cancel");
    button_row.fixed(&ok_btn, 80);
    button_row.fixed(&cancel_btn, 80);
    button_row.end();
    flex.fixed(&button_row, 30);

    flex.end();
    dialog.end();
    dialog.show();
    let _ = input.take_focus();

    let result = Rc::new(RefCell::new(None));

    let result_ok = Rc::clone(&result);
    let input_ok = input.clone();
    let dialog_ok = dialog.clone();
    ok_btn.set_callback(move |_| {
        let value = input_ok.value();
        if !value.trim().is_empty() {
            *result_ok.borrow_mut() = Some(value);
        }
        dialog_ok.clone().hide();
    });

    // Enter key on input triggers OK
    let mut ok_btn2 = ok_btn.clone();
    input.set_trigger(CallbackTrigger::EnterKey);
    input.set_callback(move |_| {
        ok_btn2.do_callback();
    });

    let dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| {
        dialog_cancel.clone().hide();
    });

    run_dialog(&dialog);
    result.borrow_mut().take()
}
