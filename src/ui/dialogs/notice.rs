use fltk::{
    button::Button,
    enums::{Align, Color, Font},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

use super::run_dialog;
use crate::app::domain::preferences::Palette;
use crate::app::pages::{Notice, NoticeLevel};
use crate::ui::theme::rgb;

/// Modal acknowledgement dialog for a page notice.
pub fn show_notice(notice: &Notice, palette: &Palette) {
    let mut dialog = Window::default()
        .with_size(420, 180)
        .with_label(&notice.title)
        .center_screen();
    dialog.make_modal(true);
    dialog.set_color(rgb(palette.surface));

    let mut flex = Flex::new(10, 10, 400, 160, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(10);

    let mut title = Frame::default().with_label(&notice.title);
    title.set_label_size(16);
    title.set_label_font(Font::HelveticaBold);
    title.set_label_color(match notice.level {
        NoticeLevel::Info => rgb(palette.text),
        NoticeLevel::Warning => rgb(palette.accent),
        NoticeLevel::Error => rgb(palette.error),
    });
    flex.fixed(&title, 30);

    let mut message = Frame::default().with_label(&notice.message);
    message.set_label_size(13);
    message.set_label_color(rgb(palette.text));
    message.set_align(Align::Center | Align::Inside | Align::Wrap);

    let mut button_row = Flex::default().row();
    Frame::default();
    let mut ok_btn = Button::default().with_label("OK");
    ok_btn.set_color(rgb(palette.accent));
    ok_btn.set_label_color(Color::White);
    button_row.fixed(&ok_btn, 90);
    button_row.end();
    flex.fixed(&button_row, 32);

    flex.end();
    dialog.end();
    dialog.show();

    let dialog_ok = dialog.clone();
    ok_btn.set_callback(move |_| {
        dialog_ok.clone().hide();
    });

    run_dialog(&dialog);
}
