use fltk::{app, enums::Color, prelude::*, window::Window};

use crate::app::domain::preferences::{Palette, Rgb};

pub fn rgb((r, g, b): Rgb) -> Color {
    Color::from_rgb(r, g, b)
}

/// Set the global scheme colors and repaint the window. Widgets created
/// afterwards pick the palette up when the content is rebuilt.
pub fn apply_palette(window: &mut Window, palette: &Palette) {
    let (r, g, b) = palette.background;
    app::background(r, g, b);
    let (r, g, b) = palette.surface;
    app::background2(r, g, b);
    let (r, g, b) = palette.text;
    app::foreground(r, g, b);
    app::set_selection_color(palette.accent.0, palette.accent.1, palette.accent.2);

    window.set_color(rgb(palette.background));
    window.set_label_color(rgb(palette.text));
    window.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DWMWINDOWATTRIBUTE, DwmSetWindowAttribute};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        let on: i32 = if is_dark { 1 } else { 0 };

        // Attribute 20 on Windows 11 / Windows 10 2004+, 19 on 1809-1903
        for attribute in [20, 19] {
            let _ = DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attribute),
                from_ref(&on).cast(),
                size_of::<i32>() as u32,
            );
        }
    }
}
