#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::sync::Arc;

use fltk::{app, enums::Event, prelude::*};
use tracing::{info, warn};

use lingua_ops::app::domain::messages::Message;
use lingua_ops::app::infrastructure::logging::{LogConfig, init_logging};
use lingua_ops::app::infrastructure::platform::app_config_dir;
use lingua_ops::app::{AppContext, AppState, ConfigStore, Dispatch};
use lingua_ops::ui::dialogs::notice::show_notice;
use lingua_ops::ui::main_window::{MainWidgets, build_main_window, update_header};
use lingua_ops::ui::page_renderer::{render_page, update_status};
use lingua_ops::ui::theme::apply_palette;
#[cfg(target_os = "windows")]
use lingua_ops::ui::theme::set_windows_titlebar_theme;

fn refresh(widgets: &mut MainWidgets, state: &AppState, sender: &app::Sender<Message>) {
    let palette = state.nav.palette();
    update_header(&mut widgets.header, &state.nav, &palette);
    widgets.rendered = render_page(
        &mut widgets.content,
        &mut widgets.title,
        &state.nav.content(),
        &palette,
        sender,
    );
}

fn apply(dispatch: Dispatch, widgets: &mut MainWidgets, state: &AppState, sender: &app::Sender<Message>) {
    if let Some(palette) = dispatch.palette {
        apply_palette(&mut widgets.wind, &palette);
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&widgets.wind, state.ctx.theme().is_dark());
    }
    if dispatch.content_changed || dispatch.palette.is_some() {
        refresh(widgets, state, sender);
    } else if dispatch.status_changed && !update_status(&mut widgets.rendered, &state.nav.content()) {
        refresh(widgets, state, sender);
    }
    let palette = state.nav.palette();
    for notice in &dispatch.notices {
        show_notice(notice, &palette);
    }
}

fn main() {
    // Release builds have no console; log to a file next to the config.
    let log_file = (!cfg!(debug_assertions)).then(|| app_config_dir().join("linguaops.log"));
    if let Err(e) = init_logging(&LogConfig::for_build().with_log_file(log_file)) {
        eprintln!("Failed to initialise logging: {e}");
    }

    let config = ConfigStore::initialize_default();
    let (width, height) = config.window_size();
    let ctx = AppContext::new(config);

    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    let (sender, receiver) = app::channel::<Message>();

    let waker_sender = sender.clone();
    ctx.set_waker(Arc::new(move || waker_sender.send(Message::BackgroundReady)));

    let mut widgets = build_main_window(width, height, &sender);
    let mut state = AppState::new(ctx);

    let close_sender = sender.clone();
    widgets.wind.set_callback(move |_| {
        if app::event() == Event::Close {
            close_sender.send(Message::WindowClose);
        }
    });

    apply_palette(&mut widgets.wind, &state.nav.palette());
    refresh(&mut widgets, &state, &sender);
    widgets.wind.show();
    #[cfg(target_os = "windows")]
    set_windows_titlebar_theme(&widgets.wind, state.ctx.theme().is_dark());
    info!("LinguaOps started");

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if msg == Message::WindowClose {
                state.remember_window_size(widgets.wind.w(), widgets.wind.h());
            }
            let dispatch = state.handle(msg);
            let quit = dispatch.quit;
            apply(dispatch, &mut widgets, &state, &sender);
            if quit {
                app.quit();
            }
        }
    }

    if let Err(e) = state.ctx.config().try_save() {
        warn!("failed to save configuration on exit: {e}");
    }
    info!("LinguaOps stopped");
}
