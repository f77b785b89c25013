use std::path::PathBuf;

use fltk::dialog::{FileDialogOptions, FileDialogType, NativeFileChooser};

/// Native save dialog preset with `file_name`. `filter` uses the
/// "Description\t*.ext" form.
pub fn native_save_dialog(title: &str, file_name: &str, filter: &str) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    nfc.set_title(title);
    nfc.set_filter(filter);
    nfc.set_preset_file(file_name);
    nfc.set_option(FileDialogOptions::SaveAsConfirm);
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        None
    } else {
        Some(filename)
    }
}
