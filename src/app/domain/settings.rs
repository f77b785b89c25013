use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, error, info, warn};

use super::preferences::{Language, Theme};
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::platform::app_config_dir;

pub const CONFIG_FILE: &str = "config.json";

/// Keys of the settings document. Names match the persisted JSON.
pub mod keys {
    pub const LANGUAGE: &str = "language";
    pub const THEME: &str = "theme";
    pub const WINDOW_WIDTH: &str = "windowWidth";
    pub const WINDOW_HEIGHT: &str = "windowHeight";
    pub const API_BASE_URL: &str = "apiBaseUrl";
    pub const ORDERS_WEBSITE_URL: &str = "ordersWebsiteUrl";
    pub const CURRENT_USER_NAME: &str = "currentUserName";
    pub const SHEET_URL: &str = "telcSheetUrl";
    pub const SERVICE_ACCOUNT_EMAIL: &str = "telcSaEmail";
}

const DEFAULT_WINDOW_WIDTH: i32 = 1200;
const DEFAULT_WINDOW_HEIGHT: i32 = 800;
const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_USER_NAME: &str = "User";

/// Scalar types the store can hand out. A stored value of another type
/// reads as `None`, so the caller's default wins.
pub trait SettingValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
    fn into_value(self) -> Value;
}

impl SettingValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }

    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl SettingValue for i64 {
    fn from_value(value: &Value) -> Option<Self> {
        value
            .as_i64()
            .or_else(|| value.as_f64().map(|f| f as i64))
    }

    fn into_value(self) -> Value {
        Value::from(self)
    }
}

impl SettingValue for i32 {
    fn from_value(value: &Value) -> Option<Self> {
        i64::from_value(value).and_then(|v| i32::try_from(v).ok())
    }

    fn into_value(self) -> Value {
        Value::from(self)
    }
}

impl SettingValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

/// Flat key-value settings document persisted as pretty JSON.
///
/// Setters only touch memory; [`ConfigStore::save`] rewrites the whole file.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigStore {
    path: Option<PathBuf>,
    values: Map<String, Value>,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl ConfigStore {
    /// Defaults only, never written anywhere.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            values: default_values(),
        }
    }

    /// Get config file path (cross-platform)
    pub fn default_path() -> PathBuf {
        app_config_dir().join(CONFIG_FILE)
    }

    /// Load the document at the per-user default path.
    pub fn initialize_default() -> Self {
        Self::initialize(Self::default_path())
    }

    /// Load the document at `path`. A missing or corrupt document is replaced
    /// by the defaults, which are written back. Filesystem errors leave the
    /// store usable in memory.
    pub fn initialize(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut store = Self {
            path: Some(path.clone()),
            values: default_values(),
        };

        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!(dir = %parent.display(), "cannot create config directory: {e}. Using defaults.");
                return store;
            }
        }

        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Map<String, Value>>(&contents) {
                Ok(values) => {
                    store.values = values;
                    debug!(path = %path.display(), "configuration loaded");
                }
                Err(e) => {
                    warn!(path = %path.display(), "failed to parse settings: {e}. Using defaults.");
                    store.save();
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings found, writing defaults");
                store.save();
            }
            Err(e) => {
                warn!(path = %path.display(), "cannot read settings: {e}. Using defaults.");
            }
        }

        info!("configuration store initialized");
        store
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn reset_to_defaults(&mut self) {
        self.values = default_values();
        debug!("default configuration restored");
    }

    pub fn get<T: SettingValue>(&self, key: &str, default: T) -> T {
        self.values
            .get(key)
            .and_then(T::from_value)
            .unwrap_or(default)
    }

    pub fn set<T: SettingValue>(&mut self, key: &str, value: T) {
        self.values.insert(key.to_string(), value.into_value());
    }

    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.get(key, default.to_string())
    }

    pub fn set_string(&mut self, key: &str, value: impl Into<String>) {
        self.set(key, value.into());
    }

    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get(key, default)
    }

    pub fn set_int(&mut self, key: &str, value: i64) {
        self.set(key, value);
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key, default)
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.set(key, value);
    }

    /// Raw access for free-form feature settings (objects, arrays).
    pub fn get_property(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn set_property(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Write the document, logging instead of failing.
    pub fn save(&self) {
        if let Err(e) = self.try_save() {
            error!("failed to save configuration: {e}");
        }
    }

    /// Write the document to disk, overwriting it.
    pub fn try_save(&self) -> Result<()> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(path, json)?;
        debug!(path = %path.display(), "configuration saved");
        Ok(())
    }

    // Named settings

    pub fn language(&self) -> Language {
        Language::from_code_or_default(&self.get_string(keys::LANGUAGE, Language::De.code()))
    }

    pub fn set_language(&mut self, language: Language) {
        self.set_string(keys::LANGUAGE, language.code());
    }

    pub fn theme(&self) -> Theme {
        Theme::from_name(&self.get_string(keys::THEME, Theme::Dark.name()))
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.set_string(keys::THEME, theme.name());
    }

    pub fn window_size(&self) -> (i32, i32) {
        (
            self.get(keys::WINDOW_WIDTH, DEFAULT_WINDOW_WIDTH),
            self.get(keys::WINDOW_HEIGHT, DEFAULT_WINDOW_HEIGHT),
        )
    }

    pub fn set_window_size(&mut self, width: i32, height: i32) {
        self.set(keys::WINDOW_WIDTH, width);
        self.set(keys::WINDOW_HEIGHT, height);
    }

    pub fn api_base_url(&self) -> String {
        self.get_string(keys::API_BASE_URL, DEFAULT_API_BASE_URL)
    }

    pub fn set_api_base_url(&mut self, url: impl Into<String>) {
        self.set_string(keys::API_BASE_URL, url);
    }

    pub fn orders_website_url(&self) -> String {
        self.get_string(keys::ORDERS_WEBSITE_URL, "")
    }

    pub fn set_orders_website_url(&mut self, url: impl Into<String>) {
        self.set_string(keys::ORDERS_WEBSITE_URL, url);
    }

    pub fn current_user_name(&self) -> String {
        self.get_string(keys::CURRENT_USER_NAME, DEFAULT_USER_NAME)
    }

    pub fn set_current_user_name(&mut self, name: impl Into<String>) {
        self.set_string(keys::CURRENT_USER_NAME, name);
    }

    pub fn sheet_url(&self) -> String {
        self.get_string(keys::SHEET_URL, "")
    }

    pub fn set_sheet_url(&mut self, url: impl Into<String>) {
        self.set_string(keys::SHEET_URL, url);
    }

    pub fn service_account_email(&self) -> String {
        self.get_string(keys::SERVICE_ACCOUNT_EMAIL, "")
    }

    pub fn set_service_account_email(&mut self, email: impl Into<String>) {
        self.set_string(keys::SERVICE_ACCOUNT_EMAIL, email);
    }
}

fn default_values() -> Map<String, Value> {
    let mut values = Map::new();
    values.insert(keys::LANGUAGE.into(), Value::from(Language::De.code()));
    values.insert(keys::THEME.into(), Value::from(Theme::Dark.name()));
    values.insert(keys::WINDOW_WIDTH.into(), Value::from(DEFAULT_WINDOW_WIDTH));
    values.insert(keys::WINDOW_HEIGHT.into(), Value::from(DEFAULT_WINDOW_HEIGHT));
    values.insert(keys::API_BASE_URL.into(), Value::from(DEFAULT_API_BASE_URL));
    values.insert(keys::ORDERS_WEBSITE_URL.into(), Value::from(""));
    values.insert(keys::CURRENT_USER_NAME.into(), Value::from(DEFAULT_USER_NAME));
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn temp_store() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linguaops").join(CONFIG_FILE);
        (dir, path)
    }

    #[test]
    fn test_fresh_install_defaults() {
        let (_dir, path) = temp_store();
        let store = ConfigStore::initialize(&path);
        assert_eq!(store.language(), Language::De);
        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(store.window_size(), (1200, 800));
        assert_eq!(store.api_base_url(), "http://localhost:8080/api");
        assert_eq!(store.orders_website_url(), "");
        assert_eq!(store.current_user_name(), "User");
        // Defaults are written on first start
        assert!(path.exists());
    }

    #[test]
    fn test_absent_key_returns_default() {
        let store = ConfigStore::in_memory();
        assert_eq!(store.get_string("missing", "fallback"), "fallback");
        assert_eq!(store.get_int("missing", 42), 42);
        assert!(store.get_bool("missing", true));
        assert!(store.get_property("missing").is_none());
    }

    #[test]
    fn test_wrong_type_returns_default() {
        let mut store = ConfigStore::in_memory();
        store.set_string("count", "seven");
        store.set_int("flag", 1);
        assert_eq!(store.get_int("count", 3), 3);
        assert!(!store.get_bool("flag", false));
        // language is a string, so an int read falls back
        assert_eq!(store.get_int(keys::LANGUAGE, -1), -1);
    }

    #[test]
    fn test_round_trip_all_scalar_types() {
        let (_dir, path) = temp_store();
        let mut store = ConfigStore::initialize(&path);
        store.set_string("name", "Anna");
        store.set_int("retries", 5);
        store.set_bool("compact", true);
        store.set_window_size(1440, 900);
        store.save();

        let reloaded = ConfigStore::initialize(&path);
        assert_eq!(reloaded.get_string("name", "other"), "Anna");
        assert_eq!(reloaded.get_int("retries", 0), 5);
        assert!(reloaded.get_bool("compact", false));
        assert_eq!(reloaded.window_size(), (1440, 900));
    }

    #[test]
    fn test_language_and_theme_persist() {
        let (_dir, path) = temp_store();
        for (language, theme) in [(Language::En, Theme::Light), (Language::De, Theme::Dark)] {
            let mut store = ConfigStore::initialize(&path);
            store.set_language(language);
            store.set_theme(theme);
            store.save();

            let reloaded = ConfigStore::initialize(&path);
            assert_eq!(reloaded.language(), language);
            assert_eq!(reloaded.theme(), theme);
        }
    }

    #[test]
    fn test_unsaved_changes_are_not_persisted() {
        let (_dir, path) = temp_store();
        let mut store = ConfigStore::initialize(&path);
        store.set_language(Language::En);

        let reloaded = ConfigStore::initialize(&path);
        assert_eq!(reloaded.language(), Language::De);
    }

    #[test]
    fn test_corrupt_file_resets_and_rewrites_defaults() {
        let (_dir, path) = temp_store();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let store = ConfigStore::initialize(&path);
        assert_eq!(store.language(), Language::De);

        let on_disk: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk["theme"], json!("dark"));
    }

    #[test]
    fn test_non_object_document_is_rejected() {
        let (_dir, path) = temp_store();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "[1, 2, 3]").unwrap();

        let store = ConfigStore::initialize(&path);
        assert_eq!(store.current_user_name(), "User");
    }

    #[test]
    fn test_invalid_persisted_values_fall_back() {
        let (_dir, path) = temp_store();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"language": "fr", "theme": "neon"}"#).unwrap();

        let store = ConfigStore::initialize(&path);
        assert_eq!(store.language(), Language::De);
        assert_eq!(store.theme(), Theme::Dark);
        // Keys absent from an older document still read their defaults
        assert_eq!(store.window_size(), (1200, 800));
    }

    #[test]
    fn test_unwritable_path_degrades_to_memory() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "a file, not a directory").unwrap();
        let path = blocker.join(CONFIG_FILE);

        let mut store = ConfigStore::initialize(&path);
        assert_eq!(store.language(), Language::De);

        store.set_language(Language::En);
        store.save();
        assert!(store.try_save().is_err());
        assert_eq!(store.language(), Language::En);
    }

    #[test]
    fn test_free_form_properties() {
        let (_dir, path) = temp_store();
        let mut store = ConfigStore::initialize(&path);
        store.set_property("savedSheets", json!([{ "name": "B1", "url": "https://sheets" }]));
        store.save();

        let reloaded = ConfigStore::initialize(&path);
        assert_eq!(reloaded.get_property("savedSheets").unwrap()[0]["name"], json!("B1"));
        // Object values are not scalars, so a string read falls back
        assert_eq!(reloaded.get_string("savedSheets", "none"), "none");
    }

    #[test]
    fn test_in_memory_save_is_noop() {
        let store = ConfigStore::in_memory();
        assert!(store.path().is_none());
        assert!(store.try_save().is_ok());
    }

    #[test]
    fn test_saved_document_is_pretty_json() {
        let (_dir, path) = temp_store();
        let store = ConfigStore::initialize(&path);
        store.save();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains('\n'));
        assert!(contents.contains("\"currentUserName\": \"User\""));
    }
}
