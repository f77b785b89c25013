use std::collections::HashMap;

use tracing::{debug, warn};

use crate::app::domain::preferences::Language;
use crate::app::infrastructure::error::Result;

const BUNDLE_DE: &str = include_str!("../../../assets/i18n/messages_de.toml");
const BUNDLE_EN: &str = include_str!("../../../assets/i18n/messages_en.toml");

/// Built-in secondary table, keyed `<key>_<lang>`.
const FALLBACK_TRANSLATIONS: &[(&str, &str)] = &[
    // Navigation
    ("home_de", "Start"),
    ("home_en", "Home"),
    ("history_de", "Verlauf"),
    ("history_en", "History"),
    ("settings_de", "Einstellungen"),
    ("settings_en", "Settings"),
    ("orders_de", "Bestellungen"),
    ("orders_en", "Orders"),
    ("telcArea_de", "telc Bereich"),
    ("telcArea_en", "Telc Area"),
    ("manageParticipants_de", "Teilnehmer verwalten"),
    ("manageParticipants_en", "Manage Participants"),
    ("exams_de", "Prüfungen"),
    ("exams_en", "Exams"),
    ("needsAttention_de", "Braucht Aufmerksamkeit"),
    ("needsAttention_en", "Needs Attention"),
    // Buttons and actions
    ("newOrders_de", "Neue Bestellungen"),
    ("newOrders_en", "New Orders"),
    ("searchOrders_de", "Bestellungen suchen"),
    ("searchOrders_en", "Search Orders"),
    ("export_de", "Exportieren"),
    ("export_en", "Export"),
    ("openWebsite_de", "Website öffnen"),
    ("openWebsite_en", "Open Website"),
    ("back_de", "Zurück"),
    ("back_en", "Back"),
    ("notifications_de", "Mitteilungen"),
    ("notifications_en", "Notifications"),
    ("light_de", "Hell"),
    ("light_en", "Light"),
    ("dark_de", "Dunkel"),
    ("dark_en", "Dark"),
    // Forms and dialogs
    ("addPerson_de", "Person hinzufügen"),
    ("addPerson_en", "Add Person"),
    ("orderNumber_de", "Bestellnummer"),
    ("orderNumber_en", "Order Number"),
    ("lastName_de", "Nachname"),
    ("lastName_en", "Last name"),
    ("firstName_de", "Vorname"),
    ("firstName_en", "First name"),
    ("email_de", "Email"),
    ("email_en", "Email"),
    ("phone_de", "Tel.Nr."),
    ("phone_en", "Phone"),
    ("save_de", "Speichern"),
    ("save_en", "Save"),
    ("cancel_de", "Abbrechen"),
    ("cancel_en", "Cancel"),
    // Messages
    ("loading_de", "Laden..."),
    ("loading_en", "Loading..."),
    ("error_de", "Fehler"),
    ("error_en", "Error"),
    ("success_de", "Erfolgreich"),
    ("success_en", "Success"),
];

/// Maps a symbolic key plus the current language to display text.
///
/// Lookup order: the language bundle, then the built-in table, then the
/// caller's fallback. It never fails; a missing text shows up as the
/// fallback (or the bare key).
#[derive(Debug, Clone)]
pub struct Translator {
    language: Language,
    bundles: HashMap<Language, HashMap<String, String>>,
    fallback: HashMap<String, String>,
}

impl Translator {
    /// Translator over the bundles embedded in the binary.
    pub fn new(language: Language) -> Self {
        Self::with_bundles(language, BUNDLE_DE, BUNDLE_EN)
    }

    /// Translator over custom bundle sources. A source that does not parse
    /// is dropped; lookups then go straight to the built-in table.
    pub fn with_bundles(language: Language, de_source: &str, en_source: &str) -> Self {
        let mut bundles = HashMap::new();
        for (lang, source) in [(Language::De, de_source), (Language::En, en_source)] {
            match parse_bundle(source) {
                Ok(bundle) => {
                    bundles.insert(lang, bundle);
                }
                Err(e) => warn!(language = %lang, "could not load resource bundle, using fallback: {e}"),
            }
        }

        let fallback = FALLBACK_TRANSLATIONS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Self {
            language,
            bundles,
            fallback,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        debug!(%language, "language set");
    }

    pub fn get_text(&self, key: &str) -> String {
        self.get_text_or(key, key)
    }

    pub fn get_text_or(&self, key: &str, fallback: &str) -> String {
        self.lookup(key)
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }

    pub fn has_text(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        if let Some(text) = self.bundles.get(&self.language).and_then(|b| b.get(key)) {
            return Some(text);
        }
        let fallback_key = format!("{}_{}", key, self.language.code());
        self.fallback.get(&fallback_key).map(String::as_str)
    }
}

fn parse_bundle(source: &str) -> Result<HashMap<String, String>> {
    Ok(toml::from_str(source)?)
}
