//! Localization
//!
//! In-code string tables with lookup through a context handle. Components
//! never call a global translation function; they receive the handle via
//! `use_i18n()` and resolve keys at render time.

use std::collections::BTreeMap;

use leptos::prelude::*;

/// Default locale used when a key is missing from the active table
pub const DEFAULT_LOCALE: &str = "ro";

/// All supported locale codes
pub const SUPPORTED_LOCALES: &[&str] = &["ro", "en", "uk"];

/// Display names for each supported locale (same order as SUPPORTED_LOCALES)
pub const LOCALE_NAMES: &[&str] = &["Română", "English", "Українська"];

/// Every key the registration flow and footer resolve at runtime.
///
/// A key missing from any locale table is a configuration defect; the tests
/// below catch it before it can reach a user.
pub const REQUIRED_KEYS: &[&str] = &[
    "products",
    "resources.product",
    "resources.quantity",
    "resources.added.products",
    "signup.products.food",
    "signup.products.generalHygiene",
    "signup.products.feminineHygiene",
    "signup.products.textile",
    "signup.products.buildingMaterials",
    "signup.products.tents",
    "signup.products.others",
    "signup.products.description",
    "signup.products.name",
    "signup.products.quantity",
    "signup.products.unit",
    "signup.products.packaging",
    "signup.products.expirationDate",
    "signup.products.county",
    "signup.products.textileSize",
    "signup.products.kidsAge",
    "signup.products.tentCapacity",
    "signup.donor",
    "signup.requester",
    "services.offerTransport",
    "yes",
    "no",
    "save",
    "remove",
    "loading",
    "validation.required",
    "validation.number",
    "incubated.by",
    "useful.links",
    "about.project",
    "source.code",
    "legal.info",
    "confidentiality.policy",
    "terms.and.conditions",
    "code4ro.description",
];

/// A string table maps keys to translated text for a single locale
pub type StringTable = BTreeMap<String, String>;

/// All string tables plus the currently active locale
#[derive(Debug, Clone)]
pub struct LocalizationState {
    pub active_locale: String,
    pub tables: BTreeMap<String, StringTable>,
}

impl Default for LocalizationState {
    fn default() -> Self {
        let mut tables = BTreeMap::new();
        tables.insert("ro".to_string(), build_romanian_table());
        tables.insert("en".to_string(), build_english_table());
        tables.insert("uk".to_string(), build_ukrainian_table());
        Self {
            active_locale: DEFAULT_LOCALE.to_string(),
            tables,
        }
    }
}

impl LocalizationState {
    /// Look up a key in the active locale, falling back to the default
    /// locale and finally to the key itself.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    /// Look up a key, returning `None` if no table has it
    pub fn get(&self, key: &str) -> Option<&str> {
        self.tables
            .get(&self.active_locale)
            .and_then(|table| table.get(key).map(|s| s.as_str()))
            .or_else(|| {
                self.tables
                    .get(DEFAULT_LOCALE)
                    .and_then(|table| table.get(key).map(|s| s.as_str()))
            })
    }

    /// Switch the active locale. Unsupported codes are ignored.
    pub fn set_locale(&mut self, locale: &str) {
        if self.tables.contains_key(locale) {
            self.active_locale = locale.to_string();
        }
    }
}

/// Localization handle provided via context
#[derive(Clone, Copy)]
pub struct I18n {
    state: RwSignal<LocalizationState>,
}

impl I18n {
    fn new() -> Self {
        Self {
            state: RwSignal::new(LocalizationState::default()),
        }
    }

    /// Translate a key in the active locale (tracked)
    pub fn t(&self, key: &str) -> String {
        self.state.with(|state| state.t(key).to_string())
    }

    /// Active locale code (tracked)
    pub fn locale(&self) -> String {
        self.state.with(|state| state.active_locale.clone())
    }

    pub fn set_locale(&self, locale: &str) {
        self.state.update(|state| state.set_locale(locale));
    }
}

pub fn provide_i18n() {
    provide_context(I18n::new());
}

pub fn use_i18n() -> I18n {
    expect_context::<I18n>()
}

fn table(entries: &[(&str, &str)]) -> StringTable {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn build_romanian_table() -> StringTable {
    table(&[
        ("products", "Produse"),
        ("resources.product", "Produs"),
        ("resources.quantity", "Cantitate"),
        ("resources.added.products", "Produse adăugate"),
        ("signup.products.food", "Alimente"),
        ("signup.products.generalHygiene", "Produse de igienă generală"),
        ("signup.products.feminineHygiene", "Produse de igienă feminină"),
        ("signup.products.textile", "Textile"),
        ("signup.products.buildingMaterials", "Materiale de construcții"),
        ("signup.products.tents", "Corturi"),
        ("signup.products.others", "Altele"),
        ("signup.products.description", "Descriere"),
        ("signup.products.name", "Nume produs"),
        ("signup.products.quantity", "Cantitate"),
        ("signup.products.unit", "Unitate de măsură"),
        ("signup.products.packaging", "Tip de ambalaj"),
        ("signup.products.expirationDate", "Data expirării"),
        ("signup.products.county", "Acoperire județeană"),
        ("signup.products.textileSize", "Mărime"),
        ("signup.products.kidsAge", "Vârsta copiilor"),
        ("signup.products.tentCapacity", "Capacitate (persoane)"),
        ("signup.donor", "Vreau să ajut"),
        ("signup.requester", "Am nevoie de ajutor"),
        ("services.offerTransport", "Puteți asigura transportul?"),
        ("yes", "Da"),
        ("no", "Nu"),
        ("save", "Salvează"),
        ("remove", "Șterge"),
        ("loading", "Se încarcă..."),
        ("validation.required", "Acest câmp este obligatoriu"),
        ("validation.number", "Introduceți un număr valid"),
        ("incubated.by", "Un proiect incubat de"),
        ("useful.links", "Linkuri utile"),
        ("about.project", "Despre proiect"),
        ("source.code", "Codul sursă"),
        ("legal.info", "Informații legale"),
        ("confidentiality.policy", "Politica de confidențialitate"),
        ("terms.and.conditions", "Termeni și condiții"),
        (
            "code4ro.description",
            "Organizație neguvernamentală care construiește soluții digitale pentru probleme sociale.",
        ),
    ])
}

fn build_english_table() -> StringTable {
    table(&[
        ("products", "Products"),
        ("resources.product", "Product"),
        ("resources.quantity", "Quantity"),
        ("resources.added.products", "Added products"),
        ("signup.products.food", "Food"),
        ("signup.products.generalHygiene", "General hygiene products"),
        ("signup.products.feminineHygiene", "Feminine hygiene products"),
        ("signup.products.textile", "Textiles"),
        ("signup.products.buildingMaterials", "Building materials"),
        ("signup.products.tents", "Tents"),
        ("signup.products.others", "Others"),
        ("signup.products.description", "Description"),
        ("signup.products.name", "Product name"),
        ("signup.products.quantity", "Quantity"),
        ("signup.products.unit", "Unit of measure"),
        ("signup.products.packaging", "Packaging type"),
        ("signup.products.expirationDate", "Expiration date"),
        ("signup.products.county", "County coverage"),
        ("signup.products.textileSize", "Size"),
        ("signup.products.kidsAge", "Children's age"),
        ("signup.products.tentCapacity", "Capacity (persons)"),
        ("signup.donor", "I want to help"),
        ("signup.requester", "I need support"),
        ("services.offerTransport", "Can you provide transportation?"),
        ("yes", "Yes"),
        ("no", "No"),
        ("save", "Save"),
        ("remove", "Remove"),
        ("loading", "Loading..."),
        ("validation.required", "This field is required"),
        ("validation.number", "Enter a valid number"),
        ("incubated.by", "A project incubated by"),
        ("useful.links", "Useful links"),
        ("about.project", "About the project"),
        ("source.code", "Source code"),
        ("legal.info", "Legal information"),
        ("confidentiality.policy", "Privacy policy"),
        ("terms.and.conditions", "Terms and conditions"),
        (
            "code4ro.description",
            "A non-governmental organization building digital solutions for social problems.",
        ),
    ])
}

fn build_ukrainian_table() -> StringTable {
    table(&[
        ("products", "Продукти"),
        ("resources.product", "Продукт"),
        ("resources.quantity", "Кількість"),
        ("resources.added.products", "Додані продукти"),
        ("signup.products.food", "Продукти харчування"),
        ("signup.products.generalHygiene", "Засоби загальної гігієни"),
        ("signup.products.feminineHygiene", "Засоби жіночої гігієни"),
        ("signup.products.textile", "Текстиль"),
        ("signup.products.buildingMaterials", "Будівельні матеріали"),
        ("signup.products.tents", "Намети"),
        ("signup.products.others", "Інше"),
        ("signup.products.description", "Опис"),
        ("signup.products.name", "Назва продукту"),
        ("signup.products.quantity", "Кількість"),
        ("signup.products.unit", "Одиниця виміру"),
        ("signup.products.packaging", "Тип упаковки"),
        ("signup.products.expirationDate", "Термін придатності"),
        ("signup.products.county", "Охоплення за повітами"),
        ("signup.products.textileSize", "Розмір"),
        ("signup.products.kidsAge", "Вік дітей"),
        ("signup.products.tentCapacity", "Місткість (осіб)"),
        ("signup.donor", "Я хочу допомогти"),
        ("signup.requester", "Мені потрібна допомога"),
        ("services.offerTransport", "Чи можете ви забезпечити транспорт?"),
        ("yes", "Так"),
        ("no", "Ні"),
        ("save", "Зберегти"),
        ("remove", "Видалити"),
        ("loading", "Завантаження..."),
        ("validation.required", "Це поле є обов'язковим"),
        ("validation.number", "Введіть дійсне число"),
        ("incubated.by", "Проєкт інкубовано"),
        ("useful.links", "Корисні посилання"),
        ("about.project", "Про проєкт"),
        ("source.code", "Вихідний код"),
        ("legal.info", "Юридична інформація"),
        ("confidentiality.policy", "Політика конфіденційності"),
        ("terms.and.conditions", "Умови користування"),
        (
            "code4ro.description",
            "Неурядова організація, що створює цифрові рішення для соціальних проблем.",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_keys_resolve_in_every_locale() {
        let state = LocalizationState::default();

        for locale in SUPPORTED_LOCALES {
            let table = state.tables.get(*locale).unwrap();
            for key in REQUIRED_KEYS {
                let value = table.get(*key);
                assert!(value.is_some(), "missing key {} in locale {}", key, locale);
                assert!(
                    !value.unwrap().trim().is_empty(),
                    "empty key {} in locale {}",
                    key,
                    locale
                );
            }
        }
    }

    #[test]
    fn locales_and_names_same_length() {
        assert_eq!(SUPPORTED_LOCALES.len(), LOCALE_NAMES.len());
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        let state = LocalizationState::default();
        assert_eq!(state.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn missing_key_falls_back_to_default_locale() {
        let mut state = LocalizationState::default();
        state.set_locale("en");
        state.tables.get_mut("en").unwrap().remove("yes");

        assert_eq!(state.t("yes"), "Da");
    }

    #[test]
    fn set_locale_rejects_unknown_codes() {
        let mut state = LocalizationState::default();
        state.set_locale("de");
        assert_eq!(state.active_locale, DEFAULT_LOCALE);

        state.set_locale("uk");
        assert_eq!(state.active_locale, "uk");
    }
}
