use std::{
    cmp::Ordering,
    fmt::Display,
    sync::{Arc, LazyLock},
};

use serde::{Deserialize, Serialize};

use crate::{intern::Interner, script_variant::ScriptVariant};

static NAMES: LazyLock<Interner<Names>> = LazyLock::new(Interner::new);

/// Name of an object or property with two equivalent spellings, Russian and English.
///
/// `Document.MyDocument.Code` and `Документ.MyDocument.Код` name the same thing. Equal names
/// share one allocation, so cloning is cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Spellings", from = "Spellings")]
pub struct MultiName(Arc<Names>);

#[derive(Debug, Default, PartialEq, Eq, Hash)]
struct Names {
    ru: String,
    en: String,
}

impl Names {
    /// Puts a single spelling into the slot its characters belong to.
    fn classify(name: &str) -> Self {
        if contains_non_english(name) {
            Self {
                ru: name.to_owned(),
                en: String::new(),
            }
        } else {
            Self {
                ru: String::new(),
                en: name.to_owned(),
            }
        }
    }
}

#[derive(Serialize, Deserialize)]
struct Spellings {
    #[serde(default)]
    ru: String,
    #[serde(default)]
    en: String,
}

impl MultiName {
    /// Creates a name from its English and Russian spellings.
    ///
    /// When only one spelling is given, its language is detected from the characters it uses.
    #[must_use]
    pub fn new(en: &str, ru: &str) -> Self {
        let names = match (en.is_empty(), ru.is_empty()) {
            (true, true) => Names::default(),
            (true, false) => Names::classify(ru),
            (false, true) => Names::classify(en),
            (false, false) => Names {
                ru: ru.to_owned(),
                en: en.to_owned(),
            },
        };
        Self(NAMES.intern(names))
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new("", "")
    }

    /// Default spelling: Russian when present, English otherwise.
    #[must_use]
    pub fn get(&self) -> &str {
        if self.0.ru.is_empty() {
            &self.0.en
        } else {
            &self.0.ru
        }
    }

    /// Spelling for a language code (`ru`, `en`, `Русский`, ...).
    #[must_use]
    pub fn get_by_code(&self, code: &str) -> &str {
        self.get_for(ScriptVariant::value_by_name(code))
    }

    #[must_use]
    pub fn get_for(&self, script_variant: ScriptVariant) -> &str {
        match script_variant {
            ScriptVariant::English => self.en(),
            ScriptVariant::Russian | ScriptVariant::Unknown => self.ru(),
        }
    }

    #[must_use]
    pub fn en(&self) -> &str {
        &self.0.en
    }

    #[must_use]
    pub fn ru(&self) -> &str {
        &self.0.ru
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.ru.is_empty() && self.0.en.is_empty()
    }

    /// Whether both names are the same interned value.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<&str> for MultiName {
    fn from(name: &str) -> Self {
        Self::new(name, "")
    }
}

impl From<Spellings> for MultiName {
    fn from(spellings: Spellings) -> Self {
        Self::new(&spellings.en, &spellings.ru)
    }
}

impl From<MultiName> for Spellings {
    fn from(name: MultiName) -> Self {
        Self {
            ru: name.0.ru.clone(),
            en: name.0.en.clone(),
        }
    }
}

impl PartialOrd for MultiName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MultiName {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.ptr_eq(other) {
            return Ordering::Equal;
        }
        self.0
            .ru
            .cmp(&other.0.ru)
            .then_with(|| self.0.en.cmp(&other.0.en))
    }
}

impl Display for MultiName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            Ok(())
        } else {
            write!(f, "MultiName (ru: {}, en: {})", self.0.ru, self.0.en)
        }
    }
}

/// Whether the text uses anything besides ASCII letters, digits and `_`.
fn contains_non_english(text: &str) -> bool {
    text.chars()
        .any(|c| !(c.is_ascii_alphanumeric() || c == '_'))
}
