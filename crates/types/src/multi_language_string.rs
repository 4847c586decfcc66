use std::{
    cmp::Ordering,
    collections::BTreeSet,
    fmt::Display,
    sync::{Arc, LazyLock},
};

use serde::{Deserialize, Serialize};

use crate::intern::Interner;

static STRINGS: LazyLock<Interner<BTreeSet<Entry>>> = LazyLock::new(Interner::new);

/// Text stored in several languages at once, e.g. a synonym or a comment of a metadata object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MultiLanguageString(Arc<BTreeSet<Entry>>);

/// Text for a single language.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    lang_key: String,
    value: String,
}

impl Entry {
    #[must_use]
    pub fn new(lang_key: &str, value: &str) -> Self {
        Self {
            lang_key: lang_key.to_owned(),
            value: value.to_owned(),
        }
    }

    #[must_use]
    pub fn lang_key(&self) -> &str {
        &self.lang_key
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl MultiLanguageString {
    #[must_use]
    pub fn empty() -> Self {
        Self::from_entries([])
    }

    #[must_use]
    pub fn new(lang_key: &str, value: &str) -> Self {
        Self::from_entries([Entry::new(lang_key, value)])
    }

    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        Self(STRINGS.intern(entries.into_iter().collect()))
    }

    /// Union of two strings' contents.
    #[must_use]
    pub fn merge(first: &Self, second: &Self) -> Self {
        Self::from_entries(first.0.iter().chain(second.0.iter()).cloned())
    }

    /// Union of several strings' contents.
    ///
    /// No strings give the empty value and a single string is returned as is.
    #[must_use]
    pub fn join(strings: &[Self]) -> Self {
        match strings {
            [] => Self::empty(),
            [single] => single.clone(),
            _ => Self::from_entries(strings.iter().flat_map(|s| s.0.iter()).cloned()),
        }
    }

    /// Text for the language, compared without case. Empty when the language is missing.
    #[must_use]
    pub fn get(&self, lang: &str) -> &str {
        let lang = lang.to_lowercase();
        self.0
            .iter()
            .find(|entry| entry.lang_key.to_lowercase() == lang)
            .map_or("", |entry| entry.value.as_str())
    }

    /// Text of any language, empty when there is none.
    #[must_use]
    pub fn get_any(&self) -> &str {
        self.0.first().map_or("", |entry| entry.value.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.0.iter()
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialOrd for MultiLanguageString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MultiLanguageString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.iter().cmp(other.0.iter()))
    }
}

impl Display for MultiLanguageString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "empty");
        }
        let content = self
            .0
            .iter()
            .map(|entry| format!("{}: {}", entry.lang_key, entry.value))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{content}")
    }
}

impl Serialize for MultiLanguageString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl<'de> Deserialize<'de> for MultiLanguageString {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<Entry>::deserialize(deserializer)?;
        Ok(Self::from_entries(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create() {
        let value = MultiLanguageString::new("ru", "ru");
        assert!(!value.is_empty());
        assert_eq!(value.get("RU"), "ru");
        assert_eq!(value.get_any(), "ru");

        let copy = MultiLanguageString::new("ru", "ru");
        assert_eq!(value, copy);
        assert!(value.ptr_eq(&copy));
    }

    #[test]
    fn test_merge_and_join() {
        let ru = MultiLanguageString::new("ru", "ru");
        let en = MultiLanguageString::new("en", "en");

        let merged = MultiLanguageString::merge(&ru, &en);
        assert!(!merged.is_empty());
        assert_eq!(merged.get("RU"), "ru");
        assert_eq!(merged.get("en"), "en");

        let joined = MultiLanguageString::join(&[en, ru]);
        assert_eq!(merged, joined);
        assert!(merged.ptr_eq(&joined));
    }

    #[test]
    fn test_join_edge_cases() {
        assert!(MultiLanguageString::join(&[]).is_empty());

        let single = MultiLanguageString::new("en", "Goods");
        assert!(MultiLanguageString::join(std::slice::from_ref(&single)).ptr_eq(&single));
    }

    #[test]
    fn test_missing_language() {
        let value = MultiLanguageString::new("en", "Goods");
        assert_eq!(value.get("ru"), "");
        assert_eq!(MultiLanguageString::empty().get_any(), "");
    }

    #[test]
    fn test_ordering() {
        let one = MultiLanguageString::new("ru", "Б");
        let other = MultiLanguageString::new("ru", "А");
        let two = MultiLanguageString::from_entries([Entry::new("en", "A"), Entry::new("ru", "А")]);

        assert!(other < one);
        assert!(one < two);
        assert_eq!(one.cmp(&one.clone()), Ordering::Equal);
    }

    #[test]
    fn test_entries_sorted_by_language() {
        let value = MultiLanguageString::from_entries([
            Entry::new("ru", "Товары"),
            Entry::new("en", "Goods"),
        ]);
        let entries = value
            .entries()
            .map(|entry| (entry.lang_key(), entry.value()))
            .collect::<Vec<_>>();
        assert_eq!(entries, [("en", "Goods"), ("ru", "Товары")]);
        assert_eq!(MultiLanguageString::empty().entries().count(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(MultiLanguageString::empty().to_string(), "empty");
        let value = MultiLanguageString::from_entries([
            Entry::new("ru", "Товары"),
            Entry::new("en", "Goods"),
        ]);
        assert_eq!(value.to_string(), "en: Goods, ru: Товары");
    }

    #[test]
    fn test_serde() {
        let value = MultiLanguageString::new("en", "Goods");
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"[{"langKey":"en","value":"Goods"}]"#);

        let back: MultiLanguageString = serde_json::from_str(&json).unwrap();
        assert!(back.ptr_eq(&value));
    }
}
