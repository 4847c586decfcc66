use std::{
    collections::HashMap,
    fmt::Display,
    hash::{Hash, Hasher},
    str::FromStr,
    sync::{Arc, LazyLock, PoisonError, RwLock},
};

use tracing::{debug, trace};

use crate::{
    enum_with_name::EnumWithName,
    error::{BslError, Result},
    mdo_type::MdoType,
    script_variant::ScriptVariant,
};

/// Every reference created so far, keyed by both lowercased spellings.
static REFERENCES: LazyLock<RwLock<HashMap<String, MdoReference>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

static EMPTY: LazyLock<MdoReference> = LazyLock::new(|| {
    MdoReference(Arc::new(Inner {
        mdo_type: MdoType::Unknown,
        mdo_ref: String::new(),
        mdo_ref_ru: String::new(),
    }))
});

/// Reference to a metadata object written as `Kind.Name`, e.g. `Catalog.Goods`.
///
/// Nested objects extend the owner's path: `Catalog.Goods.TabularSection.Prices`. References
/// are cached for the lifetime of the process, so creating the same one twice returns the
/// cached value whatever case or language was used the second time.
#[derive(Debug, Clone)]
pub struct MdoReference(Arc<Inner>);

#[derive(Debug)]
struct Inner {
    mdo_type: MdoType,
    mdo_ref: String,
    mdo_ref_ru: String,
}

impl MdoReference {
    #[must_use]
    pub fn empty() -> Self {
        EMPTY.clone()
    }

    /// Creates a reference from ready-made spellings.
    ///
    /// The caller is responsible for both spellings naming the same object.
    #[must_use]
    pub fn create_full(mdo_type: MdoType, mdo_ref: &str, mdo_ref_ru: &str) -> Self {
        Self::get_or_compute(mdo_type, mdo_ref.to_owned(), mdo_ref_ru.to_owned())
    }

    /// Creates a reference to a top-level object.
    #[must_use]
    pub fn create(mdo_type: MdoType, name: &str) -> Self {
        Self::get_or_compute(
            mdo_type,
            format!("{}.{name}", mdo_type.name_en()),
            format!("{}.{name}", mdo_type.name_ru()),
        )
    }

    /// Creates a reference to an object nested in `owner`.
    ///
    /// An empty owner makes this the same as [`MdoReference::create`].
    #[must_use]
    pub fn child(owner: &Self, mdo_type: MdoType, name: &str) -> Self {
        if owner.is_empty() {
            return Self::create(mdo_type, name);
        }
        Self::get_or_compute(
            mdo_type,
            format!("{}.{}.{name}", owner.mdo_ref(), mdo_type.name_en()),
            format!("{}.{}.{name}", owner.mdo_ref_ru(), mdo_type.name_ru()),
        )
    }

    /// Parses `Kind.Name[.Kind.Name...]` where each kind may be written in either language,
    /// singular or plural.
    ///
    /// Pairs with an unrecognised kind are skipped.
    ///
    /// # Errors
    /// Returns [`BslError::IncorrectFullName`] when the text has no recognised `Kind.Name` pair
    /// or ends with a kind that has no name.
    pub fn parse(full_name: &str) -> Result<Self> {
        let parts = full_name.split('.').collect::<Vec<_>>();
        if parts.len() <= 1 {
            return Err(BslError::IncorrectFullName(full_name.to_owned()));
        }

        let mut reference: Option<Self> = None;
        for pair in parts.chunks(2) {
            let Some(mdo_type) = MdoType::from_value(pair[0]) else {
                continue;
            };
            let Some(name) = pair.get(1) else {
                return Err(BslError::IncorrectFullName(full_name.to_owned()));
            };
            reference = Some(match reference {
                Some(owner) => Self::child(&owner, mdo_type, name),
                None => Self::create(mdo_type, name),
            });
        }

        reference.ok_or_else(|| BslError::IncorrectFullName(full_name.to_owned()))
    }

    /// Looks a previously created reference up by either spelling, ignoring case.
    #[must_use]
    pub fn find(mdo_ref: &str) -> Option<Self> {
        REFERENCES
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&mdo_ref.to_lowercase())
            .cloned()
    }

    #[must_use]
    pub fn mdo_type(&self) -> MdoType {
        self.0.mdo_type
    }

    #[must_use]
    pub fn mdo_ref(&self) -> &str {
        &self.0.mdo_ref
    }

    #[must_use]
    pub fn mdo_ref_ru(&self) -> &str {
        &self.0.mdo_ref_ru
    }

    /// Spelling for the script variant: English for `English`, Russian otherwise.
    #[must_use]
    pub fn mdo_ref_for(&self, script_variant: ScriptVariant) -> &str {
        match script_variant {
            ScriptVariant::English => self.mdo_ref(),
            ScriptVariant::Russian | ScriptVariant::Unknown => self.mdo_ref_ru(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.mdo_type == MdoType::Unknown && self.0.mdo_ref.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    fn get_or_compute(mdo_type: MdoType, mdo_ref: String, mdo_ref_ru: String) -> Self {
        let key = mdo_ref.to_lowercase();
        if let Some(found) = REFERENCES
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            trace!(mdo_ref = %found, "reference found in cache");
            return found.clone();
        }

        let mut references = REFERENCES.write().unwrap_or_else(PoisonError::into_inner);
        // another thread may have created it between the two locks
        if let Some(found) = references.get(&key) {
            return found.clone();
        }
        let reference = Self(Arc::new(Inner {
            mdo_type,
            mdo_ref,
            mdo_ref_ru,
        }));
        references.insert(key, reference.clone());
        references
            .entry(reference.mdo_ref_ru().to_lowercase())
            .or_insert_with(|| reference.clone());
        debug!(
            mdo_ref = reference.mdo_ref(),
            mdo_ref_ru = reference.mdo_ref_ru(),
            mdo_type = %mdo_type,
            "reference created"
        );
        reference
    }
}

impl PartialEq for MdoReference {
    fn eq(&self, other: &Self) -> bool {
        self.0.mdo_ref == other.0.mdo_ref
    }
}

impl Eq for MdoReference {}

impl Hash for MdoReference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.mdo_ref.hash(state);
    }
}

impl FromStr for MdoReference {
    type Err = BslError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Display for MdoReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.mdo_ref)
    }
}
