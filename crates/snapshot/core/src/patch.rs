//! Three-state field values for partial snapshot updates.
//!
//! A snapshot update distinguishes a key that was never sent from a key that
//! was sent as `null`. `Option<T>` collapses the two, so every update field is
//! a [`Patch<T>`] instead:
//!
//! | wire            | `Patch`          |
//! |-----------------|------------------|
//! | key missing     | `Patch::Absent`  |
//! | `"key": null`   | `Patch::Null`    |
//! | `"key": value`  | `Patch::Value`   |
//!
//! Update structs mark every `Patch` field with `#[serde(default)]` so a
//! missing key falls back to `Absent`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field of an update record: absent, explicitly null, or a concrete value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Patch<T> {
    /// The key was not present in the update.
    Absent,
    /// The key was present with an explicit `null`.
    Null,
    /// The key carried a concrete value.
    Value(T),
}

// Not derived: the derive would require `T: Default`.
impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Patch<T> {
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns the carried value, treating `Absent` and `Null` alike.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }

    pub fn as_ref(&self) -> Patch<&T> {
        match self {
            Self::Absent => Patch::Absent,
            Self::Null => Patch::Null,
            Self::Value(value) => Patch::Value(value),
        }
    }

    pub fn map<U, F>(self, f: F) -> Patch<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Absent => Patch::Absent,
            Self::Null => Patch::Null,
            Self::Value(value) => Patch::Value(f(value)),
        }
    }

    /// Collapses the patch into an `Option`, losing the absent/null distinction.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }
}

impl<T: Clone> Patch<T> {
    /// Overwrites `slot` only when the patch carries a value.
    ///
    /// This is the `!= null` guard of the wire protocol: both `Absent` and
    /// `Null` leave the slot as it was.
    #[inline]
    pub fn assign(&self, slot: &mut T) {
        if let Self::Value(value) = self {
            slot.clone_from(value);
        }
    }

    /// Same as [`Patch::assign`] for fields that stay unset until first populated.
    #[inline]
    pub fn assign_some(&self, slot: &mut Option<T>) {
        if let Self::Value(value) = self {
            *slot = Some(value.clone());
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Value(value),
            None => Self::Null,
        }
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            // Absent fields are skipped by `skip_serializing_if`; a bare
            // Absent (e.g. inside a sequence) degrades to null.
            Self::Absent | Self::Null => serializer.serialize_none(),
            Self::Value(value) => serializer.serialize_some(value),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}
