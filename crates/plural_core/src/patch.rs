//! Tri-state fields for partial updates.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field in a partial update: omitted, explicitly cleared, or set.
///
/// PATCH semantics need three states where `Option` only has two. An absent
/// key means "leave the field unchanged", an explicit `null` means "clear
/// it", and a value means "set it". `Patch` keeps those states distinct as
/// an enum instead of a sentinel value, so exhaustive matches cover every
/// case.
///
/// Serialization collapses `Null` and `Present` into `null` / the value;
/// keeping `Omitted` keys off the wire is the job of the containing struct:
///
/// ```
/// use plural_core::Patch;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Body {
///     #[serde(skip_serializing_if = "Patch::is_omitted")]
///     name: Patch<String>,
/// }
///
/// let body = Body { name: Patch::Omitted };
/// assert_eq!(serde_json::to_string(&body).unwrap(), "{}");
/// ```
///
/// Deserialization maps an absent key to `Omitted` (via `#[serde(default)]`),
/// `null` to `Null`, and anything else to `Present`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Patch<T> {
    /// The field is not part of the update.
    Omitted,
    /// The field is cleared to its empty state.
    Null,
    /// The field is set to a value.
    Present(T),
}

impl<T> Patch<T> {
    /// True when the field is absent from the update.
    pub fn is_omitted(&self) -> bool {
        matches!(self, Patch::Omitted)
    }

    /// True when the field carries an instruction, either a value or a clear.
    pub fn is_provided(&self) -> bool {
        !self.is_omitted()
    }

    /// True when the field is an explicit clear.
    pub fn is_null(&self) -> bool {
        matches!(self, Patch::Null)
    }

    /// Borrow the value, keeping the tri-state shape.
    pub fn as_ref(&self) -> Patch<&T> {
        match self {
            Patch::Omitted => Patch::Omitted,
            Patch::Null => Patch::Null,
            Patch::Present(value) => Patch::Present(value),
        }
    }

    /// Apply a function to a present value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Patch<U> {
        match self {
            Patch::Omitted => Patch::Omitted,
            Patch::Null => Patch::Null,
            Patch::Present(value) => Patch::Present(f(value)),
        }
    }

    /// The present value, or `None` for both omitted and cleared fields.
    pub fn into_option(self) -> Option<T> {
        match self {
            Patch::Present(value) => Some(value),
            _ => None,
        }
    }

    /// The present value, or a default for both omitted and cleared fields.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Patch::Present(value) => value,
            _ => default,
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Omitted
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Patch::Present(value)
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Present(value),
            None => Patch::Null,
        }
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Patch::Present(value) => serializer.serialize_some(value),
            // Omitted keys are suppressed by the containing struct; if one
            // slips through it degrades to null rather than panicking.
            Patch::Null | Patch::Omitted => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Doc {
        #[serde(default, skip_serializing_if = "Patch::is_omitted")]
        name: Patch<String>,
    }

    #[test]
    fn omitted_keys_stay_off_the_wire() {
        let doc = Doc {
            name: Patch::Omitted,
        };
        assert_eq!(serde_json::to_string(&doc).unwrap(), "{}");
    }

    #[test]
    fn null_and_value_serialize_distinctly() {
        let cleared = Doc { name: Patch::Null };
        assert_eq!(serde_json::to_string(&cleared).unwrap(), r#"{"name":null}"#);

        let set = Doc {
            name: Patch::Present("apple".to_string()),
        };
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"{"name":"apple"}"#);
    }

    #[test]
    fn deserialization_recovers_all_three_states() {
        let absent: Doc = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.name, Patch::Omitted);

        let null: Doc = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert_eq!(null.name, Patch::Null);

        let set: Doc = serde_json::from_str(r#"{"name":"apple"}"#).unwrap();
        assert_eq!(set.name, Patch::Present("apple".to_string()));
    }

    #[test]
    fn conversions_distinguish_clear_from_set() {
        assert_eq!(Patch::from("x"), Patch::Present("x"));
        assert_eq!(Patch::<u8>::from(None), Patch::Null);
        assert_eq!(Patch::from(Some(3u8)), Patch::Present(3));
        assert_eq!(Patch::<u8>::default(), Patch::Omitted);
    }

    #[test]
    fn accessors_reflect_state() {
        let present = Patch::Present(5u8);
        assert!(present.is_provided());
        assert!(!present.is_null());
        assert_eq!(present.into_option(), Some(5));

        let null = Patch::<u8>::Null;
        assert!(null.is_provided());
        assert!(null.is_null());
        assert_eq!(null.into_option(), None);
        assert_eq!(null.unwrap_or(7), 7);

        let omitted = Patch::<u8>::Omitted;
        assert!(omitted.is_omitted());
        assert!(!omitted.is_provided());
        assert_eq!(omitted.as_ref(), Patch::Omitted);
    }
}
