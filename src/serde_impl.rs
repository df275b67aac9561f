//! Serde support for [`Nullish`] (feature-gated)
//!
//! `null` deserializes to [`Nullish::Null`] and any other value to
//! [`Nullish::Present`]. A missing field becomes [`Nullish::Undefined`] only
//! through `#[serde(default)]`; without it serde reads the field as `null`.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use presence::Nullish;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Patch {
//!     #[serde(default, skip_serializing_if = "Nullish::is_undefined")]
//!     nickname: Nullish<String>,
//! }
//!
//! let clear: Patch = serde_json::from_str(r#"{"nickname": null}"#).unwrap();
//! assert!(clear.nickname.is_null());
//!
//! let untouched: Patch = serde_json::from_str("{}").unwrap();
//! assert!(untouched.nickname.is_undefined());
//! assert_eq!(serde_json::to_string(&untouched).unwrap(), "{}");
//! ```

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::nullish::Nullish;

impl<T: Serialize> Serialize for Nullish<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Nullish::Present(value) => serializer.serialize_some(value),
            Nullish::Undefined | Nullish::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullish<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<T>::deserialize(deserializer)?;
        Ok(match value {
            Some(value) => Nullish::Present(value),
            None => Nullish::Null,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Patch {
        #[serde(default, skip_serializing_if = "Nullish::is_undefined")]
        nickname: Nullish<String>,
    }

    #[test]
    fn test_deserialize_three_states() {
        let set: Patch = serde_json::from_str(r#"{"nickname": "ada"}"#).unwrap();
        assert_eq!(set.nickname, Nullish::Present("ada".to_string()));

        let cleared: Patch = serde_json::from_str(r#"{"nickname": null}"#).unwrap();
        assert_eq!(cleared.nickname, Nullish::Null);

        let untouched: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(untouched.nickname, Nullish::Undefined);
    }

    #[test]
    fn test_serialize_skips_undefined() {
        let untouched = Patch {
            nickname: Nullish::Undefined,
        };
        assert_eq!(serde_json::to_string(&untouched).unwrap(), "{}");

        let cleared = Patch {
            nickname: Nullish::Null,
        };
        assert_eq!(
            serde_json::to_string(&cleared).unwrap(),
            r#"{"nickname":null}"#
        );

        let set = Patch {
            nickname: Nullish::Present("ada".to_string()),
        };
        assert_eq!(
            serde_json::to_string(&set).unwrap(),
            r#"{"nickname":"ada"}"#
        );
    }

    #[test]
    fn test_bare_values() {
        let value: Nullish<u8> = serde_json::from_str("3").unwrap();
        assert_eq!(value, Nullish::Present(3));
        assert_eq!(serde_json::to_string(&Nullish::<u8>::Undefined).unwrap(), "null");
    }
}
