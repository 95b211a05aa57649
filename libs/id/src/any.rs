//! Identifiers whose kind is only known at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::{parse_canonical_uuid, IdError, Identifier};

/// Kind name used in errors raised while parsing tagged IDs.
const TAGGED_KIND: &str = "tagged";

/// Returns true if `kind` is a valid kind name.
///
/// Kind names are non-empty and consist of lowercase ASCII letters, digits,
/// or `-`. [`define_id!`](crate::define_id) checks this at compile time so
/// the tagged form of every defined kind parses back.
pub const fn is_valid_kind(kind: &str) -> bool {
    let bytes = kind.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if !(b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-') {
            return false;
        }
        i += 1;
    }
    true
}

/// An identifier with its kind erased to runtime data.
///
/// The string form carries the kind as a prefix: `{kind}_{uuid}`.
/// Use [`AnyId::downcast`] to recover a typed identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnyId {
    kind: String,
    uuid: Uuid,
}

impl AnyId {
    /// Creates an erased ID from a kind name and a UUID.
    pub fn new(kind: impl Into<String>, uuid: Uuid) -> Self {
        Self {
            kind: kind.into(),
            uuid,
        }
    }

    /// Returns the kind name.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the wrapped UUID.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Returns true if this ID is of kind `I`.
    pub fn is_kind<I: Identifier>(&self) -> bool {
        self.kind == I::KIND
    }

    /// Recovers the typed ID, or `None` if the kind does not match.
    pub fn downcast<I: Identifier>(&self) -> Option<I> {
        self.is_kind::<I>().then(|| I::from_uuid(self.uuid))
    }

    /// Parses an ID from the tagged form `{kind}_{uuid}`.
    ///
    /// The kind must satisfy [`is_valid_kind`]. The UUID part follows the
    /// canonical form.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        if s.is_empty() {
            return Err(IdError::Empty { kind: TAGGED_KIND });
        }

        let Some((kind, uuid_str)) = s.rsplit_once('_') else {
            return Err(IdError::MissingSeparator {
                value: s.to_string(),
            });
        };

        if !is_valid_kind(kind) {
            return Err(IdError::InvalidKind {
                kind: kind.to_string(),
            });
        }

        let uuid = parse_canonical_uuid(TAGGED_KIND, uuid_str)?;
        Ok(Self::new(kind, uuid))
    }
}

impl fmt::Display for AnyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.kind, self.uuid.hyphenated())
    }
}

impl FromStr for AnyId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for AnyId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AnyId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::define_id!(UserId, "user");
    crate::define_id!(ServicePrincipalId, "service-principal");
    crate::define_id!(UserAccountId, "user-account");

    #[test]
    fn test_tagged_roundtrip() {
        let id = UserId::new().to_any();
        let s = id.to_string();
        assert!(s.starts_with("user_"));
        let parsed: AnyId = s.parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_tagged_roundtrip_multi_word_kind() {
        let id = UserAccountId::new();
        let parsed = AnyId::parse(&id.to_any().to_string()).unwrap();
        assert_eq!(parsed.kind(), "user-account");
        assert_eq!(parsed.downcast::<UserAccountId>(), Some(id));

        let json = serde_json::to_string(&id.to_any()).unwrap();
        let from_json: AnyId = serde_json::from_str(&json).unwrap();
        assert_eq!(from_json, id.to_any());
    }

    #[test]
    fn test_valid_kind_grammar() {
        assert!(is_valid_kind("user"));
        assert!(is_valid_kind("user-account"));
        assert!(is_valid_kind("v2"));
        assert!(!is_valid_kind(""));
        assert!(!is_valid_kind("user_account"));
        assert!(!is_valid_kind("Team"));
        assert!(!is_valid_kind("user account"));
    }

    #[test]
    fn test_downcast_matching_kind() {
        let user = UserId::new();
        assert_eq!(user.to_any().downcast::<UserId>(), Some(user));
    }

    #[test]
    fn test_downcast_foreign_kind() {
        let principal = ServicePrincipalId::new();
        let any = principal.to_any();
        assert!(!any.is_kind::<UserId>());
        assert_eq!(any.downcast::<UserId>(), None);
        assert_eq!(any.kind(), "service-principal");
    }

    #[test]
    fn test_parse_missing_separator() {
        let err = AnyId::parse("userf41e0af4-88c4-4d79-9c1a-6e8ea34a956f").unwrap_err();
        assert!(matches!(err, IdError::MissingSeparator { .. }));
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(
            AnyId::parse("").unwrap_err(),
            IdError::Empty { .. }
        ));
    }

    #[test]
    fn test_parse_invalid_kind() {
        for s in [
            "_f41e0af4-88c4-4d79-9c1a-6e8ea34a956f",
            "User_f41e0af4-88c4-4d79-9c1a-6e8ea34a956f",
        ] {
            let err = AnyId::parse(s).unwrap_err();
            assert!(matches!(err, IdError::InvalidKind { .. }), "{s}");
        }
    }

    #[test]
    fn test_parse_invalid_uuid() {
        let err = AnyId::parse("user_invalid").unwrap_err();
        assert!(matches!(err, IdError::InvalidId { .. }));
        assert!(err.is_invalid());
    }

    #[test]
    fn test_json_roundtrip() {
        let id = UserId::new().to_any();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: AnyId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
