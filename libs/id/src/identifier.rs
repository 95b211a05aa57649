//! The identifier contract shared by every ID kind.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

use uuid::Uuid;

use crate::{AnyId, IdError};

/// A typed, immutable identifier.
///
/// Implementations are normally generated with [`define_id!`](crate::define_id).
/// Equality is value equality of the wrapped UUID.
pub trait Identifier:
    Clone + Eq + Hash + Debug + Display + FromStr<Err = IdError> + Send + Sync + 'static
{
    /// The kind name of this identifier (for example `"user"`).
    const KIND: &'static str;

    /// Wraps a raw UUID without validation.
    fn from_uuid(uuid: Uuid) -> Self;

    /// Returns the wrapped UUID.
    fn uuid(&self) -> Uuid;

    /// Generates a fresh random identifier.
    fn generate() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Parses an identifier from its canonical string form.
    fn parse(s: &str) -> Result<Self, IdError> {
        parse_canonical_uuid(Self::KIND, s).map(Self::from_uuid)
    }

    fn is_equal_to(&self, other: &Self) -> bool {
        self == other
    }

    fn is_not_equal_to(&self, other: &Self) -> bool {
        !self.is_equal_to(other)
    }

    /// Returns true if any element of `ids` is value-equal to `self`.
    fn is_existing_in_list(&self, ids: &[Self]) -> bool {
        ids.iter().any(|id| id.is_equal_to(self))
    }

    fn is_not_existing_in_list(&self, ids: &[Self]) -> bool {
        !self.is_existing_in_list(ids)
    }

    /// Fails with [`IdError::NotEqual`] unless `other` equals `self`.
    fn must_be_equal_to(&self, other: &Self) -> Result<(), IdError> {
        if self.is_not_equal_to(other) {
            return Err(IdError::NotEqual {
                kind: Self::KIND,
                left: self.to_string(),
                right: other.to_string(),
            });
        }
        Ok(())
    }

    /// Fails with [`IdError::Equal`] if `other` equals `self`.
    fn must_not_be_equal_to(&self, other: &Self) -> Result<(), IdError> {
        if self.is_equal_to(other) {
            return Err(IdError::Equal {
                kind: Self::KIND,
                id: self.to_string(),
            });
        }
        Ok(())
    }

    /// Erases the static kind into an [`AnyId`].
    fn to_any(&self) -> AnyId {
        AnyId::new(Self::KIND, self.uuid())
    }
}

/// Parses `s` as a UUID in canonical lowercase hyphenated form.
///
/// Other spellings accepted by [`Uuid::try_parse`] (uppercase, braced,
/// simple, URN) are rejected so that formatting a parsed ID yields `s` again.
pub fn parse_canonical_uuid(kind: &'static str, s: &str) -> Result<Uuid, IdError> {
    if s.is_empty() {
        return Err(IdError::Empty { kind });
    }

    let uuid = Uuid::try_parse(s).map_err(|e| IdError::InvalidId {
        kind,
        value: s.to_string(),
        reason: e.to_string(),
    })?;

    if uuid.hyphenated().to_string() != s {
        return Err(IdError::InvalidId {
            kind,
            value: s.to_string(),
            reason: "not in canonical lowercase hyphenated form".to_string(),
        });
    }

    Ok(uuid)
}
