//! # idkit-id
//!
//! Typed identifiers, parsing, and validation.
//!
//! ## Design Principles
//!
//! - Every identifier kind is its own Rust type; kinds cannot be mixed
//! - Identifiers are immutable values compared by value, never by instance
//! - Each identifier has exactly one canonical string representation
//! - Parsing is strict, so `parse(s).to_string() == s` for every accepted `s`
//!
//! ## ID Format
//!
//! Identifiers wrap a random 128-bit UUID (v4) and are written in the
//! lowercase hyphenated form:
//!
//! - `f41e0af4-88c4-4d79-9c1a-6e8ea34a956f`
//!
//! When the kind has to travel with the value (for example in mixed input
//! that is only sorted out at runtime), [`AnyId`] uses a tagged form
//! `{kind}_{uuid}`:
//!
//! - `user_f41e0af4-88c4-4d79-9c1a-6e8ea34a956f`
//!
//! ## Defining a kind
//!
//! ```
//! use idkit_id::{define_id, Identifier};
//!
//! define_id!(UserId, "user");
//!
//! let id = UserId::generate();
//! let parsed: UserId = id.to_string().parse().unwrap();
//! assert!(parsed.is_equal_to(&id));
//! ```

mod any;
mod error;
mod identifier;
mod macros;

pub use any::{is_valid_kind, AnyId};
pub use error::IdError;
pub use identifier::{parse_canonical_uuid, Identifier};

/// Re-export uuid for consumers that need raw UUID operations
pub use uuid::Uuid;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
