//! Macros for defining typed ID types.

/// Macro to define a typed ID of a specific kind.
///
/// This generates a newtype wrapper around a UUID with:
/// - an [`Identifier`](crate::Identifier) implementation whose `KIND` is the given literal
/// - `new()` to generate a fresh ID
/// - `parse()` to parse from the canonical string form
/// - `Display` and `FromStr` implementations
/// - `Serialize` and `Deserialize` implementations (string form)
/// - `Ord`, `Hash`, and other standard traits
///
/// # Example
///
/// ```
/// idkit_id::define_id!(UserId, "user");
/// idkit_id::define_id!(ProjectId, "project");
///
/// let user_id = UserId::new();
/// let parsed: UserId = "f41e0af4-88c4-4d79-9c1a-6e8ea34a956f".parse()?;
/// # let _ = (user_id, parsed);
/// # Ok::<(), idkit_id::IdError>(())
/// ```
///
/// The kind must satisfy [`is_valid_kind`](crate::is_valid_kind), otherwise
/// the definition does not compile:
///
/// ```compile_fail
/// idkit_id::define_id!(UserAccountId, "user_account");
/// ```
///
/// ```compile_fail
/// idkit_id::define_id!(TeamId, "Team");
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $kind:literal) => {
        const _: () = assert!(
            $crate::is_valid_kind($kind),
            "ID kind must be non-empty lowercase ASCII letters, digits, or '-'"
        );

        /// A typed ID for this kind.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($crate::Uuid);

        impl $name {
            /// The kind name of this ID type.
            pub const KIND: &'static str = $kind;

            /// Creates a new ID with a fresh random UUID.
            #[must_use]
            pub fn new() -> Self {
                <Self as $crate::Identifier>::generate()
            }

            /// Creates an ID from a raw UUID.
            #[must_use]
            pub const fn from_uuid(uuid: $crate::Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID.
            #[must_use]
            pub const fn uuid(&self) -> $crate::Uuid {
                self.0
            }

            /// Parses an ID from its canonical string form.
            pub fn parse(s: &str) -> Result<Self, $crate::IdError> {
                <Self as $crate::Identifier>::parse(s)
            }
        }

        impl $crate::Identifier for $name {
            const KIND: &'static str = $kind;

            fn from_uuid(uuid: $crate::Uuid) -> Self {
                Self(uuid)
            }

            fn uuid(&self) -> $crate::Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0.hyphenated())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<$crate::Uuid> for $name {
            fn from(uuid: $crate::Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for $crate::Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let s = <String as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&s).map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }

        impl AsRef<$crate::Uuid> for $name {
            fn as_ref(&self) -> &$crate::Uuid {
                &self.0
            }
        }
    };
}
