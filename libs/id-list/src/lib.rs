//! # idkit-id-list
//!
//! Ordered, deduplicated lists of identifiers of exactly one kind.
//!
//! ## Invariants
//!
//! Every [`IdList`] satisfies, after every construction and every transform:
//!
//! - No two elements are value-equal
//! - Every element is of the list's handled kind (`I::KIND`)
//! - Insertion order is kept for iteration and order checks
//!
//! Kind homogeneity is enforced by the type parameter. Input whose kind is
//! only known at runtime ([`idkit_id::AnyId`]) is checked on construction.
//!
//! ## Result policies
//!
//! Each transformer exists twice over the same algebra:
//!
//! - persistent (`add_id`, `diff`, ...) borrows `self` and returns a new list
//! - in-place (`add_id_in_place`, `diff_in_place`, ...) updates `self` and
//!   returns it for chaining
//!
//! ## Example
//!
//! ```
//! use idkit_id::define_id;
//! use idkit_id_list::define_id_list;
//!
//! define_id!(UserId, "user");
//! define_id_list!(UserIdList, UserId);
//!
//! let (a, b, c) = (UserId::new(), UserId::new(), UserId::new());
//! let full = UserIdList::from_ids([a, b, c])?;
//! let partial = UserIdList::from_ids([a, c])?;
//!
//! assert!(partial.is_in_same_order(&full));
//! assert_eq!(full.intersect(&partial).as_slice(), &[a, c]);
//! assert_eq!(full.diff(&partial).as_slice(), &[b]);
//! # Ok::<(), idkit_id_list::IdListError>(())
//! ```

mod error;
mod list;
mod macros;
mod serde_impl;

pub use error::IdListError;
pub use list::IdList;
