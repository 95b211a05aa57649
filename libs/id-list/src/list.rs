//! The ordered, deduplicated ID list and its set algebra.

use std::collections::HashSet;

use idkit_id::{AnyId, Identifier};
use tracing::debug;

use crate::IdListError;

/// An ordered list of unique IDs of one kind.
///
/// Equality is set equality: two lists are equal when they hold the same
/// IDs, regardless of order. Use [`IdList::is_in_same_order`] or compare
/// [`IdList::as_slice`] when order matters.
#[derive(Debug, Clone)]
pub struct IdList<I: Identifier> {
    ids: Vec<I>,
}

// =============================================================================
// Construction
// =============================================================================

impl<I: Identifier> IdList<I> {
    /// Builds a list from a sequence of IDs, keeping their order.
    ///
    /// Fails with [`IdListError::DuplicateIds`] if two IDs are value-equal.
    pub fn from_ids(ids: impl IntoIterator<Item = I>) -> Result<Self, IdListError> {
        let ids: Vec<I> = ids.into_iter().collect();
        Self::must_not_contain_duplicate_ids(&ids)?;
        Ok(Self { ids })
    }

    /// Builds a list from IDs whose kind is only known at runtime.
    ///
    /// Every element must be of kind `I::KIND`, otherwise this fails with
    /// [`IdListError::KindNotHandled`]. Duplicates are rejected as in
    /// [`IdList::from_ids`].
    pub fn from_any_ids(ids: impl IntoIterator<Item = AnyId>) -> Result<Self, IdListError> {
        let ids: Vec<AnyId> = ids.into_iter().collect();
        Self::must_only_contain_ids_of_handled_kind(&ids)?;
        Self::from_ids(ids.iter().filter_map(|id| id.downcast::<I>()))
    }

    /// Parses every string as an ID of kind `I` and builds a list.
    pub fn from_strings<S: AsRef<str>>(
        values: impl IntoIterator<Item = S>,
    ) -> Result<Self, IdListError> {
        let ids = values
            .into_iter()
            .map(|s| I::parse(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_ids(ids)
    }

    /// Returns the empty list.
    #[must_use]
    pub fn empty() -> Self {
        Self { ids: Vec::new() }
    }

    /// Merges lists in the given order.
    ///
    /// IDs present in more than one list appear once, at the position of
    /// their first occurrence.
    #[must_use]
    pub fn from_id_lists<'a>(lists: impl IntoIterator<Item = &'a IdList<I>>) -> Self {
        let mut seen: HashSet<&I> = HashSet::new();
        let mut ids = Vec::new();
        for list in lists {
            for id in &list.ids {
                if seen.insert(id) {
                    ids.push(id.clone());
                }
            }
        }
        Self::from_unique(ids)
    }

    /// The kind of ID this list handles.
    #[must_use]
    pub fn handles_kind() -> &'static str {
        I::KIND
    }

    /// Wraps IDs that are unique by construction.
    fn from_unique(ids: Vec<I>) -> Self {
        debug_assert!(Self::must_not_contain_duplicate_ids(&ids).is_ok());
        Self { ids }
    }
}

impl<I: Identifier> Default for IdList<I> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<I: Identifier> TryFrom<Vec<I>> for IdList<I> {
    type Error = IdListError;

    fn try_from(ids: Vec<I>) -> Result<Self, Self::Error> {
        Self::from_ids(ids)
    }
}

// =============================================================================
// Transformers (in place)
// =============================================================================

impl<I: Identifier> IdList<I> {
    /// Appends `id`, failing with [`IdListError::AlreadyInList`] if present.
    pub fn add_id_in_place(&mut self, id: I) -> Result<&mut Self, IdListError> {
        if self.contains_id(&id) {
            debug!(kind = I::KIND, id = %id, "rejected adding ID already in list");
            return Err(IdListError::AlreadyInList {
                kind: I::KIND,
                id: id.to_string(),
            });
        }
        self.ids.push(id);
        Ok(self)
    }

    /// Appends `id` unless it is already present.
    pub fn add_id_when_not_in_list_in_place(&mut self, id: I) -> &mut Self {
        if self.not_contains_id(&id) {
            self.ids.push(id);
        }
        self
    }

    /// Removes `id`. Removing an absent ID does nothing.
    pub fn remove_id_in_place(&mut self, id: &I) -> &mut Self {
        self.ids.retain(|current| current.is_not_equal_to(id));
        self
    }

    /// Keeps the IDs present in exactly one of `self` and `other`.
    ///
    /// IDs only in `self` come first in `self`'s order, followed by IDs only
    /// in `other` in `other`'s order.
    pub fn diff_in_place(&mut self, other: &Self) -> &mut Self {
        let mine: HashSet<&I> = self.ids.iter().collect();
        let theirs: HashSet<&I> = other.ids.iter().collect();

        let ids: Vec<I> = self
            .ids
            .iter()
            .filter(|id| !theirs.contains(id))
            .chain(other.ids.iter().filter(|id| !mine.contains(id)))
            .cloned()
            .collect();

        self.ids = ids;
        self
    }

    /// Keeps the IDs also present in `other`, in `self`'s order.
    ///
    /// `other` only decides membership, never order.
    pub fn intersect_in_place(&mut self, other: &Self) -> &mut Self {
        let theirs: HashSet<&I> = other.ids.iter().collect();
        self.ids.retain(|id| theirs.contains(id));
        self
    }
}

// =============================================================================
// Transformers (persistent)
// =============================================================================

impl<I: Identifier> IdList<I> {
    /// Returns a new list with `id` appended.
    ///
    /// Fails with [`IdListError::AlreadyInList`] if `id` is present.
    pub fn add_id(&self, id: I) -> Result<Self, IdListError> {
        let mut next = self.clone();
        next.add_id_in_place(id)?;
        Ok(next)
    }

    /// Returns a new list with `id` appended unless already present.
    #[must_use]
    pub fn add_id_when_not_in_list(&self, id: I) -> Self {
        let mut next = self.clone();
        next.add_id_when_not_in_list_in_place(id);
        next
    }

    /// Returns a new list without `id`.
    #[must_use]
    pub fn remove_id(&self, id: &I) -> Self {
        let mut next = self.clone();
        next.remove_id_in_place(id);
        next
    }

    /// Returns the symmetric difference of `self` and `other`.
    #[must_use]
    pub fn diff(&self, other: &Self) -> Self {
        let mut next = self.clone();
        next.diff_in_place(other);
        next
    }

    /// Returns the IDs present in both lists, in `self`'s order.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let mut next = self.clone();
        next.intersect_in_place(other);
        next
    }

    /// Applies `f` to every ID in order and collects the results.
    pub fn map<R, F>(&self, f: F) -> Vec<R>
    where
        F: FnMut(&I) -> R,
    {
        self.ids.iter().map(f).collect()
    }
}

// =============================================================================
// Accessors
// =============================================================================

impl<I: Identifier> IdList<I> {
    /// Returns true if a value-equal ID is in the list.
    pub fn contains_id(&self, id: &I) -> bool {
        id.is_existing_in_list(&self.ids)
    }

    /// Returns true if no value-equal ID is in the list.
    pub fn not_contains_id(&self, id: &I) -> bool {
        id.is_not_existing_in_list(&self.ids)
    }

    /// Returns true if both lists hold the same IDs, in any order.
    pub fn is_equal_to(&self, other: &Self) -> bool {
        if self.count() != other.count() {
            return false;
        }

        let theirs: HashSet<&I> = other.ids.iter().collect();
        self.ids.iter().all(|id| theirs.contains(id))
    }

    /// Negation of [`IdList::is_equal_to`].
    pub fn is_not_equal_to(&self, other: &Self) -> bool {
        !self.is_equal_to(other)
    }

    /// Number of IDs in the list.
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    /// Alias of [`IdList::count`].
    pub fn len(&self) -> usize {
        self.count()
    }

    /// Returns true if the list holds no IDs.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns true if the list holds at least one ID.
    pub fn is_not_empty(&self) -> bool {
        self.count() > 0
    }

    /// Returns true if `self` follows the order of `ordered`.
    ///
    /// `ordered` is restricted to the IDs also in `self` (keeping
    /// `ordered`'s order) and compared position by position with `self`.
    /// An ID of `self` missing from `ordered` makes the result false.
    pub fn is_in_same_order(&self, ordered: &Self) -> bool {
        ordered.intersect(self).ids == self.ids
    }

    /// Returns the ID at zero-based `position`.
    ///
    /// Fails with [`IdListError::PositionOutOfRange`] past the end.
    pub fn id_at_position(&self, position: usize) -> Result<&I, IdListError> {
        self.ids
            .get(position)
            .ok_or(IdListError::PositionOutOfRange {
                position,
                count: self.count(),
            })
    }

    /// Returns the ID at zero-based `position`, or `None` past the end.
    ///
    /// ```
    /// idkit_id::define_id!(UserId, "user");
    /// idkit_id_list::define_id_list!(UserIdList, UserId);
    ///
    /// let first = UserId::new();
    /// let list = UserIdList::from_ids([first, UserId::new()])?;
    /// assert_eq!(list.get(0), Some(&first));
    /// assert_eq!(list.get(2), None);
    /// assert!(list.id_at_position(2).is_err());
    /// # Ok::<(), idkit_id_list::IdListError>(())
    /// ```
    pub fn get(&self, position: usize) -> Option<&I> {
        self.ids.get(position)
    }

    /// Canonical string forms of all IDs, in list order.
    pub fn ids_as_string_list(&self) -> Vec<String> {
        self.map(|id| id.to_string())
    }

    /// Iterates the IDs in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, I> {
        self.ids.iter()
    }

    /// The IDs as a slice, in list order.
    pub fn as_slice(&self) -> &[I] {
        &self.ids
    }

    /// Consumes the list and returns its IDs in order.
    pub fn into_vec(self) -> Vec<I> {
        self.ids
    }
}

// =============================================================================
// Guards
// =============================================================================

impl<I: Identifier> IdList<I> {
    /// Fails with [`IdListError::DoesNotContainId`] unless `id` is present.
    ///
    /// ```
    /// idkit_id::define_id!(UserId, "user");
    /// idkit_id_list::define_id_list!(UserIdList, UserId);
    ///
    /// let member = UserId::new();
    /// let list = UserIdList::from_ids([member])?;
    /// list.must_contain_id(&member)?;
    /// assert!(list.must_contain_id(&UserId::new()).is_err());
    /// # Ok::<(), idkit_id_list::IdListError>(())
    /// ```
    pub fn must_contain_id(&self, id: &I) -> Result<(), IdListError> {
        if self.not_contains_id(id) {
            debug!(kind = I::KIND, id = %id, "ID list does not contain required ID");
            return Err(IdListError::DoesNotContainId {
                kind: I::KIND,
                id: id.to_string(),
            });
        }
        Ok(())
    }

    /// Fails with [`IdListError::DoesContainId`] if `id` is present.
    pub fn must_not_contain_id(&self, id: &I) -> Result<(), IdListError> {
        if self.contains_id(id) {
            debug!(kind = I::KIND, id = %id, "ID list contains forbidden ID");
            return Err(IdListError::DoesContainId {
                kind: I::KIND,
                id: id.to_string(),
            });
        }
        Ok(())
    }

    /// Fails with [`IdListError::NotEmpty`] unless the list is empty.
    pub fn must_be_empty(&self) -> Result<(), IdListError> {
        if self.is_not_empty() {
            debug!(kind = I::KIND, count = self.count(), "ID list is not empty");
            return Err(IdListError::NotEmpty {
                kind: I::KIND,
                count: self.count(),
            });
        }
        Ok(())
    }

    /// Fails with [`IdListError::NotEqual`] unless both lists hold the same IDs.
    pub fn must_be_equal_to(&self, other: &Self) -> Result<(), IdListError> {
        if self.is_not_equal_to(other) {
            debug!(
                kind = I::KIND,
                left = self.count(),
                right = other.count(),
                "ID lists are not equal"
            );
            return Err(IdListError::NotEqual { kind: I::KIND });
        }
        Ok(())
    }

    /// Fails with [`IdListError::DuplicateIds`] if `ids` holds value-equal IDs.
    ///
    /// Each duplicated value is reported once, in order of first repetition.
    pub fn must_not_contain_duplicate_ids(ids: &[I]) -> Result<(), IdListError> {
        let mut seen: HashSet<&I> = HashSet::with_capacity(ids.len());
        let mut duplicates: Vec<&I> = Vec::new();
        for id in ids {
            if !seen.insert(id) && !duplicates.contains(&id) {
                duplicates.push(id);
            }
        }

        if duplicates.is_empty() {
            return Ok(());
        }

        let duplicates: Vec<String> = duplicates.iter().map(|id| id.to_string()).collect();
        debug!(kind = I::KIND, ?duplicates, "rejected ID list with duplicate IDs");
        Err(IdListError::DuplicateIds {
            kind: I::KIND,
            duplicates,
        })
    }

    /// Fails with [`IdListError::KindNotHandled`] on the first ID not of kind `I`.
    pub fn must_only_contain_ids_of_handled_kind(ids: &[AnyId]) -> Result<(), IdListError> {
        if let Some(foreign) = ids.iter().find(|id| !id.is_kind::<I>()) {
            debug!(
                expected = I::KIND,
                actual = foreign.kind(),
                "rejected ID of unhandled kind"
            );
            return Err(IdListError::KindNotHandled {
                expected: I::KIND,
                actual: foreign.kind().to_string(),
            });
        }
        Ok(())
    }
}

// =============================================================================
// Standard traits
// =============================================================================

impl<I: Identifier> PartialEq for IdList<I> {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal_to(other)
    }
}

impl<I: Identifier> Eq for IdList<I> {}

impl<I: Identifier> AsRef<[I]> for IdList<I> {
    fn as_ref(&self) -> &[I] {
        &self.ids
    }
}

impl<'a, I: Identifier> IntoIterator for &'a IdList<I> {
    type Item = &'a I;
    type IntoIter = std::slice::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

impl<I: Identifier> IntoIterator for IdList<I> {
    type Item = I;
    type IntoIter = std::vec::IntoIter<I>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.into_iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
