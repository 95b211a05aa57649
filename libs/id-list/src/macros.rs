//! Macros for declaring concrete ID list kinds.

/// Declares a list type bound to exactly one ID kind.
///
/// The list only accepts IDs of that kind: the binding is a type alias over
/// [`IdList`](crate::IdList), so mixing kinds is a compile error.
///
/// # Example
///
/// ```
/// idkit_id::define_id!(UserId, "user");
/// idkit_id_list::define_id_list!(UserIdList, UserId);
///
/// let list = UserIdList::from_ids([UserId::new()])?;
/// assert_eq!(UserIdList::handles_kind(), "user");
/// # let _ = list;
/// # Ok::<(), idkit_id_list::IdListError>(())
/// ```
#[macro_export]
macro_rules! define_id_list {
    ($list:ident, $id:ty) => {
        /// An ordered, deduplicated list of IDs of one kind.
        pub type $list = $crate::IdList<$id>;
    };
}
