//! Macros for ergonomic persistent list construction.

/// Build a [`PersistentList`](crate::persistent::PersistentList) holding the
/// given elements in order.
///
/// # Example
///
/// ```
/// use ventanilla::plist;
///
/// let list = plist![1, 2, 3];
/// assert_eq!(list.to_vec(), vec![1, 2, 3]);
///
/// let empty: ventanilla::PersistentList<i32> = plist![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! plist {
    () => {
        $crate::persistent::PersistentList::new()
    };
    ($($value:expr),+ $(,)?) => {
        [$($value),+]
            .into_iter()
            .collect::<$crate::persistent::PersistentList<_>>()
    };
}
