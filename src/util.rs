use crate::Error;

/// What happened during a call to [`Tree::insert`][crate::unbalanced::Tree::insert].
#[must_use = "a duplicate key is reported here instead of modifying the tree"]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Insertion {
    /// The key wasn't in the tree so a new node now holds it.
    Inserted,
    /// The key was already in the tree. The tree was left untouched.
    AlreadyPresent,
}

impl Insertion {
    /// Whether a new node was added.
    pub fn is_inserted(self) -> bool {
        self == Self::Inserted
    }

    /// Turns a duplicate into an [`Error::Duplicate`] carrying `key` so it can be
    /// propagated with `?`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::{unbalanced::Tree, Error};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.insert(2).into_result(2), Ok(()));
    ///
    /// let err = tree.insert(2).into_result(2).unwrap_err();
    /// assert_eq!(err, Error::Duplicate(2));
    /// assert_eq!(err.to_string(), "The number 2 already exists in the BST.");
    /// ```
    pub fn into_result<K>(self, key: K) -> Result<(), Error<K>> {
        match self {
            Self::Inserted => Ok(()),
            Self::AlreadyPresent => Err(Error::Duplicate(key)),
        }
    }
}
