use thiserror::Error;

/// Errors for callers that want a rejected insert to be a failure.
/// See [`Insertion::into_result`][crate::Insertion::into_result].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error<K> {
    /// The key was already in the tree so nothing was inserted.
    #[error("The number {0} already exists in the BST.")]
    Duplicate(K),
}

/// Errors from [`Game::bowl`][crate::bowling::Game::bowl].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BowlingError {
    /// A roll can't knock down fewer than zero pins. The game is left as it was.
    #[error("Cannot knock down negative pins. Bowl again.")]
    NegativePins(i32),
}
