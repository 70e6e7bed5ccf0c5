//! The confirmation capability the Presentation Layer lends to the store.

/// Asks the user to confirm a destructive action.
///
/// Implemented for any `Fn(&str) -> bool`, so a dialog callback can be passed
/// directly.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}
