//! Small algorithms built on the linked primitives.

mod dedup;
mod palindrome;

pub use dedup::remove_duplicates;
pub use palindrome::is_palindrome;
