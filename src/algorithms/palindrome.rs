use alloc::vec::Vec;

use crate::stack::Stack;

/// Checks whether `text` reads the same forward and backward.
///
/// The text is lower-cased first, then every character that is not an
/// ASCII letter or digit is dropped.
///
/// Text with nothing left after normalization is not a palindrome.
///
/// The first half is pushed on a [`Stack`] and popped against the second
/// half; a middle character of odd length text is skipped.
pub fn is_palindrome(text: &str) -> bool {
    let chars: Vec<char> = text
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();
    if chars.is_empty() {
        return false;
    }

    let middle = chars.len() / 2;
    let mut stack = Stack::new();
    for &c in &chars[..middle] {
        stack.push(c);
    }

    let second_half = &chars[chars.len() - middle..];
    second_half
        .iter()
        .all(|&c| stack.pop().is_ok_and(|top| top == c))
}
