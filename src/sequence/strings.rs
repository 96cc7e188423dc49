// src/sequence/strings.rs

/// Reverses `s` by Unicode scalar value.
pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

/// True when `s` reads the same in both directions, comparing characters from
/// the ends inward over the first half.
pub fn is_palindrome(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    (0..n / 2).all(|i| chars[i] == chars[n - 1 - i])
}
