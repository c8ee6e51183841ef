//! Longest common substring and shared word endings.
//!
//! Strings are compared as grapheme clusters so that letters such as "å" or a
//! decomposed "é" count as one unit.

use ndarray::Array2;
use unicode_segmentation::UnicodeSegmentation;

/// Longest run of items shared by `a` and `b`, as a slice of `a`.
///
/// Ties between runs of equal length resolve to the one found last in a
/// row-major scan over `a`, i.e. the rightmost run in `a`.
pub fn longest_common_slice<'a, T: PartialEq>(a: &'a [T], b: &[T]) -> &'a [T] {
    let len_a = a.len();
    let len_b = b.len();

    // dp[[i, j]] = length of the common run ending at a[i - 1] and b[j - 1]
    let mut dp = Array2::<usize>::zeros((len_a + 1, len_b + 1));
    let mut longest = 0;
    let mut end = 0;

    for i in 1..=len_a {
        for j in 1..=len_b {
            if a[i - 1] == b[j - 1] {
                let run = dp[[i - 1, j - 1]] + 1;
                dp[[i, j]] = run;
                if run >= longest {
                    longest = run;
                    end = i;
                }
            }
        }
    }

    &a[end - longest..end]
}

/// Longest common substring of two strings
pub fn longest_common_substring(string1: &str, string2: &str) -> String {
    let segments_a: Vec<&str> = string1.graphemes(true).collect();
    let segments_b: Vec<&str> = string2.graphemes(true).collect();

    longest_common_slice(&segments_a, &segments_b).concat()
}

/// Longest common suffix of two strings
pub fn shared_ending_substring(string1: &str, string2: &str) -> String {
    let shared: Vec<&str> = string1
        .graphemes(true)
        .rev()
        .zip(string2.graphemes(true).rev())
        .take_while(|(a, b)| a == b)
        .map(|(a, _)| a)
        .collect();

    shared.into_iter().rev().collect()
}
