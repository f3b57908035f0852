//! Palindrome centers and symmetric expansion.

/// Axis of symmetry for a candidate palindrome.
///
/// `left` and `right` are the first pair of positions compared. An odd
/// center compares a position with itself, an even center compares a
/// position with its right neighbour. `left <= right` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Center {
    left: usize,
    right: usize,
}

impl Center {
    /// Center on the character at `i`.
    pub fn odd(i: usize) -> Self {
        Self { left: i, right: i }
    }

    /// Center on the gap between `i` and `i + 1`.
    pub fn even(i: usize) -> Self {
        Self {
            left: i,
            right: i + 1,
        }
    }

    pub fn left(&self) -> usize {
        self.left
    }

    pub fn right(&self) -> usize {
        self.right
    }

    /// Grow outward while both ends are in bounds and equal, returning the
    /// length of the palindrome found.
    ///
    /// The length is `right - left - 1` taken on the indices at which
    /// expansion stopped. When expansion walks off the front of `seq` the
    /// stopping `left` would be -1, so that case is folded into
    /// `right - left + 1` on the last matched pair instead.
    pub fn expand<T: PartialEq>(&self, seq: &[T]) -> usize {
        let (mut left, mut right) = (self.left, self.right);
        loop {
            // Bounds first: `left <= right`, so `right < len` covers both.
            if right >= seq.len() || seq[left] != seq[right] {
                return (right - left).saturating_sub(1);
            }
            if left == 0 {
                return right - left + 1;
            }
            left -= 1;
            right += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn odd_center_is_at_least_one() {
        let seq = chars("abc");
        assert_eq!(Center::odd(0).expand(&seq), 1);
        assert_eq!(Center::odd(1).expand(&seq), 1);
        assert_eq!(Center::odd(2).expand(&seq), 1);
    }

    #[test]
    fn even_center_without_pair_is_zero() {
        let seq = chars("abc");
        assert_eq!(Center::even(0).expand(&seq), 0);
        // Gap after the last character is out of bounds.
        assert_eq!(Center::even(2).expand(&seq), 0);
    }

    #[test]
    fn expands_to_both_edges() {
        assert_eq!(Center::odd(3).expand(&chars("racecar")), 7);
        assert_eq!(Center::even(1).expand(&chars("abba")), 4);
    }

    #[test]
    fn stops_at_first_mismatch() {
        let seq = chars("xabay");
        assert_eq!(Center::odd(2).expand(&seq), 3);
        let seq = chars("cbbd");
        assert_eq!(Center::even(1).expand(&seq), 2);
    }

    #[test]
    fn out_of_range_center_is_empty() {
        let seq: Vec<u8> = Vec::new();
        assert_eq!(Center::odd(0).expand(&seq), 0);
        assert_eq!(Center::even(0).expand(&seq), 0);
    }

    #[test]
    fn works_on_arbitrary_element_types() {
        let tokens = ["the", "cat", "the"];
        assert_eq!(Center::odd(1).expand(&tokens), 3);
        assert_eq!(Center::even(0).expand(b"aa".as_slice()), 2);
    }
}
