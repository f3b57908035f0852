use palindrome_analysis::{is_palindrome, longest_palindrome_span, longest_palindromic_substring};
use proptest::prelude::*;

/// Reference answer: try every substring, longest first, leftmost first.
fn brute_force_span(chars: &[char]) -> (usize, usize) {
    for len in (1..=chars.len()).rev() {
        for start in 0..=chars.len() - len {
            if is_palindrome(&chars[start..start + len]) {
                return (start, len);
            }
        }
    }
    (0, 0)
}

proptest! {
    #[test]
    fn result_is_palindromic_substring(s in ".{0,64}") {
        let result = longest_palindromic_substring(&s);
        prop_assert!(s.contains(result));
        let chars: Vec<char> = result.chars().collect();
        prop_assert!(is_palindrome(&chars));
    }

    #[test]
    fn result_is_maximal_and_leftmost(s in "[ab]{0,40}") {
        // Two-letter alphabet forces many long palindromes and ties.
        let chars: Vec<char> = s.chars().collect();
        let span = longest_palindrome_span(&chars);
        prop_assert_eq!((span.start, span.len), brute_force_span(&chars));
    }

    #[test]
    fn matches_oracle_on_mixed_alphabet(s in "[abcé✓]{0,30}") {
        let chars: Vec<char> = s.chars().collect();
        let (start, len) = brute_force_span(&chars);
        let expected: String = chars[start..start + len].iter().collect();
        prop_assert_eq!(longest_palindromic_substring(&s), expected.as_str());
    }

    #[test]
    fn idempotent(s in ".{0,64}") {
        let once = longest_palindromic_substring(&s);
        prop_assert_eq!(longest_palindromic_substring(once), once);
    }

    #[test]
    fn non_empty_input_gives_non_empty_result(s in ".{1,64}") {
        prop_assert!(!longest_palindromic_substring(&s).is_empty());
    }

    #[test]
    fn mirrored_input_is_returned_whole(s in "[a-z]{0,20}") {
        let mirrored: String = s.chars().chain(s.chars().rev()).collect();
        prop_assert_eq!(longest_palindromic_substring(&mirrored), mirrored.as_str());
    }
}
