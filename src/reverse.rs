//! Code point reversal used for right-to-left processing.
//!
//! Reversal is per `char`, not per grapheme cluster, so combining sequences
//! come out with their marks on the wrong side.

/// Reverse `s` one code point at a time.
pub fn reverse_codepoints(s: &str) -> String {
    s.chars().rev().collect()
}

/// Restore `\X` escape pairs in a pattern that has been through
/// [`reverse_codepoints`], where they appear as `X\`.
///
/// Scans left to right and swaps every backslash with the code point
/// before it. Only meaningful on a reversed pattern, applied once.
pub fn reverse_escape_adjacency(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    for i in 1..chars.len() {
        if chars[i] == '\\' {
            chars.swap(i - 1, i);
        }
    }
    chars.into_iter().collect()
}

/// Reverse a pattern and repair its escape pairs.
pub fn reverse_pattern(pattern: &str) -> String {
    reverse_escape_adjacency(&reverse_codepoints(pattern))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverses_by_code_point() {
        assert_eq!(reverse_codepoints("abc"), "cba");
        assert_eq!(reverse_codepoints("añb"), "bña");
        assert_eq!(reverse_codepoints(""), "");
    }

    #[test]
    fn combining_marks_move_with_reversal() {
        // 'e' + COMBINING ACUTE: the mark ends up before its base.
        assert_eq!(reverse_codepoints("e\u{301}x"), "x\u{301}e");
    }

    #[test]
    fn escape_pair_restored() {
        // "\>LL" reversed is "LL>\"
        assert_eq!(reverse_pattern(r"\>LL"), r"LL\>");
    }

    #[test]
    fn escape_in_middle() {
        assert_eq!(reverse_pattern(r"0\-0"), r"0\-0");
        assert_eq!(reverse_pattern(r"AB\-CD"), r"DC\-BA");
    }

    #[test]
    fn leading_backslash_is_left_alone() {
        assert_eq!(reverse_escape_adjacency(r"\ab"), r"\ab");
    }

    #[test]
    fn repair_is_a_single_left_to_right_pass() {
        // Each backslash moves one step left; a swapped backslash is not
        // revisited.
        assert_eq!(reverse_escape_adjacency(r"a\\"), r"\\a");
        assert_eq!(reverse_escape_adjacency(r"ab\c\"), r"a\b\c");
    }
}
