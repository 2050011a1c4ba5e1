//! small string-search helpers used to pull counts out of `git status` lines
//!
//! all functions work on borrowed `&str` views and never panic on short or
//! oddly shaped input; anything that cannot be parsed comes back as zero

/// index of the last `needle` strictly before byte offset `end`
pub fn rfind_before(haystack: &str, needle: char, end: usize) -> Option<usize> {
    // only ascii needles, so a byte match is always a char boundary
    let needle = u8::try_from(needle).ok().filter(u8::is_ascii)?;
    let end = end.min(haystack.len());
    haystack.as_bytes()[..end].iter().rposition(|&b| b == needle)
}

/// parse the run of ascii digits at the start of `text`, 0 if there is none
pub fn parse_leading_count(text: &str) -> u32 {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    text[..digits].parse().unwrap_or(0)
}

/// drop a trailing `\n` (and `\r` before it) if present
pub fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// count from "Your branch is ahead of 'origin/main' by 3 commits."
///
/// the number sits between the second-to-last and the last space
pub fn ahead_count(line: &str) -> u32 {
    count_before(line, line.len())
}

/// count from "Your branch is behind 'origin/main' by 3 commits, and can be fast-forwarded."
///
/// same as [`ahead_count`] but anchored on the last comma instead of the line end
pub fn behind_count(line: &str) -> u32 {
    let comma = rfind_before(line, ',', line.len()).unwrap_or(line.len());
    count_before(line, comma)
}

/// (local, remote) from "and have 2 and 5 different commits each, respectively."
pub fn diverged_counts(line: &str) -> (u32, u32) {
    const MARKER: &str = "and have ";
    let rest = line.find(MARKER).map_or(line, |i| &line[i + MARKER.len()..]);

    let mut words = rest.split(' ');
    let local = words.next().map_or(0, parse_leading_count);
    // skip the "and" between the two numbers
    words.next();
    let remote = words.next().map_or(0, parse_leading_count);
    (local, remote)
}

/// number starting right after the second space before `end`
fn count_before(line: &str, end: usize) -> u32 {
    let Some(right) = rfind_before(line, ' ', end) else {
        return 0;
    };
    let start = rfind_before(line, ' ', right).map_or(0, |left| left + 1);
    parse_leading_count(&line[start..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfind_before_from_the_end() {
        //              0123456789012
        let somestr = "one two three";
        assert_eq!(rfind_before(somestr, ' ', somestr.len()), Some(7));
        assert_eq!(rfind_before(somestr, ' ', 12), Some(7));
        assert_eq!(rfind_before(somestr, ' ', 8), Some(7));
    }

    #[test]
    fn test_rfind_before_crawling_left() {
        let somestr = "one two three";
        assert_eq!(rfind_before(somestr, ' ', 7), Some(3));
        assert_eq!(rfind_before(somestr, ' ', 4), Some(3));
        assert_eq!(rfind_before(somestr, ' ', 3), None);
        assert_eq!(rfind_before(somestr, 'x', somestr.len()), None);
    }

    #[test]
    fn test_rfind_before_clamps_end() {
        assert_eq!(rfind_before("a b", ' ', 100), Some(1));
        assert_eq!(rfind_before("", ' ', 5), None);
    }

    #[test]
    fn test_rfind_before_ignores_multibyte_needle() {
        assert_eq!(rfind_before("a➡b", '➡', 10), None);
    }

    #[test]
    fn test_parse_leading_count() {
        assert_eq!(parse_leading_count("42 commits"), 42);
        assert_eq!(parse_leading_count("7"), 7);
        assert_eq!(parse_leading_count("commits"), 0);
        assert_eq!(parse_leading_count(""), 0);
        assert_eq!(parse_leading_count("-3"), 0);
        assert_eq!(parse_leading_count("99999999999999999999"), 0);
    }

    #[test]
    fn test_strip_line_terminator() {
        assert_eq!(strip_line_terminator("main\n"), "main");
        assert_eq!(strip_line_terminator("main\r\n"), "main");
        assert_eq!(strip_line_terminator("main"), "main");
        assert_eq!(strip_line_terminator("\n"), "");
    }

    #[test]
    fn test_ahead_count() {
        assert_eq!(
            ahead_count("Your branch is ahead of 'origin/master' by 1 commit."),
            1
        );
        assert_eq!(
            ahead_count("Your branch is ahead of 'origin/feature' by 12 commits."),
            12
        );
    }

    #[test]
    fn test_behind_count() {
        assert_eq!(
            behind_count(
                "Your branch is behind 'origin/master' by 3 commits, and can be fast-forwarded."
            ),
            3
        );
    }

    #[test]
    fn test_behind_count_without_comma_falls_back_to_line_end() {
        assert_eq!(
            behind_count("Your branch is behind 'origin/master' by 4 commits."),
            4
        );
    }

    #[test]
    fn test_diverged_counts() {
        assert_eq!(
            diverged_counts("and have 2 and 5 different commits each, respectively."),
            (2, 5)
        );
        assert_eq!(
            diverged_counts("and have 10 and 1 different commits each, respectively."),
            (10, 1)
        );
    }

    #[test]
    fn test_garbage_yields_zero() {
        assert_eq!(ahead_count("nospaces"), 0);
        assert_eq!(ahead_count("Your branch is ahead of nowhere."), 0);
        assert_eq!(behind_count(","), 0);
        assert_eq!(diverged_counts(""), (0, 0));
        assert_eq!(diverged_counts("and have lots and lots"), (0, 0));
    }
}
