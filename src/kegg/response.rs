//! Interpretation of KEGG REST text responses.
//!
//! Every KEGG response is a sequence of lines with the queried key in the
//! first tab-separated column and the linked entry in the second one. Lines
//! with fewer than two columns, or with an empty second column, carry no
//! information and are skipped.

/// Iterate over the linked entries (second column) of a response.
pub fn linked(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .filter_map(|line| line.split('\t').nth(1))
        .map(str::trim)
        .filter(|field| !field.is_empty())
}

/// Get the linked entry of the first qualifying line of a response.
///
/// Any other line is ignored, even if it links the key to another entry:
/// the first qualifying line wins.
pub fn first_match(text: &str) -> Option<&str> {
    linked(text).next()
}

/// Get the linked entries at odd positions (1, 3, 5, ...) of a response.
///
/// `link/pathway` lists every pathway of an orthology group twice, first
/// as a generic `map` pathway and then as its `ko` counterpart, so only
/// the second entry of each pair is kept.
pub fn all_matches(text: &str) -> Vec<&str> {
    linked(text).skip(1).step_by(2).collect()
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn first_match_single() {
        assert_eq!(first_match("up:Q5ZL74\tgga:422297\n"), Some("gga:422297"));
    }

    #[test]
    fn first_match_wins() {
        let text = "up:P0\thsa:1\nup:P0\tmmu:2\n";
        assert_eq!(first_match(text), Some("hsa:1"));
    }

    #[test]
    fn first_match_skips_short_lines() {
        let text = "\nup:P0\nup:P0\t\nup:P0\thsa:1\n";
        assert_eq!(first_match(text), Some("hsa:1"));
    }

    #[test]
    fn first_match_empty() {
        assert_eq!(first_match(""), None);
        assert_eq!(first_match("\n"), None);
        assert_eq!(first_match("no tab here\n"), None);
    }

    #[test]
    fn all_matches_odd_positions() {
        let text = concat!(
            "ko:K1\tpath:map00010\n",
            "ko:K1\tpath:ko00010\n",
            "ko:K1\tpath:map00020\n",
            "ko:K1\tpath:ko00020\n",
            "ko:K1\tpath:map00030\n",
        );
        assert_eq!(all_matches(text), vec!["path:ko00010", "path:ko00020"]);
    }

    #[test]
    fn all_matches_single_line() {
        assert!(all_matches("ko:K1\tpath:map00010\n").is_empty());
    }

    #[test]
    fn all_matches_empty() {
        assert!(all_matches("").is_empty());
        assert!(all_matches("\n").is_empty());
    }

    #[test]
    fn all_matches_crlf() {
        let text = "ko:K1\tpath:map04130\r\nko:K1\tpath:ko04130\r\n";
        assert_eq!(all_matches(text), vec!["path:ko04130"]);
    }
}
