//! Tab completion against the command table.

use crate::commands::definitions;

/// Separator between candidates when several commands match.
const CANDIDATE_SEPARATOR: &str = "    ";

/// What Tab should do with the current input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Nothing matches. Leave everything alone.
    None,
    /// Exactly one command matches. Replace the input with it.
    Single(&'static str),
    /// Several commands match, in table order.
    Multiple(Vec<&'static str>),
}

impl Completion {
    /// The informational line listing several candidates.
    pub fn listing(candidates: &[&str]) -> String {
        candidates.join(CANDIDATE_SEPARATOR)
    }
}

/// Commands whose name starts with the lowercased partial input.
///
/// The partial input is not trimmed, so `"cr "` only matches the short aliases.
pub fn complete(partial: &str) -> Completion {
    let needle = partial.to_lowercase();
    let mut matches: Vec<&'static str> = definitions::names()
        .filter(|name| name.starts_with(&needle))
        .collect();

    match matches.len() {
        0 => Completion::None,
        1 => Completion::Single(matches.remove(0)),
        _ => Completion::Multiple(matches),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_match() {
        assert_eq!(complete("cl"), Completion::Single("clear"));
        assert_eq!(complete("crombo -a"), Completion::Single("crombo -about"));
    }

    #[test]
    fn test_case_insensitive_prefix() {
        assert_eq!(complete("EX"), Completion::Single("exit"));
        assert_eq!(complete("CR -He"), Completion::Single("cr -help"));
    }

    #[test]
    fn test_multiple_matches_in_table_order() {
        assert_eq!(
            complete("cr -c"),
            Completion::Multiple(vec!["cr -certs", "cr -challs", "cr -contact"])
        );
    }

    #[test]
    fn test_shared_prefix_of_both_aliases() {
        let Completion::Multiple(all) = complete("cr") else {
            panic!("expected multiple matches");
        };
        assert_eq!(all.len(), 16);
        assert_eq!(all[0], "cr -help");
        assert_eq!(all[1], "crombo -help");
    }

    #[test]
    fn test_no_match() {
        assert_eq!(complete("xyz"), Completion::None);
        assert_eq!(complete("ls -la"), Completion::None);
    }

    #[test]
    fn test_complete_command_still_matches_itself() {
        assert_eq!(complete("exit"), Completion::Single("exit"));
    }

    #[test]
    fn test_empty_input_lists_everything() {
        let Completion::Multiple(all) = complete("") else {
            panic!("expected multiple matches");
        };
        assert_eq!(all.len(), definitions::COMMANDS.len());
    }

    #[test]
    fn test_listing_uses_four_spaces() {
        assert_eq!(
            Completion::listing(&["cr -certs", "cr -challs"]),
            "cr -certs    cr -challs"
        );
    }
}
