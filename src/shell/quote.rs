//! Shell-safe quoting for composed command lines.
//!
//! Every value that crosses into a constructed command line goes through
//! [`quote`] (or [`quote_path`]); unquoted interpolation is treated as a
//! defect. Quoting is delegated to the `shell-words` crate.

use std::borrow::Cow;
use std::path::Path;

/// Quote a value for safe inclusion in a shell command line.
///
/// Plain words pass through unchanged; anything with whitespace, quotes, or
/// shell metacharacters comes back single-quoted with embedded quotes
/// escaped.
pub fn quote(value: &str) -> Cow<'_, str> {
    shell_words::quote(value)
}

/// Quote a filesystem path for safe inclusion in a shell command line.
pub fn quote_path(path: &Path) -> String {
    shell_words::quote(&path.to_string_lossy()).into_owned()
}

/// Quote and join multiple words into a single command-line fragment.
pub fn join<I, S>(words: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    shell_words::join(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn plain_word_passes_through() {
        assert_eq!(quote("nginx"), "nginx");
    }

    #[test]
    fn value_with_spaces_is_quoted() {
        let quoted = quote("path with spaces");
        assert!(quoted.starts_with('\''));
        assert!(quoted.ends_with('\''));
    }

    #[test]
    fn single_quote_is_escaped() {
        let quoted = quote("it's fine");
        assert!(quoted.contains("it"));
        assert!(quoted.contains("fine"));
        // The embedded quote must not terminate the quoted region.
        assert_ne!(quoted, "'it's fine'");
    }

    #[test]
    fn injection_attempt_is_neutralized() {
        let quoted = quote("foo; rm -rf /");
        assert!(quoted.starts_with('\''));
    }

    #[test]
    fn quote_path_handles_spaces() {
        let path = PathBuf::from("/var/www/my site");
        let quoted = quote_path(&path);
        assert!(quoted.starts_with('\''));
        assert!(quoted.contains("my site"));
    }

    #[test]
    fn join_quotes_each_word() {
        let joined = join(["php8.3-fpm", "lib foo"]);
        assert!(joined.starts_with("php8.3-fpm "));
        assert!(joined.contains('\''));
    }

    #[test]
    fn empty_value_becomes_empty_quotes() {
        assert_eq!(quote(""), "''");
    }
}
