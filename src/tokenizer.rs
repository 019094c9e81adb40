//! Source-engine style token parser
//!
//! [`SourceTokenizer`] extracts one token per call and returns the remainder
//! of the buffer, the same contract as the engine's `ParseFile`:
//!
//! ```
//! use cvarcfg::{SourceTokenizer, TokenParser};
//!
//! let tok = SourceTokenizer;
//! let (name, rest) = tok.parse_token(r#"sm_sample_rate "5" // per second"#);
//! assert_eq!(name, Some("sm_sample_rate"));
//!
//! let (value, rest) = tok.parse_token(rest);
//! assert_eq!(value, Some("5"));
//!
//! // The trailing comment is skipped
//! assert_eq!(tok.parse_token(rest).0, None);
//! ```

use crate::host::TokenParser;

/// Size of the engine's token buffer; tokens keep at most `MAX_TOKEN_LEN - 1` bytes
pub const MAX_TOKEN_LEN: usize = 1024;

/// Characters that always form a token of their own
const BREAK_CHARS: &[char] = &['{', '}', '(', ')', '\''];

/// Default [`TokenParser`] following the Source engine rules
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceTokenizer;

impl TokenParser for SourceTokenizer {
    fn parse_token<'a>(&self, buf: &'a str) -> (Option<&'a str>, &'a str) {
        let mut rest = buf;

        // Skip whitespace and `//` comments
        loop {
            rest = rest.trim_start_matches(|c: char| c <= ' ');
            if rest.is_empty() {
                return (None, rest);
            }
            if let Some(comment) = rest.strip_prefix("//") {
                rest = comment.find('\n').map_or("", |i| &comment[i + 1..]);
                continue;
            }
            break;
        }

        // Quoted string; an unterminated quote yields nothing
        if let Some(quoted) = rest.strip_prefix('"') {
            return match quoted.find('"') {
                Some(end) => (Some(truncate(&quoted[..end])), &quoted[end + 1..]),
                None => (None, ""),
            };
        }

        // Single character tokens
        let first = rest.chars().next().unwrap_or_default();
        if BREAK_CHARS.contains(&first) {
            let len = first.len_utf8();
            return (Some(&rest[..len]), &rest[len..]);
        }

        // Regular word
        let end = rest
            .find(|c: char| c <= ' ' || c == '"' || BREAK_CHARS.contains(&c))
            .unwrap_or(rest.len());
        (Some(truncate(&rest[..end])), &rest[end..])
    }
}

/// Cut a token to the engine buffer size on a char boundary
fn truncate(token: &str) -> &str {
    if token.len() < MAX_TOKEN_LEN {
        return token;
    }
    let mut end = MAX_TOKEN_LEN - 1;
    while !token.is_char_boundary(end) {
        end -= 1;
    }
    &token[..end]
}
