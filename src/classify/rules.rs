//! Ordered classification rule table
//!
//! Rule priority is fixed: the table is evaluated top to bottom and the
//! first matching rule wins. Overlapping triggers are expected (a message
//! may contain both "timeout" and "server"); the fixed order makes the
//! outcome deterministic. The order is:
//!
//! 1. Conflict
//! 2. NetworkUnavailable
//! 3. ValidationRejected
//! 4. Timeout
//! 5. ServerFault (any 5xx code)
//! 6. Unauthorized
//! 7. Forbidden
//! 8. NotFound
//! 9. RateLimited
//!
//! No match falls through to `Unknown`. Text matching is a fallback for
//! upstreams that cannot emit a status code; when a code is present it is
//! matched alongside the needles.

use super::kinds::ErrorKind;

/// One predicate -> kind pair in the ordered table.
struct Rule {
    kind: ErrorKind,
    /// Substrings matched case-insensitively against the message
    needles: &'static [&'static str],
    /// Exact status codes
    codes: &'static [u16],
    /// Whole status class (5 matches 500..=599)
    code_class: Option<u16>,
}

impl Rule {
    fn matches(&self, message: &str, code: Option<u16>) -> bool {
        if self.needles.iter().any(|needle| message.contains(needle)) {
            return true;
        }
        if let Some(code) = code {
            if self.codes.contains(&code) {
                return true;
            }
            if let Some(class) = self.code_class {
                if code / 100 == class {
                    return true;
                }
            }
        }
        false
    }
}

const RULES: &[Rule] = &[
    Rule {
        kind: ErrorKind::Conflict,
        needles: &["already exists", "duplicate"],
        codes: &[409],
        code_class: None,
    },
    Rule {
        kind: ErrorKind::NetworkUnavailable,
        needles: &["network", "connection", "offline"],
        codes: &[],
        code_class: None,
    },
    Rule {
        kind: ErrorKind::ValidationRejected,
        needles: &["validation", "invalid"],
        codes: &[400, 422],
        code_class: None,
    },
    Rule {
        kind: ErrorKind::Timeout,
        needles: &["timeout", "timed out"],
        codes: &[408],
        code_class: None,
    },
    Rule {
        kind: ErrorKind::ServerFault,
        needles: &["server", "internal error"],
        codes: &[],
        code_class: Some(5),
    },
    Rule {
        kind: ErrorKind::Unauthorized,
        needles: &["unauthorized", "session expired"],
        codes: &[401],
        code_class: None,
    },
    Rule {
        kind: ErrorKind::Forbidden,
        needles: &["forbidden", "permission denied"],
        codes: &[403],
        code_class: None,
    },
    Rule {
        kind: ErrorKind::NotFound,
        needles: &["not found"],
        codes: &[404],
        code_class: None,
    },
    Rule {
        kind: ErrorKind::RateLimited,
        needles: &["rate limit", "too many requests"],
        codes: &[429],
        code_class: None,
    },
];

/// Resolves a raw signal to a kind; `Unknown` when nothing matches.
pub(crate) fn match_kind(message: &str, code: Option<u16>) -> ErrorKind {
    let message = message.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&message, code))
        .map(|rule| rule.kind)
        .unwrap_or(ErrorKind::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needle_matching_is_case_insensitive() {
        assert_eq!(match_kind("User ALREADY EXISTS", None), ErrorKind::Conflict);
        assert_eq!(match_kind("Network request failed", None), ErrorKind::NetworkUnavailable);
    }

    #[test]
    fn test_code_matching() {
        assert_eq!(match_kind("", Some(409)), ErrorKind::Conflict);
        assert_eq!(match_kind("", Some(401)), ErrorKind::Unauthorized);
        assert_eq!(match_kind("", Some(403)), ErrorKind::Forbidden);
        assert_eq!(match_kind("", Some(404)), ErrorKind::NotFound);
        assert_eq!(match_kind("", Some(429)), ErrorKind::RateLimited);
        assert_eq!(match_kind("", Some(422)), ErrorKind::ValidationRejected);
    }

    #[test]
    fn test_any_5xx_is_a_server_fault() {
        for code in [500, 502, 503, 599] {
            assert_eq!(match_kind("", Some(code)), ErrorKind::ServerFault);
        }
    }

    #[test]
    fn test_timeout_outranks_server_fault() {
        // both needles present; the table order decides
        assert_eq!(
            match_kind("504 Gateway Timeout while calling server", None),
            ErrorKind::Timeout
        );
    }

    #[test]
    fn test_timeout_needle_outranks_5xx_code() {
        assert_eq!(
            match_kind("Gateway Timeout", Some(504)),
            ErrorKind::Timeout
        );
    }

    #[test]
    fn test_connection_outranks_timeout() {
        assert_eq!(
            match_kind("connection timeout", None),
            ErrorKind::NetworkUnavailable
        );
    }

    #[test]
    fn test_no_match_is_unknown() {
        assert_eq!(match_kind("", None), ErrorKind::Unknown);
        assert_eq!(match_kind("something odd happened", None), ErrorKind::Unknown);
        assert_eq!(match_kind("", Some(302)), ErrorKind::Unknown);
    }
}
