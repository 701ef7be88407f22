//! # Status messages
//!
//! Maps an HTTP status code to the reason phrase placed in error bodies.
//! Codes outside the table are not an error: they map to
//! [`UNKNOWN_ERROR`].

/// Reason phrase for codes missing from the catalog.
pub const UNKNOWN_ERROR: &str = "Unknown Error";

const CATALOG: &[(i32, &str)] = &[
    (400, "Bad Request"),
    (401, "Unauthorized"),
    (403, "Forbidden"),
    (404, "Not Found"),
    (405, "Method Not Allowed"),
    (406, "Not Acceptable"),
    (408, "Request Timeout"),
    (409, "Conflict"),
    (410, "Gone"),
    (415, "Unsupported Media Type"),
    (429, "Too Many Requests"),
    (500, "Internal Server Error"),
    (501, "Not Implemented"),
    (502, "Bad Gateway"),
    (503, "Service Unavailable"),
    (504, "Gateway Timeout"),
];

/// Return the reason phrase for a status code.
pub fn reason_phrase(code: i32) -> &'static str {
    CATALOG
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, phrase)| *phrase)
        .unwrap_or(UNKNOWN_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! phrase {
        ($code:expr, $phrase:expr) => {
            paste::paste! {
                #[test]
                fn [<reason_phrase_ $code>]() {
                    assert_eq!(reason_phrase($code), $phrase);
                }
            }
        };
    }

    phrase!(400, "Bad Request");
    phrase!(401, "Unauthorized");
    phrase!(403, "Forbidden");
    phrase!(404, "Not Found");
    phrase!(405, "Method Not Allowed");
    phrase!(406, "Not Acceptable");
    phrase!(408, "Request Timeout");
    phrase!(409, "Conflict");
    phrase!(410, "Gone");
    phrase!(415, "Unsupported Media Type");
    phrase!(429, "Too Many Requests");
    phrase!(500, "Internal Server Error");
    phrase!(501, "Not Implemented");
    phrase!(502, "Bad Gateway");
    phrase!(503, "Service Unavailable");
    phrase!(504, "Gateway Timeout");

    #[test]
    fn reason_phrase_unknown() {
        for code in [-1, 0, 100, 200, 299, 402, 418, 505, 599, 799, i32::MAX] {
            assert_eq!(reason_phrase(code), UNKNOWN_ERROR, "code {}", code);
        }
    }
}
