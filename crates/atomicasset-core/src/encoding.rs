//! Percent-encoding rules for request URLs.
//!
//! Query keys, query values and path segments all keep only the RFC 3986
//! unreserved characters (`A-Z a-z 0-9 - _ . ~`) verbatim. Everything else is
//! escaped, including the `,` separating list elements and any `/`, `?` or
//! `#` in an id. Account and collection names only use `a-z 1-5 .`, so real
//! ids pass through unchanged.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything outside the unreserved set.
const NOT_UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a query key or value.
///
/// # Examples
///
/// ```
/// use atomicasset_core::encoding::encode_query_component;
///
/// assert_eq!(encode_query_component("a,b,c"), "a%2Cb%2Cc");
/// assert_eq!(encode_query_component("matrix.funko"), "matrix.funko");
/// ```
#[must_use]
pub fn encode_query_component(value: &str) -> String {
    utf8_percent_encode(value, NOT_UNRESERVED).to_string()
}

/// Percent-encode a value interpolated into a URL path.
///
/// # Examples
///
/// ```
/// use atomicasset_core::encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("1099835349411"), "1099835349411");
/// assert_eq!(encode_path_segment("a/b"), "a%2Fb");
/// ```
#[must_use]
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, NOT_UNRESERVED).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_component_unreserved_passthrough() {
        let value = "Abc-123_x.y~z";
        assert_eq!(encode_query_component(value), value);
    }

    #[test]
    fn query_component_escapes_separators() {
        assert_eq!(encode_query_component("a b"), "a%20b");
        assert_eq!(encode_query_component("k=v&x"), "k%3Dv%26x");
        assert_eq!(encode_query_component("1,2"), "1%2C2");
    }

    #[test]
    fn query_component_unicode() {
        assert_eq!(encode_query_component("é"), "%C3%A9");
    }

    #[test]
    fn path_segment_account_names_unchanged() {
        for name in ["zhl3g.c.wam", "matrix.funko", "atomicassets", "620698"] {
            assert_eq!(encode_path_segment(name), name);
        }
    }

    #[test]
    fn path_segment_special_chars() {
        let encoded = encode_path_segment("x/../y?z#w");
        assert!(!encoded.contains('/'), "/ should be encoded: {encoded}");
        assert!(!encoded.contains('?'), "? should be encoded: {encoded}");
        assert!(!encoded.contains('#'), "# should be encoded: {encoded}");
    }

    #[test]
    fn path_segment_escapes_outside_unreserved() {
        assert_eq!(encode_path_segment("a/b?c#d"), "a%2Fb%3Fc%23d");
        assert_eq!(encode_path_segment("[x] y"), "%5Bx%5D%20y");
        assert_eq!(encode_path_segment("a,b"), "a%2Cb");
        assert_eq!(encode_path_segment("res.wax-1_~"), "res.wax-1_~");
    }
}
