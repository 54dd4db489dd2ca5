use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, PercentEncode};

/// The URI component percent-encode set.
///
/// Everything is encoded except the ASCII alphanumerics and
/// U+002D (-), U+005F (_), U+002E (.), U+0021 (!), U+007E (~), U+002A (*),
/// U+0027 ('), U+0028 ((), and U+0029 ()).
///
/// Brackets, `=` and `&` are all encoded, so keys and values can never
/// be confused with the querystring structure around them.
const URI_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a key or value as a URI component.
///
/// Non-ASCII characters are encoded as their UTF-8 bytes. Spaces become
/// `%20`. The returned iterator yields borrowed slices of the input
/// wherever nothing needs encoding.
pub fn encode(input: &str) -> PercentEncode<'_> {
    percent_encoding::utf8_percent_encode(input, URI_COMPONENT_SET)
}

/// Returns `true` if `input` would come out of [`encode`] unchanged.
pub fn is_unreserved(input: &str) -> bool {
    input.bytes().all(|b| {
        b.is_ascii_alphanumeric()
            || matches!(b, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
    })
}
