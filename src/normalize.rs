//! Hostname label normalization.
//!
//! Trie keys are stored in Unicode form, so ACE labels (`xn--...`) in a
//! hostname are punycode decoded before matching. Everything else is passed
//! through untouched; callers are expected to lowercase hostnames first.

use std::borrow::Cow;

/// ASCII compatible encoding prefix
const ACE_PREFIX: &str = "xn--";

/// Decode a single label to its Unicode form.
///
/// Labels without the `xn--` prefix are borrowed as-is. A prefixed label that
/// is not valid punycode is also kept verbatim.
pub fn decode_label(label: &str) -> Cow<'_, str> {
    match label.strip_prefix(ACE_PREFIX) {
        Some(encoded) => match idna::punycode::decode_to_string(encoded) {
            Some(decoded) => Cow::Owned(decoded),
            None => Cow::Borrowed(label),
        },
        None => Cow::Borrowed(label),
    }
}

/// Split a hostname on `.` and decode each label, keeping left-to-right order.
pub fn split_labels(hostname: &str) -> Vec<Cow<'_, str>> {
    hostname.split('.').map(decode_label).collect()
}
