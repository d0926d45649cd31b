//! Claim names are permanent public identifiers, so the set of removed
//! characters below must not drift.

/// Characters deleted from a base name to form a claim name.
pub const UNSAFE_CLAIM_CHARS: &[char] = &[
    ' ', '(', ')', '?', '@', '.', '/', ':', '#', ';', '：', '，', '‧', '[', ']',
];

/// Strips every unsafe character outright; nothing is escaped.
pub fn sanitize_claim_name(base_name: &str) -> String {
    base_name
        .chars()
        .filter(|c| !UNSAFE_CLAIM_CHARS.contains(c))
        .collect()
}

/// `lbry://{name}#{claim_id}`
pub fn claim_url(name: &str, claim_id: &str) -> String {
    format!("lbry://{name}#{claim_id}")
}

/// Odysee web link for a claim's `lbry://` permanent URL, under the
/// publishing channel. `None` when the URL is not an `lbry://` one.
pub fn odysee_url(channel_name: &str, permanent_url: &str) -> Option<String> {
    let channel = channel_name.trim_start_matches('@');
    permanent_url
        .strip_prefix("lbry://")
        .map(|rest| format!("https://odysee.com/@{channel}/{rest}"))
}
