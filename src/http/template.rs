//! In-band tag substitution for served text files.

/// Replaced with the response date.
pub const DATE_TAG: &[u8] = b"<cs371date>";
/// Replaced with the server identity phrase.
pub const SERVER_TAG: &[u8] = b"<cs371server>";

/// Values available to templates for one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateContext {
    pub date: String,
    pub server: String,
}

impl TemplateContext {
    pub fn new(date: impl Into<String>, server: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            server: server.into(),
        }
    }

    /// Substitutes both tags across the whole buffer.
    ///
    /// Works on raw bytes so the rest of the file, line endings and any
    /// non-UTF-8 content included, is passed through untouched.
    pub fn render(&self, content: &[u8]) -> Vec<u8> {
        let dated = replace_all(content, DATE_TAG, self.date.as_bytes());
        replace_all(&dated, SERVER_TAG, self.server.as_bytes())
    }
}

/// Replaces every non-overlapping occurrence of `needle`, scanning left to right.
pub fn replace_all(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> Vec<u8> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return haystack.to_vec();
    }

    let mut out = Vec::with_capacity(haystack.len());
    let mut rest = haystack;

    while let Some(idx) = find(rest, needle) {
        out.extend_from_slice(&rest[..idx]);
        out.extend_from_slice(replacement);
        rest = &rest[idx + needle.len()..];
    }
    out.extend_from_slice(rest);

    out
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
