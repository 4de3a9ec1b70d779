//! Content types served by the responder.
//!
//! Only four image extensions are recognized; everything else, including a
//! missing extension, is served as HTML.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Html,
    Png,
    Jpg,
    Gif,
    Icon,
}

impl ContentType {
    /// Picks the content type for a file extension (without the dot).
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "png" => ContentType::Png,
            "jpg" => ContentType::Jpg,
            "gif" => ContentType::Gif,
            "ico" => ContentType::Icon,
            _ => ContentType::Html,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Html => "text/html",
            ContentType::Png => "image/png",
            ContentType::Jpg => "image/jpg",
            ContentType::Gif => "image/gif",
            ContentType::Icon => "image/x-icon",
        }
    }

    /// Images are streamed as raw bytes; everything else goes through
    /// template substitution.
    pub fn is_image(&self) -> bool {
        !matches!(self, ContentType::Html)
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
