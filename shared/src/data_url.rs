use crate::error::PreviewError;

const SCHEME: &str = "data:";

/// A `data:` URL as produced by the browser's file reader.
///
/// Parsing only checks the scheme. Browsers emit a bare `data:` for empty
/// files, so the header and payload may both be missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl(String);

impl DataUrl {
    pub fn parse(raw: impl Into<String>) -> Result<Self, PreviewError> {
        let raw = raw.into();
        let has_scheme = raw
            .get(..SCHEME.len())
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case(SCHEME));
        if !has_scheme {
            return Err(PreviewError::InvalidDataUrl(truncate(&raw, 32)));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn media_type(&self) -> &str {
        let rest = &self.0[SCHEME.len()..];
        let header = rest.split_once(',').map_or(rest, |(header, _)| header);
        header.split(';').next().unwrap_or_default()
    }
}

fn truncate(raw: &str, max: usize) -> String {
    match raw.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &raw[..idx]),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_media_type_from_header() {
        let url = DataUrl::parse("data:image/png;base64,iVBORw==").unwrap();
        assert_eq!(url.as_str(), "data:image/png;base64,iVBORw==");
        assert_eq!(url.media_type(), "image/png");
    }

    #[test]
    fn accepts_bare_scheme_for_empty_files() {
        let url = DataUrl::parse("data:").unwrap();
        assert_eq!(url.media_type(), "");
    }

    #[test]
    fn scheme_is_case_insensitive() {
        let url = DataUrl::parse("DATA:image/gif;base64,R0lGOD").unwrap();
        assert_eq!(url.media_type(), "image/gif");
    }

    #[test]
    fn rejects_other_schemes() {
        let err = DataUrl::parse("blob:https://admin.example/8c1f").unwrap_err();
        assert!(matches!(err, PreviewError::InvalidDataUrl(_)));
        assert!(DataUrl::parse("").is_err());
    }

    #[test]
    fn error_message_is_truncated() {
        let long = format!("https://{}", "a".repeat(100));
        match DataUrl::parse(long) {
            Err(PreviewError::InvalidDataUrl(shown)) => {
                assert_eq!(shown.len(), 35);
                assert!(shown.ends_with("..."));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
