//! Parsing of share links into file keys and node ids.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("could not extract a file key from '{0}'")]
    InvalidFileUrl(String),
}

/// Link kinds that carry a file key in their path.
const LINK_KINDS: [&str; 4] = ["file", "design", "board", "proto"];

/// Extracts the file key from a share link. Anything that does not look
/// like a URL is assumed to already be a key and passes through untouched.
pub fn extract_file_key(url_or_key: &str) -> Result<String, LinkError> {
    let value = url_or_key.trim();
    if !value.starts_with("http") {
        return Ok(value.to_string());
    }
    value
        .split_once("figma.com/")
        .and_then(|(_, rest)| rest.split_once('/'))
        .filter(|(kind, _)| LINK_KINDS.contains(kind))
        .map(|(_, tail)| {
            tail.chars()
                .take_while(char::is_ascii_alphanumeric)
                .collect::<String>()
        })
        .filter(|key| !key.is_empty())
        .ok_or_else(|| LinkError::InvalidFileUrl(url_or_key.to_string()))
}

/// Pulls the `node-id` query parameter out of a share link, mapping the
/// URL spelling `1-2` back to the document spelling `1:2`.
pub fn extract_node_id(url: &str) -> Option<String> {
    let (_, tail) = url.split_once("node-id=")?;
    let raw = match tail.split_once('&') {
        Some((head, _)) => head,
        None => tail,
    };
    if raw.is_empty() {
        return None;
    }
    Some(raw.replace('-', ":"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_key_passthrough() {
        assert_eq!(extract_file_key("AbC123xyz").unwrap(), "AbC123xyz");
        assert_eq!(extract_file_key("  AbC123xyz  ").unwrap(), "AbC123xyz");
    }

    #[test]
    fn test_file_and_design_links() {
        let key = extract_file_key("https://www.figma.com/file/AbC123/My-File").unwrap();
        assert_eq!(key, "AbC123");
        let key = extract_file_key("https://www.figma.com/design/XyZ789/App?node-id=1-2").unwrap();
        assert_eq!(key, "XyZ789");
    }

    #[test]
    fn test_board_and_proto_links() {
        assert_eq!(
            extract_file_key("https://figma.com/board/B0ard1/Retro").unwrap(),
            "B0ard1"
        );
        assert_eq!(
            extract_file_key("https://figma.com/proto/Pr0to1/Flow").unwrap(),
            "Pr0to1"
        );
    }

    #[test]
    fn test_unrelated_url_rejected() {
        assert!(extract_file_key("https://example.com/file/AbC123").is_err());
        assert!(extract_file_key("https://www.figma.com/community/plugin/123").is_err());
        assert_eq!(
            extract_file_key("https://www.figma.com/file//x"),
            Err(LinkError::InvalidFileUrl(
                "https://www.figma.com/file//x".to_string()
            ))
        );
    }

    #[test]
    fn test_node_id_from_query() {
        assert_eq!(
            extract_node_id("https://www.figma.com/file/A/B?node-id=12-34").as_deref(),
            Some("12:34")
        );
        assert_eq!(
            extract_node_id("https://www.figma.com/file/A/B?node-id=12-34&t=abc").as_deref(),
            Some("12:34")
        );
    }

    #[test]
    fn test_missing_node_id() {
        assert!(extract_node_id("https://www.figma.com/file/A/B").is_none());
        assert!(extract_node_id("https://www.figma.com/file/A/B?node-id=&t=x").is_none());
    }
}
