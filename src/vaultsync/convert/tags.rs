use once_cell::sync::Lazy;
use regex::Regex;

/// `#` followed by one or more characters that are neither whitespace nor `#`.
/// Group 1 is the tag text without the leading `#`.
static HASHTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#([^\s#]+)").expect("hashtag regex"));

/// Inline hashtags in document order, duplicates included.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    HASHTAG
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Removes every whole `#token` from the text.
pub fn strip_hashtags(text: &str) -> String {
    HASHTAG.replace_all(text, "").into_owned()
}

/// Reads a `tags` front matter value written either as a bracketed list
/// (`["a", "b"]`, or the unquoted `[a, b]`) or as `a, b`.
pub fn parse_tags_field(value: &str) -> Vec<String> {
    let value = value.trim();

    if let Some(inner) = value
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        if let Ok(list) = serde_json::from_str::<Vec<String>>(value) {
            return list
                .into_iter()
                .map(|tag| tag.trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect();
        }
        return split_list(inner, |s| s.trim_matches(&['"', '\''][..]));
    }

    split_list(value, |s| s)
}

fn split_list(list: &str, clean: impl Fn(&str) -> &str) -> Vec<String> {
    list.split(',')
        .map(|s| clean(s.trim()).trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_hashtags() {
        let tags = extract_hashtags("Hello #world and #foo/bar friend");
        assert_eq!(tags, vec!["world", "foo/bar"]);
    }

    #[test]
    fn test_headings_are_not_tags() {
        assert!(extract_hashtags("# Title\n## Section\n").is_empty());
    }

    #[test]
    fn test_adjacent_hashes_split_tags() {
        assert_eq!(extract_hashtags("#a#b"), vec!["a", "b"]);
    }

    #[test]
    fn test_strip_hashtags_removes_whole_token() {
        let body = strip_hashtags("Hello #world and #foo/bar friend");
        assert_eq!(body, "Hello  and  friend");
        assert!(!body.contains('#'));
    }

    #[test]
    fn test_parse_json_list() {
        assert_eq!(parse_tags_field(r#"["rust", "cli"]"#), vec!["rust", "cli"]);
    }

    #[test]
    fn test_parse_unquoted_bracket_list() {
        assert_eq!(parse_tags_field("[rust, 'cli', \"web\"]"), vec!["rust", "cli", "web"]);
    }

    #[test]
    fn test_parse_comma_separated() {
        assert_eq!(parse_tags_field(" rust ,cli,  ,web "), vec!["rust", "cli", "web"]);
    }

    #[test]
    fn test_parse_single_value() {
        assert_eq!(parse_tags_field("solo"), vec!["solo"]);
    }

    #[test]
    fn test_parse_json_list_drops_blank_entries() {
        assert_eq!(parse_tags_field(r#"["", "a", "  "]"#), vec!["a"]);
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(parse_tags_field("[]").is_empty());
    }
}
