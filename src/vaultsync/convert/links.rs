use once_cell::sync::Lazy;
use regex::Regex;

/// `[[`, then the shortest run of non-newline characters, then `]]`.
static WIKILINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[(.*?)\]\]").expect("wikilink regex"));

/// Rewrites `[[target]]` and `[[target|label]]` as `[target](./target)`.
/// The label after `|` is dropped.
pub fn rewrite_wikilinks(text: &str) -> String {
    WIKILINK
        .replace_all(text, |caps: &regex::Captures| {
            let target = caps[1].split('|').next().unwrap_or_default();
            format!("[{target}](./{target})")
        })
        .into_owned()
}
