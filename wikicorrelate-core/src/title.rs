use wikicorrelate_scanner::ARTICLE_PREFIX;

/// Turn free-form article title text into a node path.
///
/// Spaces become underscores and the article prefix is prepended. Case is
/// left alone, and a missing title collapses to the bare prefix.
pub fn normalize_title(title: Option<&str>) -> String {
    match title {
        Some(title) => format!("{}{}", ARTICLE_PREFIX, title.replace(' ', "_")),
        None => ARTICLE_PREFIX.to_string(),
    }
}
