/// Path prefix shared by every article on the site.
pub const ARTICLE_PREFIX: &str = "/wiki/";

const HOME_PAGE: &str = "/wiki/Main_Page";
const DISAMBIGUATION_MARKER: &str = "_(disambiguation)";
// Talk:, Category:, File:, Special: and friends
const NAMESPACE_SEPARATOR: char = ':';

/// Whether an href is a same-site article link worth expanding.
pub fn is_relevant(href: &str) -> bool {
    href.starts_with(ARTICLE_PREFIX)
        && !href.starts_with(HOME_PAGE)
        && !href.contains(DISAMBIGUATION_MARKER)
        && !href.contains(NAMESPACE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_article_is_relevant() {
        assert!(is_relevant("/wiki/Seattle"));
        assert!(is_relevant("/wiki/Foothills"));
    }

    #[test]
    fn test_outside_article_namespace_is_irrelevant() {
        assert!(!is_relevant("https://example.com/wiki/Seattle"));
        assert!(!is_relevant("/w/index.php?title=Seattle"));
        assert!(!is_relevant("#cite_note-1"));
        assert!(!is_relevant(""));
    }

    #[test]
    fn test_home_page_is_irrelevant() {
        assert!(!is_relevant("/wiki/Main_Page"));
        // Prefix match, same as the home page itself
        assert!(!is_relevant("/wiki/Main_Page_(film)"));
    }

    #[test]
    fn test_disambiguation_is_irrelevant() {
        assert!(!is_relevant("/wiki/Mercury_(disambiguation)"));
    }

    #[test]
    fn test_namespaced_pages_are_irrelevant() {
        assert!(!is_relevant("/wiki/Talk:Seattle"));
        assert!(!is_relevant("/wiki/Category:Cities_in_Washington"));
        assert!(!is_relevant("/wiki/File:Seattle_skyline.jpg"));
        assert!(!is_relevant("/wiki/Special:Random"));
    }
}
