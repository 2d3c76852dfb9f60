//! Derives display titles from the slug embedded in a catalog video URL.
//! Source URLs look like `https://www.pexels.com/video/a-walk-in-the-park-855321/`;
//! the slug carries the human-readable words plus a trailing numeric id.

/// Derives a title from a full video URL by transforming its last path
/// segment. Returns an empty string when the URL carries no usable slug
/// (callers substitute a placeholder).
pub fn title_from_url(url: &str) -> String {
    let slug = url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    title_from_slug(slug)
}

/// Transforms a dash-separated slug into a title: the trailing numeric id is
/// dropped, dashes become spaces, and each word is capitalized.
pub fn title_from_slug(slug: &str) -> String {
    let mut parts: Vec<&str> = slug.split('-').filter(|part| !part.is_empty()).collect();
    if let Some(last) = parts.last() {
        if !last.is_empty() && last.chars().all(|c| c.is_ascii_digit()) {
            parts.pop();
        }
    }

    parts
        .into_iter()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{title_from_slug, title_from_url};

    #[test]
    fn strips_trailing_id_and_title_cases() {
        assert_eq!(
            title_from_slug("a-walk-in-the-park-855321"),
            "A Walk In The Park"
        );
    }

    #[test]
    fn slug_without_trailing_id_is_kept_whole() {
        assert_eq!(title_from_slug("sunset-over-the-sea"), "Sunset Over The Sea");
    }

    #[test]
    fn already_capitalized_words_are_unchanged() {
        assert_eq!(title_from_slug("Madrid-At-Night-99"), "Madrid At Night");
    }

    #[test]
    fn empty_and_bare_id_slugs_yield_empty() {
        assert_eq!(title_from_slug(""), "");
        assert_eq!(title_from_slug("855321"), "");
    }

    #[test]
    fn url_slug_is_extracted_from_the_last_segment() {
        assert_eq!(
            title_from_url("https://www.pexels.com/video/a-walk-in-the-park-855321/"),
            "A Walk In The Park"
        );
        assert_eq!(title_from_url(""), "");
    }
}
