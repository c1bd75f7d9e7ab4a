//! # Filter Criteria
//!
//! Predicates deciding whether a book belongs to the current matches.
//! Title matching is a trimmed, case-insensitive substring test; genre and
//! author are exact id comparisons with an "any" wildcard.

use crate::core::catalog::Book;

/// Form value of the wildcard option.
pub const ANY: &str = "any";

/// A selector value: the wildcard or one specific id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Choice {
    #[default]
    Any,
    Id(String),
}

impl Choice {
    /// Maps a form value to a choice. Returns `None` for blank input.
    pub fn from_form_value(value: &str) -> Option<Self> {
        match value.trim() {
            "" => None,
            ANY => Some(Choice::Any),
            id => Some(Choice::Id(id.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    title_query: String,
    pub genre: Choice,
    pub author: Choice,
}

impl FilterCriteria {
    pub fn new(title_query: &str, genre: Choice, author: Choice) -> Self {
        Self {
            title_query: title_query.trim().to_string(),
            genre,
            author,
        }
    }

    /// Matches every book.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn title_query(&self) -> &str {
        &self.title_query
    }

    pub fn is_identity(&self) -> bool {
        self.title_query.is_empty() && self.genre == Choice::Any && self.author == Choice::Any
    }

    pub fn genre_match(&self, book: &Book) -> bool {
        match &self.genre {
            Choice::Any => true,
            Choice::Id(id) => book.genres.iter().any(|g| g == id),
        }
    }

    pub fn title_match(&self, book: &Book) -> bool {
        self.title_query.is_empty()
            || book
                .title
                .to_lowercase()
                .contains(&self.title_query.to_lowercase())
    }

    pub fn author_match(&self, book: &Book) -> bool {
        match &self.author {
            Choice::Any => true,
            Choice::Id(id) => &book.author == id,
        }
    }

    pub fn matches(&self, book: &Book) -> bool {
        self.genre_match(book) && self.title_match(book) && self.author_match(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::test_support::book;

    #[test]
    fn test_choice_from_form_value() {
        assert_eq!(Choice::from_form_value("any"), Some(Choice::Any));
        assert_eq!(
            Choice::from_form_value(" g01 "),
            Some(Choice::Id("g01".to_string()))
        );
        assert_eq!(Choice::from_form_value("   "), None);
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        let criteria = FilterCriteria::all();
        assert!(criteria.is_identity());
        assert!(criteria.matches(&book("1", "Anything", "a1", &["g1"])));
        assert!(criteria.matches(&book("2", "", "nobody", &[])));
    }

    #[test]
    fn test_title_match_is_case_insensitive_substring() {
        let b = book("1", "The Time Machine", "a1", &[]);
        for query in ["time", "TIME MACH", "e Ti", "The Time Machine", "  machine  "] {
            let criteria = FilterCriteria::new(query, Choice::Any, Choice::Any);
            assert!(criteria.title_match(&b), "query {query:?} should match");
        }
        let criteria = FilterCriteria::new("dracula", Choice::Any, Choice::Any);
        assert!(!criteria.title_match(&b));
    }

    #[test]
    fn test_any_title_substring_matches_its_book() {
        let catalog = Catalog::bundled().unwrap();
        for b in catalog.books() {
            let chars: Vec<char> = b.title.chars().collect();
            let start = chars.len() / 3;
            let end = (start + 4).min(chars.len());
            let query: String = chars[start..end].iter().collect::<String>().to_uppercase();
            let criteria = FilterCriteria::new(&query, Choice::Any, Choice::Any);
            assert!(criteria.matches(b), "{query:?} should match {:?}", b.title);
        }
    }

    #[test]
    fn test_whitespace_query_is_trimmed_to_empty() {
        let criteria = FilterCriteria::new("   ", Choice::Any, Choice::Any);
        assert_eq!(criteria.title_query(), "");
        assert!(criteria.is_identity());
    }

    #[test]
    fn test_genre_match_requires_membership() {
        let b = book("1", "T", "a1", &["g1", "g2"]);
        let hit = FilterCriteria::new("", Choice::Id("g2".into()), Choice::Any);
        let miss = FilterCriteria::new("", Choice::Id("g3".into()), Choice::Any);
        assert!(hit.genre_match(&b));
        assert!(!miss.genre_match(&b));
    }

    #[test]
    fn test_author_match_is_exact() {
        let b = book("1", "T", "a1", &[]);
        assert!(FilterCriteria::new("", Choice::Any, Choice::Id("a1".into())).author_match(&b));
        assert!(!FilterCriteria::new("", Choice::Any, Choice::Id("a10".into())).author_match(&b));
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let b = book("1", "Dracula", "a1", &["gothic"]);
        let criteria = FilterCriteria::new(
            "drac",
            Choice::Id("gothic".into()),
            Choice::Id("a2".into()),
        );
        assert!(criteria.genre_match(&b));
        assert!(criteria.title_match(&b));
        assert!(!criteria.matches(&b));
    }
}
