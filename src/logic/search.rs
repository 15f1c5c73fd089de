//! Search Logic
//!
//! Pure functions for filtering the emoji catalog by a free-text query.
//! Matching is a case-insensitive substring test against the record's name
//! and each of its keywords. Results keep catalog order.

use crate::catalog::EmojiRecord;

/// The subsequence of the catalog matching a query
///
/// An empty query yields `All`, which borrows the catalog itself rather than
/// collecting a copy of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilteredView<'a> {
    All(&'a [EmojiRecord]),
    Matches(Vec<&'a EmojiRecord>),
}

impl<'a> FilteredView<'a> {
    pub fn len(&self) -> usize {
        match self {
            FilteredView::All(records) => records.len(),
            FilteredView::Matches(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<&'a EmojiRecord> {
        match self {
            FilteredView::All(records) => records.get(index),
            FilteredView::Matches(records) => records.get(index).copied(),
        }
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = &'a EmojiRecord> + '_> {
        match self {
            FilteredView::All(records) => Box::new(records.iter()),
            FilteredView::Matches(records) => Box::new(records.iter().copied()),
        }
    }

    /// Records in `range`, clipped to the view
    pub fn slice(&self, range: std::ops::Range<usize>) -> Vec<&'a EmojiRecord> {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        match self {
            FilteredView::All(records) => records[start..end].iter().collect(),
            FilteredView::Matches(records) => records[start..end].to_vec(),
        }
    }
}

/// Check whether a record matches an already-lowercased needle
///
/// # Examples
/// ```
/// use emojifav::catalog::EmojiRecord;
/// use emojifav::logic::search::record_matches;
///
/// let dog = EmojiRecord::new("🐶", "Dog Face", &["Pet"]);
/// assert!(record_matches(&dog, "dog"));
/// assert!(record_matches(&dog, "pet"));
/// assert!(!record_matches(&dog, "cat"));
/// ```
pub fn record_matches(record: &EmojiRecord, needle: &str) -> bool {
    record.name.to_lowercase().contains(needle)
        || record
            .keywords
            .iter()
            .any(|keyword| keyword.to_lowercase().contains(needle))
}

/// Filter the catalog by `query`
///
/// A query that is empty after trimming returns the whole catalog. Otherwise
/// the query (untrimmed) is lowercased and matched as a substring.
pub fn filter<'a>(catalog: &'a [EmojiRecord], query: &str) -> FilteredView<'a> {
    if query.trim().is_empty() {
        return FilteredView::All(catalog);
    }

    let needle = query.to_lowercase();
    FilteredView::Matches(
        catalog
            .iter()
            .filter(|record| record_matches(record, &needle))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<EmojiRecord> {
        vec![
            EmojiRecord::new("😀", "grinning face", &["happy", "smile"]),
            EmojiRecord::new("🐶", "dog face", &["animal", "pet"]),
        ]
    }

    fn symbols(view: &FilteredView) -> Vec<String> {
        view.iter().map(|r| r.symbol.clone()).collect()
    }

    #[test]
    fn test_keyword_match() {
        let catalog = sample();
        let view = filter(&catalog, "smile");
        assert_eq!(symbols(&view), vec!["😀"]);
    }

    #[test]
    fn test_name_match_keeps_catalog_order() {
        let catalog = sample();
        let view = filter(&catalog, "face");
        assert_eq!(symbols(&view), vec!["😀", "🐶"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let catalog = sample();
        let view = filter(&catalog, "zzz");
        assert!(view.is_empty());
    }

    #[test]
    fn test_empty_query_is_whole_catalog() {
        let catalog = sample();
        let view = filter(&catalog, "");
        assert!(matches!(view, FilteredView::All(_)));
        let records: Vec<EmojiRecord> = view.iter().cloned().collect();
        assert_eq!(records, catalog);
    }

    #[test]
    fn test_whitespace_query_is_whole_catalog() {
        let catalog = sample();
        assert_eq!(filter(&catalog, "   ").len(), catalog.len());
    }

    #[test]
    fn test_case_insensitive() {
        let catalog = vec![EmojiRecord::new("🐶", "Dog Face", &["PET"])];
        assert_eq!(filter(&catalog, "DOG").len(), 1);
        assert_eq!(filter(&catalog, "pEt").len(), 1);
    }

    #[test]
    fn test_query_is_not_trimmed_for_matching() {
        let catalog = sample();
        // "face " only matches where a space follows "face"
        assert!(filter(&catalog, "face ").is_empty());
        assert_eq!(filter(&catalog, "g f").len(), 2);
    }

    #[test]
    fn test_partial_keyword_match() {
        let catalog = sample();
        assert_eq!(symbols(&filter(&catalog, "anim")), vec!["🐶"]);
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let catalog = crate::catalog::Catalog::bundled().unwrap();
        for query in ["a", "face", "heart", "x", "an", "zzz"] {
            let view = filter(catalog.records(), query);
            let mut cursor = 0;
            for record in view.iter() {
                let pos = catalog.records()[cursor..]
                    .iter()
                    .position(|r| std::ptr::eq(r, record))
                    .expect("record must appear later in catalog");
                cursor += pos + 1;
            }
        }
    }

    #[test]
    fn test_matches_and_non_matches_are_exact() {
        let catalog = crate::catalog::Catalog::bundled().unwrap();
        for query in ["Smile", "cat", "o", "heart"] {
            let needle = query.to_lowercase();
            let view = filter(catalog.records(), query);
            let kept: Vec<*const EmojiRecord> = view.iter().map(|r| r as *const _).collect();
            for record in catalog.iter() {
                let in_view = kept.contains(&(record as *const _));
                assert_eq!(in_view, record_matches(record, &needle), "{}", record.name);
            }
        }
    }

    #[test]
    fn test_slice_clips_to_view() {
        let catalog = sample();
        let view = filter(&catalog, "");
        assert_eq!(view.slice(1..10).len(), 1);
        assert!(view.slice(5..10).is_empty());
    }
}
