//! # Search Filter
//!
//! Narrows the loaded organization list to what the visitor typed.
//!
//! ## Matching rule
//! - `searchTerms` is a lowercase, comma-separated alias list, led by the
//!   organization name (e.g. `"acme, acme corp"`).
//! - A query matches when it is a prefix of the whole field, or a prefix of
//!   any alias sitting right after a comma and optional spaces.
//! - Matching is literal. User input never reaches a pattern engine, so a
//!   query like `a.c` matches the characters `a.c` and nothing else.
//! - The first five matches in list order win. The list is pre-sorted at
//!   the source, so there is no scoring here.

use directory::Organization;

pub const RESULT_LIMIT: usize = 5;
pub const MAX_QUERY_LEN: usize = 256;

/// At most [`RESULT_LIMIT`] matches, in list order. An empty query yields
/// nothing rather than the whole directory.
pub fn filter_organizations<'a>(
    organizations: &'a [Organization],
    query: &str,
) -> Vec<&'a Organization> {
    if query.is_empty() {
        return Vec::new();
    }

    let query = query.to_lowercase();

    organizations
        .iter()
        .filter(|organization| matches_terms(&organization.search_terms, &query))
        .take(RESULT_LIMIT)
        .collect()
}

// `query` must already be lowercase and non-empty.
fn matches_terms(search_terms: &str, query: &str) -> bool {
    let terms = search_terms.to_lowercase();

    if terms.starts_with(query) {
        return true;
    }

    terms.match_indices(',').any(|(comma, _)| {
        terms[comma + 1..]
            .trim_start_matches(' ')
            .starts_with(query)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org(name: &str, url: &str, search_terms: &str) -> Organization {
        Organization {
            name: name.to_string(),
            url: url.to_string(),
            search_terms: search_terms.to_string(),
        }
    }

    fn sample() -> Vec<Organization> {
        vec![
            org("Acme", "acme.com", "acme, acme corp"),
            org("Acme2", "acme2.com", "acme2"),
            org("Facebook", "facebook.com", "facebook, fb, meta"),
            org("Cambook", "cambook.com", "cambook"),
            org("A.C. Services", "a-c.com", "a.c services, a.c"),
        ]
    }

    #[test]
    fn empty_query_yields_nothing() {
        assert!(filter_organizations(&sample(), "").is_empty());
    }

    #[test]
    fn no_match_yields_nothing() {
        assert!(filter_organizations(&sample(), "xyz").is_empty());
    }

    #[test]
    fn prefix_matches_both_acme_entries() {
        let organizations = sample();
        let results = filter_organizations(&organizations, "acme");

        let urls: Vec<&str> = results.iter().map(|o| o.url.as_str()).collect();
        assert_eq!(urls, ["acme.com", "acme2.com"]);
    }

    #[test]
    fn alias_matches_after_comma_boundary() {
        let organizations = sample();
        let results = filter_organizations(&organizations, "fb");

        let urls: Vec<&str> = results.iter().map(|o| o.url.as_str()).collect();
        assert_eq!(urls, ["facebook.com"]);
    }

    #[test]
    fn mid_string_substrings_do_not_match() {
        // "book" sits inside both "facebook" and "cambook", but never at a
        // term boundary.
        assert!(filter_organizations(&sample(), "book").is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let organizations = sample();
        let results = filter_organizations(&organizations, "ACME");

        assert_eq!(results.len(), 2);
    }

    #[test]
    fn pattern_characters_are_literal() {
        let organizations = sample();

        // "a.c" must not behave as "a<any>c": "acme" would match that.
        let results = filter_organizations(&organizations, "a.c");
        let urls: Vec<&str> = results.iter().map(|o| o.url.as_str()).collect();
        assert_eq!(urls, ["a-c.com"]);
    }

    #[test]
    fn results_cap_at_five_in_list_order() {
        let organizations: Vec<Organization> = (0..7)
            .map(|i| org(&format!("Org{i}"), &format!("org{i}.com"), "shared alias"))
            .collect();

        let results = filter_organizations(&organizations, "shared");

        assert_eq!(results.len(), RESULT_LIMIT);
        let urls: Vec<&str> = results.iter().map(|o| o.url.as_str()).collect();
        assert_eq!(
            urls,
            ["org0.com", "org1.com", "org2.com", "org3.com", "org4.com"]
        );
    }

    #[test]
    fn results_are_a_subsequence_of_the_input() {
        let organizations = sample();
        let results = filter_organizations(&organizations, "a");

        let mut cursor = organizations.iter();
        for result in results {
            assert!(cursor.any(|o| o == result));
        }
    }
}
