//! Client-side fact feed with offset pagination.
//!
//! Pages are fetched with a fixed size. Facts may shift between pages when
//! new facts arrive or votes change the order, so a page is merged by id and
//! only unseen facts are appended.

use url::Url;

use crate::{
    client::{
        constant::FEED_PAGE_SIZE,
        model::{error::ApiError, sort::SortOption},
    },
    model::fact::FactDto,
};

/// Only the path and query of URLs built on this base are used.
const PATH_BASE: &str = "http://localhost/";

/// What the feed shows. Changing it resets the feed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedFilter {
    /// `None` shows every category.
    pub category: Option<String>,
    pub sort: SortOption,
}

impl FeedFilter {
    /// Parses the category `<select>` value, where `all` means no filter.
    pub fn category_from_value(value: &str) -> Option<String> {
        match value {
            "" | "all" => None,
            name => Some(name.to_string()),
        }
    }

    /// API path of one feed page, relative to the API base.
    ///
    /// The category is percent-encoded as a single path segment, so names
    /// containing `/`, `?` or `#` reach the category route intact.
    pub fn page_path(&self, page: u64) -> Result<String, ApiError> {
        let mut url = Url::parse(PATH_BASE).map_err(|e| ApiError {
            status: 500,
            message: format!("Failed to build feed path: {}", e),
        })?;

        // http URLs always have path segments.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("facts");
            if let Some(category) = &self.category {
                segments.push("category").push(category);
            }
        }

        url.query_pairs_mut()
            .append_pair("sort", self.sort.as_query())
            .append_pair("page", &page.to_string())
            .append_pair("limit", &FEED_PAGE_SIZE.to_string());

        Ok(format!("{}?{}", url.path(), url.query().unwrap_or_default()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feed {
    pub facts: Vec<FactDto>,
    /// Last page merged, 0 before the first page.
    pub page: u64,
    pub has_more: bool,
}

impl Default for Feed {
    fn default() -> Self {
        Self {
            facts: Vec::new(),
            page: 0,
            has_more: true,
        }
    }
}

impl Feed {
    pub fn next_page(&self) -> u64 {
        self.page + 1
    }

    /// Appends a fetched page, skipping facts already in the feed.
    ///
    /// A page shorter than the page size marks the end of the feed.
    pub fn merge_page(&mut self, page: u64, facts: Vec<FactDto>) {
        self.has_more = facts.len() == FEED_PAGE_SIZE;
        self.page = page;

        for fact in facts {
            if !self.facts.iter().any(|f| f.id == fact.id) {
                self.facts.push(fact);
            }
        }
    }

    /// Replaces a fact in place, e.g. with the server's answer to a vote.
    pub fn replace(&mut self, fact: FactDto) {
        if let Some(slot) = self.facts.iter_mut().find(|f| f.id == fact.id) {
            *slot = fact;
        }
    }

    /// Puts a newly submitted fact at the top.
    pub fn prepend(&mut self, fact: FactDto) {
        self.facts.retain(|f| f.id != fact.id);
        self.facts.insert(0, fact);
    }

    pub fn remove(&mut self, id: i32) {
        self.facts.retain(|f| f.id != id);
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::model::vote::VoteType;

    fn fact(id: i32) -> FactDto {
        FactDto {
            id,
            text: format!("Fact {}", id),
            source: "https://example.com".to_string(),
            category: "science".to_string(),
            user_id: 1,
            votes_interesting: 0,
            votes_mind_blowing: 0,
            votes_false: 0,
            created_at: Utc::now(),
            user: None,
            user_vote: None,
        }
    }

    fn facts(ids: std::ops::Range<i32>) -> Vec<FactDto> {
        ids.map(fact).collect()
    }

    #[test]
    fn full_page_keeps_loading() {
        let mut feed = Feed::default();

        feed.merge_page(1, facts(0..FEED_PAGE_SIZE as i32));

        assert!(feed.has_more);
        assert_eq!(feed.next_page(), 2);
        assert_eq!(feed.facts.len(), FEED_PAGE_SIZE);
    }

    #[test]
    fn short_page_ends_feed() {
        let mut feed = Feed::default();

        feed.merge_page(1, facts(0..3));

        assert!(!feed.has_more);
    }

    #[test]
    fn overlapping_page_appends_only_unseen() {
        let mut feed = Feed::default();
        feed.merge_page(1, facts(0..10));

        // A new fact pushed everything down by one, so fact 9 repeats.
        feed.merge_page(2, facts(9..19));

        let ids: Vec<i32> = feed.facts.iter().map(|f| f.id).collect();
        assert_eq!(ids, (0..19).collect::<Vec<_>>());
        assert!(feed.has_more);
    }

    #[test]
    fn replace_updates_in_place() {
        let mut feed = Feed::default();
        feed.merge_page(1, facts(0..3));

        let mut voted = fact(1);
        voted.votes_interesting = 1;
        voted.user_vote = Some(VoteType::Interesting);
        feed.replace(voted.clone());

        assert_eq!(feed.facts[1], voted);
        assert_eq!(feed.facts.len(), 3);
    }

    #[test]
    fn prepend_and_remove() {
        let mut feed = Feed::default();
        feed.merge_page(1, facts(0..2));

        feed.prepend(fact(7));
        feed.remove(0);

        let ids: Vec<i32> = feed.facts.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![7, 1]);
    }

    #[test]
    fn all_means_no_category() {
        assert_eq!(FeedFilter::category_from_value("all"), None);
        assert_eq!(
            FeedFilter::category_from_value("history"),
            Some("history".to_string())
        );
    }

    #[test]
    fn page_path_without_category() {
        let filter = FeedFilter {
            category: None,
            sort: SortOption::Interesting,
        };

        assert_eq!(
            filter.page_path(1).unwrap(),
            "/facts?sort=-votesInteresting&page=1&limit=10"
        );
    }

    #[test]
    fn page_path_encodes_category_segment() {
        let filter = FeedFilter {
            category: Some("sci/fi".to_string()),
            sort: SortOption::Recent,
        };

        assert_eq!(
            filter.page_path(2).unwrap(),
            "/facts/category/sci%2Ffi?sort=-createdAt&page=2&limit=10"
        );
    }

    #[test]
    fn page_path_keeps_reserved_characters_out_of_the_query() {
        let filter = FeedFilter {
            category: Some("q&a? #1".to_string()),
            sort: SortOption::Recent,
        };

        let path = filter.page_path(1).unwrap();

        assert!(path.starts_with("/facts/category/q&a%3F%20%231?"));
        assert!(path.ends_with("?sort=-createdAt&page=1&limit=10"));
    }
}
