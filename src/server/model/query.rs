//! Query-string parsing for fact lists and paginated endpoints.
//!
//! Supports `category=<name>`, counter filters such as
//! `votesInteresting[gte]=5`, `sort=-votesFalse,createdAt`,
//! `fields=text,source` and `page` / `limit`.

use std::collections::HashMap;

use crate::{
    model::fact::FactDto,
    server::{error::AppError, model::vote::VoteType},
};

pub const DEFAULT_LIMIT: u64 = 100;
pub const MAX_LIMIT: u64 = 100;

/// Keys of the fact JSON object that `fields` may select.
pub const FACT_FIELDS: [&str; 11] = [
    "id",
    "text",
    "source",
    "category",
    "userId",
    "votesInteresting",
    "votesMindBlowing",
    "votesFalse",
    "createdAt",
    "user",
    "userVote",
];

/// Keys consumed by the parser itself rather than treated as filters.
const RESERVED_KEYS: [&str; 4] = ["page", "limit", "sort", "fields"];

fn bad_request(message: String) -> AppError {
    AppError::BadRequest(message)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Gte,
    Gt,
    Lte,
    Lt,
}

impl Comparison {
    fn from_operator(op: &str) -> Option<Self> {
        match op {
            "gte" => Some(Self::Gte),
            "gt" => Some(Self::Gt),
            "lte" => Some(Self::Lte),
            "lt" => Some(Self::Lt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFilter {
    pub counter: VoteType,
    pub comparison: Comparison,
    pub value: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    Counter(VoteType),
    Text,
    Category,
}

impl SortField {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "createdAt" => Some(Self::CreatedAt),
            "text" => Some(Self::Text),
            "category" => Some(Self::Category),
            other => VoteType::from_wire(other).map(Self::Counter),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub descending: bool,
}

impl SortKey {
    /// Newest first.
    pub const DEFAULT: SortKey = SortKey {
        field: SortField::CreatedAt,
        descending: true,
    };

    fn parse(raw: &str) -> Result<Self, AppError> {
        let (descending, name) = match raw.strip_prefix('-') {
            Some(name) => (true, name),
            None => (false, raw),
        };

        let field = SortField::from_name(name)
            .ok_or_else(|| bad_request(format!("Invalid sort field: {}", name)))?;

        Ok(Self { field, descending })
    }
}

/// 1-based page with a capped page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Reads `page` and `limit`. A limit above the maximum is clamped; zero or
    /// non-numeric values are rejected, as is a page whose offset does not fit
    /// in a signed 64-bit SQL integer.
    pub fn parse(params: &HashMap<String, String>) -> Result<Self, AppError> {
        let page = parse_positive(params, "page")?.unwrap_or(1);
        let limit = parse_positive(params, "limit")?
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);

        let in_range = (page - 1)
            .checked_mul(limit)
            .is_some_and(|offset| offset <= MAX_OFFSET);
        if !in_range {
            return Err(bad_request(format!("Invalid value for page: {}", page)));
        }

        Ok(Self { page, limit })
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

/// Largest row offset SQLite accepts.
const MAX_OFFSET: u64 = i64::MAX as u64;

fn parse_positive(params: &HashMap<String, String>, key: &str) -> Result<Option<u64>, AppError> {
    let Some(raw) = params.get(key) else {
        return Ok(None);
    };

    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Ok(Some(value)),
        _ => Err(bad_request(format!("Invalid value for {}: {}", key, raw))),
    }
}

/// Parsed fact list query.
#[derive(Debug, Clone, PartialEq)]
pub struct FactQuery {
    pub category: Option<String>,
    pub counters: Vec<CounterFilter>,
    /// Never empty; `id` descending is appended by the repository as tie-break.
    pub sort: Vec<SortKey>,
    /// Selected output fields, always containing `id`. `None` returns everything.
    pub fields: Option<Vec<String>>,
    pub pagination: Pagination,
}

impl Default for FactQuery {
    fn default() -> Self {
        Self {
            category: None,
            counters: Vec::new(),
            sort: vec![SortKey::DEFAULT],
            fields: None,
            pagination: Pagination::default(),
        }
    }
}

impl FactQuery {
    /// Parses raw query parameters.
    ///
    /// # Returns
    /// - `Ok(FactQuery)` - All keys understood
    /// - `Err(AppError::BadRequest)` - Unknown filter/sort/field name or malformed number
    pub fn parse(params: &HashMap<String, String>) -> Result<Self, AppError> {
        let mut query = Self {
            pagination: Pagination::parse(params)?,
            ..Default::default()
        };

        if let Some(sort) = params.get("sort") {
            let keys = split_list(sort)
                .map(SortKey::parse)
                .collect::<Result<Vec<_>, _>>()?;
            if !keys.is_empty() {
                query.sort = keys;
            }
        }

        if let Some(fields) = params.get("fields") {
            query.fields = parse_fields(fields)?;
        }

        for (key, value) in params {
            if RESERVED_KEYS.contains(&key.as_str()) {
                continue;
            }
            query.parse_filter(key, value)?;
        }

        Ok(query)
    }

    fn parse_filter(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        let (name, comparison) = match key.split_once('[') {
            Some((name, rest)) => {
                let op = rest
                    .strip_suffix(']')
                    .and_then(Comparison::from_operator)
                    .ok_or_else(|| bad_request(format!("Invalid filter: {}", key)))?;
                (name, op)
            }
            None => (key, Comparison::Eq),
        };

        if name == "category" && comparison == Comparison::Eq {
            self.category = Some(value.trim().to_lowercase());
            return Ok(());
        }

        let counter = VoteType::from_wire(name)
            .ok_or_else(|| bad_request(format!("Invalid filter: {}", key)))?;
        let value = value
            .trim()
            .parse::<i32>()
            .map_err(|_| bad_request(format!("Invalid value for {}: {}", key, value)))?;

        self.counters.push(CounterFilter {
            counter,
            comparison,
            value,
        });

        Ok(())
    }

    /// Serializes a fact, keeping only the selected fields.
    pub fn project(&self, fact: FactDto) -> Result<serde_json::Value, AppError> {
        let value =
            serde_json::to_value(fact).map_err(|e| AppError::InternalError(e.to_string()))?;

        let Some(fields) = &self.fields else {
            return Ok(value);
        };

        match value {
            serde_json::Value::Object(map) => Ok(serde_json::Value::Object(
                map.into_iter()
                    .filter(|(key, _)| fields.iter().any(|f| f == key))
                    .collect(),
            )),
            other => Ok(other),
        }
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn parse_fields(raw: &str) -> Result<Option<Vec<String>>, AppError> {
    let mut fields = vec!["id".to_string()];

    for field in split_list(raw) {
        if !FACT_FIELDS.contains(&field) {
            return Err(bad_request(format!("Invalid field: {}", field)));
        }
        if !fields.iter().any(|f| f == field) {
            fields.push(field.to_string());
        }
    }

    Ok((fields.len() > 1).then_some(fields))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_to_newest_first_page_one() {
        let query = FactQuery::parse(&HashMap::new()).unwrap();

        assert_eq!(query, FactQuery::default());
        assert_eq!(query.sort, vec![SortKey::DEFAULT]);
        assert_eq!(query.pagination.offset(), 0);
    }

    #[test]
    fn parses_counter_filters() {
        let query = FactQuery::parse(&params(&[
            ("votesInteresting[gte]", "5"),
            ("votesFalse", "0"),
        ]))
        .unwrap();

        assert_eq!(query.counters.len(), 2);
        assert!(query.counters.contains(&CounterFilter {
            counter: VoteType::Interesting,
            comparison: Comparison::Gte,
            value: 5
        }));
        assert!(query.counters.contains(&CounterFilter {
            counter: VoteType::False,
            comparison: Comparison::Eq,
            value: 0
        }));
    }

    #[test]
    fn rejects_unknown_filter_and_operator() {
        assert!(FactQuery::parse(&params(&[("colour", "red")])).is_err());
        assert!(FactQuery::parse(&params(&[("votesFalse[ne]", "1")])).is_err());
        assert!(FactQuery::parse(&params(&[("votesFalse[gt]", "many")])).is_err());
    }

    #[test]
    fn parses_multi_key_sort() {
        let query = FactQuery::parse(&params(&[("sort", "-votesMindBlowing, text")])).unwrap();

        assert_eq!(
            query.sort,
            vec![
                SortKey {
                    field: SortField::Counter(VoteType::MindBlowing),
                    descending: true
                },
                SortKey {
                    field: SortField::Text,
                    descending: false
                },
            ]
        );
    }

    #[test]
    fn rejects_unknown_sort_field() {
        assert!(FactQuery::parse(&params(&[("sort", "-password")])).is_err());
    }

    #[test]
    fn category_filter_is_normalised() {
        let query = FactQuery::parse(&params(&[("category", " Science ")])).unwrap();

        assert_eq!(query.category.as_deref(), Some("science"));
    }

    #[test]
    fn pagination_clamps_limit_and_rejects_zero() {
        let query = FactQuery::parse(&params(&[("page", "3"), ("limit", "500")])).unwrap();
        assert_eq!(query.pagination.limit, MAX_LIMIT);
        assert_eq!(query.pagination.offset(), 200);

        assert!(FactQuery::parse(&params(&[("page", "0")])).is_err());
        assert!(FactQuery::parse(&params(&[("limit", "ten")])).is_err());
    }

    #[test]
    fn rejects_page_past_largest_offset() {
        let result = FactQuery::parse(&params(&[("page", "18446744073709551615")]));
        assert!(matches!(result, Err(AppError::BadRequest(_))));

        let result = Pagination::parse(&params(&[("page", "92233720368547760"), ("limit", "100")]));
        assert!(matches!(result, Err(AppError::BadRequest(_))));

        let last = Pagination::parse(&params(&[("page", "92233720368547759"), ("limit", "100")]))
            .unwrap();
        assert_eq!(last.offset(), 9_223_372_036_854_775_800);
    }

    #[test]
    fn projection_always_keeps_id() {
        let query = FactQuery::parse(&params(&[("fields", "text")])).unwrap();
        let fact = crate::server::model::fact::Fact::from_entity(
            test_utils::fixture::fact::entity(),
            None,
        );

        let value = query.project(fact.into_dto()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 2);
        assert!(object.contains_key("id"));
        assert!(object.contains_key("text"));
    }

    #[test]
    fn rejects_unknown_projection_field() {
        assert!(FactQuery::parse(&params(&[("fields", "text,passwordHash")])).is_err());
    }
}
