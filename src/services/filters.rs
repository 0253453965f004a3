use serde::Deserialize;

use crate::models::enriched::Filterable;

const ALL: &str = "all";

/// A select-box value: either `"all"` or one exact value to match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Exact(String),
}

impl Selection {
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            Selection::All
        } else {
            Selection::Exact(value.to_string())
        }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Exact(expected) => expected == candidate,
        }
    }

    /// Value echoed back into the select box.
    pub fn as_str(&self) -> &str {
        match self {
            Selection::All => ALL,
            Selection::Exact(value) => value,
        }
    }
}

/// Raw query string parameters, e.g. `/ssl?owner=bob&status=expiring&q=bob`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    pub owner: Option<String>,
    pub status: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    pub owner: Selection,
    pub status: Selection,
    pub search: String,
}

impl From<&FilterParams> for FilterSet {
    fn from(params: &FilterParams) -> Self {
        Self {
            owner: params.owner.as_deref().map(Selection::parse).unwrap_or_default(),
            status: params.status.as_deref().map(Selection::parse).unwrap_or_default(),
            search: params.q.clone().unwrap_or_default(),
        }
    }
}

impl FilterSet {
    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        self.owner.matches(item.owner_key())
            && self.status.matches(item.status_key())
            && self.matches_search(item)
    }

    fn matches_search<T: Filterable>(&self, item: &T) -> bool {
        if self.search.is_empty() {
            return true;
        }
        match item.search_key() {
            Some(text) => text.to_lowercase().contains(&self.search.to_lowercase()),
            None => true,
        }
    }

    /// Items satisfying every active predicate, in their original order.
    pub fn apply<'a, T: Filterable>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}
