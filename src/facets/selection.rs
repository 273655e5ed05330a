// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The user's filter selection.
//!
//! A categorical facet is either [`CategoryFilter::Unrestricted`] or
//! [`CategoryFilter::RestrictedTo`] a non-empty set. Deselecting the last value
//! collapses back to `Unrestricted`; building from an empty list gives
//! `Unrestricted`. A `RestrictedTo` built by hand around an empty set is still
//! read as unrestricted, so "nothing selected" never turns into "nothing
//! matches".

use super::domain::{FacetDomain, YearRange};
use crate::types::Article;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Selection state of one categorical facet (authors, journals or sources).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(
    tag = "kind",
    content = "values",
    rename_all = "camelCase",
    from = "CategoryFilterRepr"
)]
pub enum CategoryFilter {
    /// Every value passes.
    #[default]
    Unrestricted,
    /// Only these values pass. An empty set admits everything.
    RestrictedTo(BTreeSet<String>),
}

/// Wire form of [`CategoryFilter`]. An empty `restrictedTo` list coming in
/// from outside is read as unrestricted.
#[derive(Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "camelCase")]
enum CategoryFilterRepr {
    Unrestricted,
    RestrictedTo(BTreeSet<String>),
}

impl From<CategoryFilterRepr> for CategoryFilter {
    fn from(repr: CategoryFilterRepr) -> Self {
        match repr {
            CategoryFilterRepr::Unrestricted => CategoryFilter::Unrestricted,
            CategoryFilterRepr::RestrictedTo(set) => CategoryFilter::from_values(set),
        }
    }
}

impl CategoryFilter {
    /// Build a filter from selected values. No values means unrestricted.
    pub fn from_values<I, S>(values: I) -> CategoryFilter
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        if set.is_empty() {
            CategoryFilter::Unrestricted
        } else {
            CategoryFilter::RestrictedTo(set)
        }
    }

    /// Does a single-valued field pass? A missing value passes only when
    /// unrestricted.
    #[inline]
    pub fn admits(&self, value: Option<&str>) -> bool {
        match self {
            CategoryFilter::Unrestricted => true,
            CategoryFilter::RestrictedTo(set) if set.is_empty() => true,
            CategoryFilter::RestrictedTo(set) => value.is_some_and(|v| set.contains(v)),
        }
    }

    /// Does a multi-valued field pass? At least one value must be selected.
    #[inline]
    pub fn admits_any<'a, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        match self {
            CategoryFilter::Unrestricted => true,
            CategoryFilter::RestrictedTo(set) if set.is_empty() => true,
            CategoryFilter::RestrictedTo(set) => values.into_iter().any(|v| set.contains(v)),
        }
    }

    pub fn is_restricted(&self) -> bool {
        matches!(self, CategoryFilter::RestrictedTo(set) if !set.is_empty())
    }

    /// Collapse an empty restriction to `Unrestricted`.
    pub fn normalize(&mut self) {
        if !self.is_restricted() {
            *self = CategoryFilter::Unrestricted;
        }
    }

    pub fn is_selected(&self, value: &str) -> bool {
        match self {
            CategoryFilter::Unrestricted => false,
            CategoryFilter::RestrictedTo(set) => set.contains(value),
        }
    }

    /// Selected values in sorted order. Empty when unrestricted.
    pub fn selected(&self) -> impl Iterator<Item = &str> {
        let set = match self {
            CategoryFilter::Unrestricted => None,
            CategoryFilter::RestrictedTo(set) => Some(set),
        };
        set.into_iter().flatten().map(String::as_str)
    }

    pub fn select(&mut self, value: &str) {
        match self {
            CategoryFilter::Unrestricted => {
                *self = CategoryFilter::RestrictedTo(BTreeSet::from([value.to_string()]));
            }
            CategoryFilter::RestrictedTo(set) => {
                set.insert(value.to_string());
            }
        }
    }

    pub fn deselect(&mut self, value: &str) {
        if let CategoryFilter::RestrictedTo(set) = self {
            set.remove(value);
            if set.is_empty() {
                *self = CategoryFilter::Unrestricted;
            }
        }
    }

    /// Flip one value. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, value: &str) -> bool {
        if self.is_selected(value) {
            self.deselect(value);
            false
        } else {
            self.select(value);
            true
        }
    }

    pub fn clear(&mut self) {
        *self = CategoryFilter::Unrestricted;
    }
}

/// What the user has narrowed the results down to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    pub year_range: YearRange,
    pub authors: CategoryFilter,
    pub journals: CategoryFilter,
    pub sources: CategoryFilter,
}

impl FilterSelection {
    /// The selection that admits everything in `domain`: the full year range
    /// and no categorical restriction. This is what a new result set resets to.
    pub fn unrestricted(domain: &FacetDomain) -> FilterSelection {
        FilterSelection {
            year_range: domain.year_bounds.as_range(),
            authors: CategoryFilter::Unrestricted,
            journals: CategoryFilter::Unrestricted,
            sources: CategoryFilter::Unrestricted,
        }
    }

    /// Does `article` pass every criterion?
    ///
    /// Criteria compose with AND. Within the author criterion, any one of the
    /// article's authors being selected is enough. An article without a
    /// parseable year is not constrained by the year range.
    pub fn matches(&self, article: &Article) -> bool {
        article.year().map_or(true, |year| self.year_range.contains(year))
            && self
                .authors
                .admits_any(article.authors.iter().map(String::as_str))
            && self.journals.admits(article.journal.as_deref())
            && self.sources.admits(article.source.as_deref())
    }

    /// Same selection with every empty restriction collapsed to unrestricted.
    pub fn normalized(mut self) -> FilterSelection {
        self.authors.normalize();
        self.journals.normalize();
        self.sources.normalize();
        self
    }

    /// True when no categorical facet is restricted.
    pub fn is_categorically_unrestricted(&self) -> bool {
        !self.authors.is_restricted()
            && !self.journals.is_restricted()
            && !self.sources.is_restricted()
    }
}
