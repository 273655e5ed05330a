// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Facet domains: the values a result set makes available for filtering.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Min and max publication year observed in a result set.
///
/// Two special values exist and mean different things:
///
/// - [`YearBounds::DEFAULT`] `(0, 0)` is the domain of an empty result set.
/// - [`YearBounds::NONE_PARSED`] `(i32::MAX, -1)` is the domain of a non-empty
///   result set in which no result had a parseable year.
///
/// Only bounds with `min <= max` describe a real range. Check
/// [`is_usable`](Self::is_usable) or go through [`as_range`](Self::as_range).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearBounds {
    pub min: i32,
    pub max: i32,
}

impl YearBounds {
    pub const DEFAULT: YearBounds = YearBounds { min: 0, max: 0 };
    pub const NONE_PARSED: YearBounds = YearBounds {
        min: i32::MAX,
        max: -1,
    };

    /// Widen the bounds to cover `year`.
    #[inline]
    pub fn include(&mut self, year: i32) {
        self.min = self.min.min(year);
        self.max = self.max.max(year);
    }

    /// Union of two bounds. `NONE_PARSED` is the identity.
    #[inline]
    pub fn merge(self, other: YearBounds) -> YearBounds {
        YearBounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn is_usable(&self) -> bool {
        self.min <= self.max
    }

    /// The selection range these bounds allow. Unusable bounds become
    /// [`YearRange::ANY`].
    pub fn as_range(&self) -> YearRange {
        if self.is_usable() {
            YearRange {
                lo: self.min,
                hi: self.max,
            }
        } else {
            YearRange::ANY
        }
    }
}

impl Default for YearBounds {
    fn default() -> Self {
        YearBounds::DEFAULT
    }
}

/// Inclusive year interval chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub lo: i32,
    pub hi: i32,
}

impl YearRange {
    /// Admits every year.
    pub const ANY: YearRange = YearRange {
        lo: i32::MIN,
        hi: i32::MAX,
    };

    /// Build a range, swapping the ends if they arrive reversed.
    pub fn new(a: i32, b: i32) -> YearRange {
        YearRange {
            lo: a.min(b),
            hi: a.max(b),
        }
    }

    #[inline]
    pub fn contains(&self, year: i32) -> bool {
        self.lo <= year && year <= self.hi
    }
}

impl Default for YearRange {
    fn default() -> Self {
        YearRange::ANY
    }
}

/// Everything a result set offers to filter on.
///
/// A pure function of the result set (see [`derive_facets`](super::derive_facets)).
/// It is replaced wholesale when new results arrive and never edited in place.
/// Ordered sets keep the pickers' option lists sorted and make two domains
/// derived from permutations of the same results compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetDomain {
    pub year_bounds: YearBounds,
    pub authors: BTreeSet<String>,
    pub journals: BTreeSet<String>,
    pub sources: BTreeSet<String>,
}

impl FacetDomain {
    /// True when no categorical facet has any value.
    pub fn has_no_categories(&self) -> bool {
        self.authors.is_empty() && self.journals.is_empty() && self.sources.is_empty()
    }
}
