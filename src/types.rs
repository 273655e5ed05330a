// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a result page.
//!
//! An [`Article`] is one search hit as the backend returns it. Only four of its
//! fields matter to the facet engine: `publish_time`, `authors`, `journal` and
//! `source`. Everything else rides along for the renderer and is never looked at.
//!
//! The backend is loose about shape. `publish_time` can be missing, empty, or
//! free text like `"unknown"`; `authors` can be absent; `journal` can be `null`.
//! Deserialization accepts all of that and [`parse_year`] decides what counts
//! as a year.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One search hit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,
    /// Date string whose first four characters are expected to be the year.
    #[serde(default)]
    pub publish_time: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub authors: Vec<String>,
    #[serde(default)]
    pub journal: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    /// Reranker score, display only.
    #[serde(default)]
    pub score: f64,
}

impl Article {
    /// Publication year, if `publish_time` carries one.
    pub fn year(&self) -> Option<i32> {
        parse_year(self.publish_time.as_deref())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Extract the year from a publish time.
///
/// The year is the first four characters, and all four must be ASCII digits.
/// Anything else (absent, empty, shorter than four characters, `"unknown"`,
/// `" 2020"`) yields `None`.
///
/// # Example
///
/// ```
/// use refine::parse_year;
///
/// assert_eq!(parse_year(Some("2020-01-01")), Some(2020));
/// assert_eq!(parse_year(Some("1998")), Some(1998));
/// assert_eq!(parse_year(Some("unknown")), None);
/// assert_eq!(parse_year(None), None);
/// ```
pub fn parse_year(publish_time: Option<&str>) -> Option<i32> {
    let head = publish_time?.as_bytes().get(..4)?;
    if !head.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(
        head.iter()
            .fold(0i32, |year, digit| year * 10 + i32::from(digit - b'0')),
    )
}

/// The JSON body returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Opaque identifier for click logging; passed through, never interpreted.
    #[serde(default)]
    pub query_id: String,
    #[serde(default, deserialize_with = "null_as_empty_articles")]
    pub response: Vec<Article>,
}

fn null_as_empty_articles<'de, D>(deserializer: D) -> Result<Vec<Article>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Article>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Backend collection a query runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vertical {
    #[default]
    Cord19,
    Trialstreamer,
}

impl Vertical {
    pub const ALL: [Vertical; 2] = [Vertical::Cord19, Vertical::Trialstreamer];

    /// Read a `vertical` URL parameter. Unknown values fall back to the default
    /// collection rather than failing the page.
    pub fn from_param(param: &str) -> Vertical {
        param.parse().unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Vertical::Cord19 => "cord19",
            Vertical::Trialstreamer => "trialstreamer",
        }
    }
}

impl fmt::Display for Vertical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for [`Vertical::from_str`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vertical '{0}'")]
pub struct UnknownVertical(pub String);

impl FromStr for Vertical {
    type Err = UnknownVertical;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cord19" => Ok(Vertical::Cord19),
            "trialstreamer" => Ok(Vertical::Trialstreamer),
            other => Err(UnknownVertical(other.to_string())),
        }
    }
}
