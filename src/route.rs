//! Routes: the closed set of screen destinations and their string form.
//!
//! Call sites construct [`Route`] values directly. The string form
//! (`movies`, `grid`, `about`, `detail/{movieId}/{source}`) exists for the
//! command line and for logging, and parses back through [`Route::parse`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tag used when a detail route string omits its source segment.
pub const FALLBACK_SOURCE: &str = "Movies";

// ============================================================================
// SOURCE
// ============================================================================

/// Which UI element a detail navigation originated from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Source {
    /// The vertical "Film Populer" list.
    Column,
    /// The horizontal "Rilis Terbaru" row.
    Row,
    /// The two-column grid.
    Grid,
    /// Any other tag found in a route string, kept verbatim.
    Other(Tag),
}

/// Free-form provenance tag. Only built through `Source::from`, so it is
/// never empty and never spells one of the named variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

impl Tag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Source {
    pub fn as_str(&self) -> &str {
        match self {
            Source::Column => "Column",
            Source::Row => "Row",
            Source::Grid => "Grid",
            Source::Other(tag) => tag.as_str(),
        }
    }
}

impl From<&str> for Source {
    /// Named tags map to their variants; an empty tag becomes
    /// [`FALLBACK_SOURCE`].
    fn from(tag: &str) -> Self {
        match tag {
            "Column" => Source::Column,
            "Row" => Source::Row,
            "Grid" => Source::Grid,
            "" => Source::Other(Tag(FALLBACK_SOURCE.to_string())),
            other => Source::Other(Tag(other.to_string())),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ROUTE
// ============================================================================

/// A screen destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// List screen with the vertical and horizontal sequences. Start route.
    #[default]
    Movies,
    /// Two-column grid.
    Grid,
    /// Static author text.
    About,
    /// One film. `movie_id` is not range-checked here; renderers fall back
    /// to the first title.
    Detail { movie_id: usize, source: Source },
}

/// Failure to match a route string against the route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("empty route")]
    Empty,
    #[error("unknown route: {0}")]
    Unknown(String),
}

impl Route {
    /// Convenience constructor for detail routes.
    pub fn detail(movie_id: usize, source: Source) -> Self {
        Route::Detail { movie_id, source }
    }

    /// Match a route string against the route table.
    ///
    /// A malformed `movieId` segment (non-numeric, negative, overflowing)
    /// becomes 0 instead of an error. Only a pattern that matches no
    /// destination fails.
    pub fn parse(input: &str) -> Result<Route, RouteError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(RouteError::Empty);
        }

        let segments: Vec<&str> = input.split('/').collect();
        match segments.as_slice() {
            ["movies"] => Ok(Route::Movies),
            ["grid"] => Ok(Route::Grid),
            ["about"] => Ok(Route::About),
            ["detail", id] => Ok(Route::detail(parse_movie_id(id), Source::from(""))),
            ["detail", id, source] => {
                Ok(Route::detail(parse_movie_id(id), Source::from(*source)))
            }
            _ => Err(RouteError::Unknown(input.to_string())),
        }
    }

    /// Short route name without parameters, for logs and the tab bar.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Movies => "movies",
            Route::Grid => "grid",
            Route::About => "about",
            Route::Detail { .. } => "detail",
        }
    }
}

fn parse_movie_id(segment: &str) -> usize {
    segment.parse().unwrap_or(0)
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Detail { movie_id, source } => write!(f, "detail/{}/{}", movie_id, source),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

impl Serialize for Route {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Route {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Route::parse(&raw).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// TESTS
// ============================================================================
