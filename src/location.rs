//! In-app locations: a path plus the filter query string.
//!
//! The location plays the role a browser address bar would: it is the
//! canonical record of where the user is and which filters are active.
//! Detail pages are deep-linkable because the route is part of the
//! location, and "back to search" reconstructs the list purely from the
//! query string carried along.

use std::fmt;
use std::str::FromStr;

use crate::error::{MarqueeError, Result};
use crate::filters::{FilterState, decode_query, encode_query};

/// Which screen a location points at
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// The searchable movie grid (`/`)
    #[default]
    Browse,
    /// Single movie detail (`/{movieId}`)
    Detail(String),
    /// The add-movie form (`/new`)
    New,
    /// The edit-movie form (`/{movieId}/edit`)
    Edit(String),
}

impl Route {
    /// The path segment form of this route
    pub fn path(&self) -> String {
        match self {
            Route::Browse => "/".to_string(),
            Route::Detail(id) => format!("/{}", id),
            Route::New => "/new".to_string(),
            Route::Edit(id) => format!("/{}/edit", id),
        }
    }

    /// Parse a path into a route. `new` is reserved and never a movie id.
    pub fn parse(path: &str) -> Result<Self> {
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            return Ok(Route::Browse);
        }

        let segments: Vec<&str> = trimmed.split('/').collect();
        match segments.as_slice() {
            ["new"] => Ok(Route::New),
            [id] => Ok(Route::Detail((*id).to_string())),
            [id, "edit"] => Ok(Route::Edit((*id).to_string())),
            _ => Err(MarqueeError::InvalidLocation(
                path.to_string(),
                "expected /, /{movieId}, /new, or /{movieId}/edit".to_string(),
            )),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// A full in-app location: route plus filters plus any unrelated
/// query parameters carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub route: Route,
    pub filters: FilterState,
    pub extra: Vec<(String, String)>,
}

impl Location {
    /// Parse a deep link like `/42?query=Bohemian` or `/?genre=COMEDY`.
    /// A missing leading slash is tolerated (`42?query=x`).
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let (path, query) = match input.split_once('?') {
            Some((path, query)) => (path, query),
            None => (input, ""),
        };

        let normalized = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        let route = Route::parse(&normalized)?;
        let (filters, extra) = decode_query(query);

        Ok(Location {
            route,
            filters,
            extra,
        })
    }

    /// The query-string form of the carried filters (may be empty)
    pub fn query_string(&self) -> String {
        encode_query(&self.filters, &self.extra)
    }

    /// Same filters, different route
    pub fn with_route(&self, route: Route) -> Self {
        Self {
            route,
            filters: self.filters.clone(),
            extra: self.extra.clone(),
        }
    }

    /// Tile activation: `/{movieId}?{current filters}`
    pub fn to_detail(&self, movie_id: impl Into<String>) -> Self {
        self.with_route(Route::Detail(movie_id.into()))
    }

    /// Back to search: `/?{current filters}`
    pub fn to_browse(&self) -> Self {
        self.with_route(Route::Browse)
    }

    pub fn to_new(&self) -> Self {
        self.with_route(Route::New)
    }

    pub fn to_edit(&self, movie_id: impl Into<String>) -> Self {
        self.with_route(Route::Edit(movie_id.into()))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let query = self.query_string();
        if query.is_empty() {
            write!(f, "{}", self.route.path())
        } else {
            write!(f, "{}?{}", self.route.path(), query)
        }
    }
}

impl FromStr for Location {
    type Err = MarqueeError;

    fn from_str(s: &str) -> Result<Self> {
        Location::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{GenreTag, SortKey};

    #[test]
    fn test_route_parse_browse() {
        assert_eq!(Route::parse("/").unwrap(), Route::Browse);
        assert_eq!(Route::parse("").unwrap(), Route::Browse);
    }

    #[test]
    fn test_route_parse_detail() {
        assert_eq!(Route::parse("/42").unwrap(), Route::Detail("42".to_string()));
    }

    #[test]
    fn test_route_parse_new_is_reserved() {
        assert_eq!(Route::parse("/new").unwrap(), Route::New);
    }

    #[test]
    fn test_route_parse_edit() {
        assert_eq!(Route::parse("/42/edit").unwrap(), Route::Edit("42".to_string()));
    }

    #[test]
    fn test_route_parse_invalid() {
        assert!(Route::parse("/42/edit/extra").is_err());
        assert!(Route::parse("/42/other").is_err());
    }

    #[test]
    fn test_location_parse_with_filters() {
        let loc = Location::parse("/42?query=Bohemian&genre=COMEDY").unwrap();
        assert_eq!(loc.route, Route::Detail("42".to_string()));
        assert_eq!(loc.filters.query, "Bohemian");
        assert_eq!(loc.filters.genre, GenreTag::Named("COMEDY".to_string()));
    }

    #[test]
    fn test_location_parse_without_leading_slash() {
        let loc = Location::parse("42?query=x").unwrap();
        assert_eq!(loc.route, Route::Detail("42".to_string()));
    }

    #[test]
    fn test_location_display_round_trip() {
        let cases = [
            "/",
            "/42",
            "/new",
            "/42/edit",
            "/?query=Bohemian",
            "/42?query=Bohemian&genre=COMEDY",
            "/?genre=WESTERN",
        ];
        for input in cases {
            let loc = Location::parse(input).unwrap();
            assert_eq!(loc.to_string(), input, "round trip failed for {}", input);
        }
    }

    #[test]
    fn test_tile_navigation_preserves_filters() {
        let list = Location::parse("/?query=Bohemian&sortBy=title").unwrap();
        let detail = list.to_detail("7");
        assert_eq!(detail.to_string(), "/7?query=Bohemian&sortBy=title");

        let back = detail.to_browse();
        assert_eq!(back.to_string(), "/?query=Bohemian&sortBy=title");
        assert_eq!(back.filters.sort_by, SortKey::Title);
    }

    #[test]
    fn test_back_preserves_unknown_params() {
        let detail = Location::parse("/7?query=a&ref=newsletter").unwrap();
        assert_eq!(detail.to_browse().to_string(), "/?query=a&ref=newsletter");
    }
}
