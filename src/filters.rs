//! Browse filter state and its query-string codec.
//!
//! The location query string is the canonical form of the filters; the
//! in-memory `FilterState` is a derived cache. Values equal to their
//! defaults are omitted when encoding so locations stay minimal and
//! shareable.

use std::str::FromStr;

use unicase::UniCase;

use crate::error::MarqueeError;

/// Genre affordances offered by the filter bar. `ALL` means no filter.
pub const GENRE_FILTERS: &[&str] = &["ALL", "DOCUMENTARY", "COMEDY", "HORROR", "CRIME"];

/// Genres offered by the movie form's select (no `ALL` here; a record
/// always names a real genre)
pub const FORM_GENRES: &[&str] = &["COMEDY", "HORROR", "CRIME", "DOCUMENTARY"];

/// Query parameter names on the location surface
pub const PARAM_QUERY: &str = "query";
pub const PARAM_GENRE: &str = "genre";
pub const PARAM_SORT_BY: &str = "sortBy";
pub const PARAM_SORT_ORDER: &str = "sortOrder";

/// Genre filter value.
///
/// `All` means no genre filter. Any other value is carried verbatim,
/// including values outside [`GENRE_FILTERS`]: the affordance list is a UI
/// convenience, not an authoritative enum, so a deep link naming an unknown
/// genre still reaches the backend untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenreTag {
    #[default]
    All,
    Named(String),
}

impl GenreTag {
    /// Interpret a raw genre value. Only "ALL" (case-insensitive) collapses
    /// to `All`; everything else keeps its original casing.
    pub fn from_param(value: &str) -> Self {
        if UniCase::new(value) == UniCase::new("ALL") {
            GenreTag::All
        } else {
            GenreTag::Named(value.to_string())
        }
    }

    /// The `filter` value to send to the backend, if any
    pub fn filter_param(&self) -> Option<&str> {
        match self {
            GenreTag::All => None,
            GenreTag::Named(name) => Some(name),
        }
    }

    /// Whether this tag matches a filter-bar affordance (case-insensitive)
    pub fn matches(&self, affordance: &str) -> bool {
        match self {
            GenreTag::All => UniCase::new(affordance) == UniCase::new("ALL"),
            GenreTag::Named(name) => UniCase::new(affordance) == UniCase::new(name.as_str()),
        }
    }
}

impl std::fmt::Display for GenreTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenreTag::All => write!(f, "ALL"),
            GenreTag::Named(name) => write!(f, "{}", name),
        }
    }
}

/// Sort field for the catalog request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    ReleaseDate,
    Title,
}

impl SortKey {
    /// Wire name used on both the location and the backend request
    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::ReleaseDate => "releaseDate",
            SortKey::Title => "title",
        }
    }

    /// Human label for the sort select
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::ReleaseDate => "RELEASE DATE",
            SortKey::Title => "TITLE",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_param())
    }
}

impl FromStr for SortKey {
    type Err = MarqueeError;

    // Accepts the wire form plus CLI-friendly spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "releasedate" | "release-date" | "release_date" => Ok(SortKey::ReleaseDate),
            "title" => Ok(SortKey::Title),
            _ => Err(MarqueeError::invalid_sort_key(s.to_string())),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Wire name used on both the location and the backend request
    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_param())
    }
}

impl FromStr for SortOrder {
    type Err = MarqueeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(MarqueeError::invalid_sort_order(s.to_string())),
        }
    }
}

/// The browse filters, decoded from (and encoded back into) the location
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub query: String,
    pub genre: GenreTag,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl FilterState {
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self.clone()
        }
    }

    pub fn with_genre(&self, genre: GenreTag) -> Self {
        Self {
            genre,
            ..self.clone()
        }
    }

    pub fn with_sort_by(&self, sort_by: SortKey) -> Self {
        Self {
            sort_by,
            ..self.clone()
        }
    }

    pub fn with_sort_order(&self, sort_order: SortOrder) -> Self {
        Self {
            sort_order,
            ..self.clone()
        }
    }
}

/// Decode a raw query string into filters plus any unrelated parameters.
///
/// Decoding is tolerant: an unparseable `sortBy`/`sortOrder` falls back to
/// its default so the UI always has a defined state. Unrecognized keys are
/// returned separately and preserved verbatim by [`encode_query`].
pub fn decode_query(query: &str) -> (FilterState, Vec<(String, String)>) {
    let mut filters = FilterState::default();
    let mut extra = Vec::new();

    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            PARAM_QUERY => filters.query = value.into_owned(),
            PARAM_GENRE => filters.genre = GenreTag::from_param(&value),
            PARAM_SORT_BY => filters.sort_by = value.parse().unwrap_or_default(),
            PARAM_SORT_ORDER => filters.sort_order = value.parse().unwrap_or_default(),
            _ => extra.push((key.into_owned(), value.into_owned())),
        }
    }

    (filters, extra)
}

/// Encode filters (and preserved unrelated parameters) into a query string.
///
/// Default values are omitted: an absent `genre` implies ALL, an absent
/// `sortBy` implies releaseDate, an absent `sortOrder` implies desc.
/// Returns an empty string when nothing needs encoding.
pub fn encode_query(filters: &FilterState, extra: &[(String, String)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());

    if !filters.query.is_empty() {
        serializer.append_pair(PARAM_QUERY, &filters.query);
    }
    if let GenreTag::Named(name) = &filters.genre {
        serializer.append_pair(PARAM_GENRE, name);
    }
    if filters.sort_by != SortKey::default() {
        serializer.append_pair(PARAM_SORT_BY, filters.sort_by.as_param());
    }
    if filters.sort_order != SortOrder::default() {
        serializer.append_pair(PARAM_SORT_ORDER, filters.sort_order.as_param());
    }
    for (key, value) in extra {
        serializer.append_pair(key, value);
    }

    serializer.finish()
}
