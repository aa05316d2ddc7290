//! Movie service client module.
//!
//! This module provides the domain types the UI renders, the wire DTOs the
//! backend speaks, the transforms between them, and the `MovieService`
//! trait everything network-facing goes through.

pub mod http;

use serde::{Deserialize, Serialize};

use crate::error::{MarqueeError, Result};
use crate::filters::{FilterState, SortKey, SortOrder};

pub use http::HttpMovieService;

/// Poster shown when the backend has none for a movie
pub const PLACEHOLDER_POSTER: &str =
    "https://via.placeholder.com/300x450/000000/FFFFFF?text=No+Image";

/// A movie as rendered in the grid
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MovieSummary {
    pub id: String,
    pub poster_url: String,
    pub title: String,
    pub release_year: i16,
    pub genres: Vec<String>,
}

/// A movie as rendered in the detail view; a superset of [`MovieSummary`].
/// Carries the raw release date so edit prefill can round-trip it.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetail {
    pub id: String,
    pub poster_url: String,
    pub title: String,
    pub release_year: i16,
    pub release_date: String,
    pub genres: Vec<String>,
    pub rating: Option<f64>,
    pub duration: Option<String>,
    pub description: Option<String>,
}

impl MovieDetail {
    /// Project down to the grid representation
    pub fn to_summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id.clone(),
            poster_url: self.poster_url.clone(),
            title: self.title.clone(),
            release_year: self.release_year,
            genres: self.genres.clone(),
        }
    }
}

/// A validated, fully-typed draft emitted by the movie form.
///
/// `id` is present only when editing. The form never touches the network;
/// persistence happens in the add/edit flow that receives this value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MovieDraft {
    pub id: Option<String>,
    pub title: String,
    pub release_date: String,
    pub poster_url: String,
    pub rating: f64,
    pub genre: String,
    pub runtime: String,
    pub overview: String,
}

impl MovieDraft {
    /// Prefill a draft from an existing movie for the edit flow
    pub fn from_detail(detail: &MovieDetail) -> Self {
        MovieDraft {
            id: Some(detail.id.clone()),
            title: detail.title.clone(),
            release_date: detail.release_date.clone(),
            poster_url: detail.poster_url.clone(),
            rating: detail.rating.unwrap_or(0.0),
            genre: detail
                .genres
                .first()
                .cloned()
                .unwrap_or_else(|| "COMEDY".to_string()),
            runtime: detail.duration.clone().unwrap_or_default(),
            overview: detail.description.clone().unwrap_or_default(),
        }
    }

    /// Build the wire payload for POST/PUT
    pub fn to_payload(&self) -> Result<MoviePayload> {
        let id = match &self.id {
            Some(raw) => Some(raw.parse::<i64>().map_err(|_| {
                MarqueeError::Api(format!("movie id '{}' is not numeric", raw))
            })?),
            None => None,
        };

        Ok(MoviePayload {
            id,
            title: self.title.clone(),
            release_date: self.release_date.clone(),
            poster_path: self.poster_url.clone(),
            vote_average: self.rating,
            genres: vec![self.genre.clone()],
            runtime: extract_runtime_minutes(&self.runtime),
            overview: self.overview.clone(),
        })
    }
}

/// Pull the digits out of a free-text runtime ("1h 47min" style input)
/// and read them as minutes, defaulting to 0.
pub fn extract_runtime_minutes(input: &str) -> i64 {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Movie record as the backend serves it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendMovie {
    pub id: i64,
    pub title: String,
    pub release_date: String,
    pub poster_path: Option<String>,
    pub vote_average: f64,
    pub runtime: Option<i64>,
    pub overview: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl BackendMovie {
    pub fn to_summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id.to_string(),
            poster_url: self.poster_url(),
            title: self.title.clone(),
            release_year: parse_release_year(&self.release_date),
            genres: self.genres.clone(),
        }
    }

    pub fn to_detail(&self) -> MovieDetail {
        MovieDetail {
            id: self.id.to_string(),
            poster_url: self.poster_url(),
            title: self.title.clone(),
            release_year: parse_release_year(&self.release_date),
            release_date: self.release_date.clone(),
            genres: self.genres.clone(),
            rating: Some(self.vote_average),
            duration: self.runtime.map(|minutes| format!("{} min", minutes)),
            description: Some(self.overview.clone()),
        }
    }

    fn poster_url(&self) -> String {
        match &self.poster_path {
            Some(path) if !path.is_empty() => path.clone(),
            _ => PLACEHOLDER_POSTER.to_string(),
        }
    }
}

/// Derive the release year from an ISO date string.
///
/// Falls back to a leading `YYYY` prefix for partial dates, and to 0 when
/// nothing parseable is present.
pub fn parse_release_year(release_date: &str) -> i16 {
    if let Ok(date) = release_date.parse::<jiff::civil::Date>() {
        return date.year();
    }
    release_date
        .get(..4)
        .and_then(|prefix| prefix.parse().ok())
        .unwrap_or(0)
}

/// Wire payload for POST/PUT `/movies`
#[derive(Debug, Clone, Serialize)]
pub struct MoviePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub release_date: String,
    pub poster_path: String,
    pub vote_average: f64,
    pub genres: Vec<String>,
    pub runtime: i64,
    pub overview: String,
}

/// Envelope around `GET /movies` results. The backend also reports a total
/// amount; only `data` is consumed.
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    pub data: Vec<BackendMovie>,
}

/// Backend query parameters for a catalog fetch.
///
/// Presence rules mirror the location codec: `search`/`searchBy` only for a
/// non-empty query, `filter` only for a real genre, sort always.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogQuery {
    pub search: Option<String>,
    pub filter: Option<String>,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl CatalogQuery {
    pub fn from_filters(filters: &FilterState) -> Self {
        CatalogQuery {
            search: (!filters.query.is_empty()).then(|| filters.query.clone()),
            filter: filters.genre.filter_param().map(str::to_string),
            sort_by: filters.sort_by,
            sort_order: filters.sort_order,
        }
    }

    /// The request's query pairs, in a stable order
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
            pairs.push(("searchBy", "title".to_string()));
        }
        if let Some(filter) = &self.filter {
            pairs.push(("filter", filter.clone()));
        }
        pairs.push(("sortBy", self.sort_by.as_param().to_string()));
        pairs.push(("sortOrder", self.sort_order.as_param().to_string()));
        pairs
    }
}

/// Common interface to the movie service.
///
/// Object-safe so the TUI can hold `Arc<dyn MovieService>` and tests can
/// substitute an in-memory implementation.
#[async_trait::async_trait]
pub trait MovieService: Send + Sync {
    /// Fetch the catalog under the given query
    async fn fetch_movies(&self, query: &CatalogQuery) -> Result<Vec<MovieSummary>>;

    /// Fetch a single movie by id
    async fn fetch_movie(&self, id: &str) -> Result<MovieDetail>;

    /// Create a movie; returns the stored record (with its assigned id)
    async fn create_movie(&self, draft: &MovieDraft) -> Result<MovieDetail>;

    /// Update a movie; the draft must carry an id
    async fn update_movie(&self, draft: &MovieDraft) -> Result<MovieDetail>;

    /// Delete a movie by id
    async fn delete_movie(&self, id: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::GenreTag;

    fn backend_movie() -> BackendMovie {
        BackendMovie {
            id: 550,
            title: "Fight Club".to_string(),
            release_date: "1999-10-15".to_string(),
            poster_path: Some("https://image.tmdb.org/fight-club.jpg".to_string()),
            vote_average: 8.4,
            runtime: Some(139),
            overview: "An insomniac office worker...".to_string(),
            genres: vec!["Drama".to_string()],
        }
    }

    // ========================================================================
    // Transforms
    // ========================================================================

    #[test]
    fn test_summary_transform() {
        let summary = backend_movie().to_summary();
        assert_eq!(summary.id, "550");
        assert_eq!(summary.title, "Fight Club");
        assert_eq!(summary.release_year, 1999);
        assert_eq!(summary.genres, vec!["Drama".to_string()]);
    }

    #[test]
    fn test_detail_transform() {
        let detail = backend_movie().to_detail();
        assert_eq!(detail.rating, Some(8.4));
        assert_eq!(detail.duration.as_deref(), Some("139 min"));
        assert_eq!(detail.description.as_deref(), Some("An insomniac office worker..."));
    }

    #[test]
    fn test_missing_poster_uses_placeholder() {
        let mut movie = backend_movie();
        movie.poster_path = None;
        assert_eq!(movie.to_summary().poster_url, PLACEHOLDER_POSTER);

        movie.poster_path = Some(String::new());
        assert_eq!(movie.to_summary().poster_url, PLACEHOLDER_POSTER);
    }

    #[test]
    fn test_missing_runtime_has_no_duration() {
        let mut movie = backend_movie();
        movie.runtime = None;
        assert_eq!(movie.to_detail().duration, None);
    }

    #[test]
    fn test_missing_genres_default_to_empty() {
        let json = r#"{
            "id": 1,
            "title": "Untagged",
            "release_date": "2020-01-01",
            "poster_path": null,
            "vote_average": 5.0,
            "runtime": null,
            "overview": ""
        }"#;
        let movie: BackendMovie = serde_json::from_str(json).unwrap();
        assert!(movie.genres.is_empty());
        assert!(movie.to_summary().genres.is_empty());
    }

    #[test]
    fn test_release_year_parsing() {
        assert_eq!(parse_release_year("1999-10-15"), 1999);
        assert_eq!(parse_release_year("2024"), 2024);
        assert_eq!(parse_release_year("not a date"), 0);
        assert_eq!(parse_release_year(""), 0);
    }

    #[test]
    fn test_detail_round_trips_through_summary() {
        let detail = backend_movie().to_detail();
        assert_eq!(detail.to_summary(), backend_movie().to_summary());
    }

    // ========================================================================
    // Catalog query construction
    // ========================================================================

    #[test]
    fn test_default_filters_send_only_sort() {
        let query = CatalogQuery::from_filters(&FilterState::default());
        assert_eq!(
            query.to_query_pairs(),
            vec![
                ("sortBy", "releaseDate".to_string()),
                ("sortOrder", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_search_adds_search_by_title() {
        let filters = FilterState::default().with_query("Bohemian");
        let pairs = CatalogQuery::from_filters(&filters).to_query_pairs();
        assert!(pairs.contains(&("search", "Bohemian".to_string())));
        assert!(pairs.contains(&("searchBy", "title".to_string())));
    }

    #[test]
    fn test_genre_filter_param_presence() {
        let filters = FilterState::default().with_genre(GenreTag::Named("COMEDY".to_string()));
        let pairs = CatalogQuery::from_filters(&filters).to_query_pairs();
        assert!(pairs.contains(&("filter", "COMEDY".to_string())));

        let pairs = CatalogQuery::from_filters(&FilterState::default()).to_query_pairs();
        assert!(!pairs.iter().any(|(key, _)| *key == "filter"));
    }

    // ========================================================================
    // Draft payload
    // ========================================================================

    fn draft() -> MovieDraft {
        MovieDraft {
            id: None,
            title: "Arrival".to_string(),
            release_date: "2016-11-11".to_string(),
            poster_url: "https://example.com/arrival.jpg".to_string(),
            rating: 7.9,
            genre: "DOCUMENTARY".to_string(),
            runtime: "116 min".to_string(),
            overview: "A linguist...".to_string(),
        }
    }

    #[test]
    fn test_payload_for_create_has_no_id() {
        let payload = draft().to_payload().unwrap();
        assert_eq!(payload.id, None);
        assert_eq!(payload.runtime, 116);
        assert_eq!(payload.genres, vec!["DOCUMENTARY".to_string()]);

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["poster_path"], "https://example.com/arrival.jpg");
        assert_eq!(json["vote_average"], 7.9);
    }

    #[test]
    fn test_payload_for_update_carries_id() {
        let mut d = draft();
        d.id = Some("550".to_string());
        let payload = d.to_payload().unwrap();
        assert_eq!(payload.id, Some(550));
    }

    #[test]
    fn test_payload_rejects_non_numeric_id() {
        let mut d = draft();
        d.id = Some("abc".to_string());
        assert!(d.to_payload().is_err());
    }

    #[test]
    fn test_edit_prefill_from_detail() {
        let prefill = MovieDraft::from_detail(&backend_movie().to_detail());
        assert_eq!(prefill.id.as_deref(), Some("550"));
        assert_eq!(prefill.release_date, "1999-10-15");
        assert_eq!(prefill.runtime, "139 min");
        assert_eq!(prefill.genre, "Drama");
    }

    #[test]
    fn test_edit_prefill_genre_fallback() {
        let mut movie = backend_movie();
        movie.genres.clear();
        let prefill = MovieDraft::from_detail(&movie.to_detail());
        assert_eq!(prefill.genre, "COMEDY");
    }

    #[test]
    fn test_runtime_digit_extraction() {
        assert_eq!(extract_runtime_minutes("116 min"), 116);
        assert_eq!(extract_runtime_minutes("116"), 116);
        // Digits concatenate across words, matching the submit behavior
        assert_eq!(extract_runtime_minutes("1h 47min"), 147);
        assert_eq!(extract_runtime_minutes("no digits"), 0);
        assert_eq!(extract_runtime_minutes(""), 0);
    }
}
