//! Catalog listing command (`marquee ls`)
//!
//! Queries the movie service with the same filter parameters the TUI uses
//! and prints the result as a table or JSON.

use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::api::http::HttpMovieService;
use crate::api::{CatalogQuery, MovieService};
use crate::commands::print_json;
use crate::config::Config;
use crate::error::Result;
use crate::filters::{FilterState, GenreTag, SortKey, SortOrder};

/// A row in the movie listing table
#[derive(Tabled)]
struct MovieRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Year")]
    year: String,
    #[tabled(rename = "Genres")]
    genres: String,
}

/// Execute the ls command
pub async fn cmd_ls(
    query: Option<&str>,
    genre: Option<GenreTag>,
    sort_by: SortKey,
    sort_order: SortOrder,
    json: bool,
) -> Result<()> {
    let mut filters = FilterState::default()
        .with_sort_by(sort_by)
        .with_sort_order(sort_order);
    if let Some(q) = query {
        filters = filters.with_query(q);
    }
    if let Some(g) = genre {
        filters = filters.with_genre(g);
    }

    let config = Config::load()?;
    let service = HttpMovieService::from_config(&config)?;
    let movies = service
        .fetch_movies(&CatalogQuery::from_filters(&filters))
        .await?;

    if json {
        let rows: Vec<serde_json::Value> = movies
            .iter()
            .map(|m| {
                json!({
                    "id": m.id,
                    "title": m.title,
                    "release_year": m.release_year,
                    "genres": m.genres,
                    "poster_url": m.poster_url,
                })
            })
            .collect();
        print_json(&json!(rows))?;
    } else if movies.is_empty() {
        println!("No movies found.");
    } else {
        let rows: Vec<MovieRow> = movies
            .iter()
            .map(|m| MovieRow {
                id: m.id.clone(),
                title: m.title.clone(),
                year: m.release_year.to_string(),
                genres: m.genres.join(", "),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        println!("\n{} movie(s)", movies.len());
    }

    Ok(())
}
