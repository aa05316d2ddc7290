//! Single movie display command (`marquee show`)

use owo_colors::OwoColorize;
use serde_json::json;

use crate::api::MovieService;
use crate::api::http::HttpMovieService;
use crate::commands::print_json;
use crate::config::Config;
use crate::error::Result;

/// Execute the show command
pub async fn cmd_show(id: &str, json: bool) -> Result<()> {
    let config = Config::load()?;
    let service = HttpMovieService::from_config(&config)?;
    let movie = service.fetch_movie(id).await?;

    if json {
        print_json(&json!({
            "id": movie.id,
            "title": movie.title,
            "release_date": movie.release_date,
            "release_year": movie.release_year,
            "genres": movie.genres,
            "rating": movie.rating,
            "duration": movie.duration,
            "description": movie.description,
            "poster_url": movie.poster_url,
        }))?;
        return Ok(());
    }

    println!("{}", movie.title.bold());
    println!();
    println!("  {} {}", "Released:".cyan(), movie.release_date);
    if let Some(rating) = movie.rating {
        println!("  {} {:.1}", "Rating:  ".cyan(), rating);
    }
    if let Some(ref duration) = movie.duration {
        println!("  {} {}", "Runtime: ".cyan(), duration);
    }
    println!("  {} {}", "Genres:  ".cyan(), movie.genres.join(", "));
    println!("  {} {}", "Poster:  ".cyan(), movie.poster_url);
    if let Some(ref description) = movie.description {
        println!();
        println!("{description}");
    }

    Ok(())
}
