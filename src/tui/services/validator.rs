//! Form validation for the movie form
//!
//! Validation is field-scoped: each rule names the field it belongs to so
//! the form can render errors next to the inputs that caused them.

use std::sync::LazyLock;

use regex::Regex;

/// Fields of the movie form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    ReleaseDate,
    PosterUrl,
    Rating,
    Genre,
    Runtime,
    Overview,
}

impl FormField {
    /// Get the next field (wrapping)
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::ReleaseDate,
            FormField::ReleaseDate => FormField::PosterUrl,
            FormField::PosterUrl => FormField::Rating,
            FormField::Rating => FormField::Genre,
            FormField::Genre => FormField::Runtime,
            FormField::Runtime => FormField::Overview,
            FormField::Overview => FormField::Title,
        }
    }

    /// Get the previous field (wrapping)
    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Overview,
            FormField::ReleaseDate => FormField::Title,
            FormField::PosterUrl => FormField::ReleaseDate,
            FormField::Rating => FormField::PosterUrl,
            FormField::Genre => FormField::Rating,
            FormField::Runtime => FormField::Genre,
            FormField::Overview => FormField::Runtime,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::ReleaseDate => "Release Date",
            FormField::PosterUrl => "Poster URL",
            FormField::Rating => "Rating",
            FormField::Genre => "Genre",
            FormField::Runtime => "Runtime",
            FormField::Overview => "Overview",
        }
    }
}

/// A validation failure attached to a single form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://\S+$").expect("valid url regex"));

/// Validator for the movie form
pub struct MovieFormValidator;

impl MovieFormValidator {
    /// Validate the whole form, collecting one error per failing field
    pub fn validate(
        title: &str,
        release_date: &str,
        poster_url: &str,
        rating: &str,
        genre: &str,
        runtime: &str,
        overview: &str,
    ) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if title.trim().is_empty() {
            errors.push(FieldError {
                field: FormField::Title,
                message: "Title is required".to_string(),
            });
        }

        if let Some(message) = Self::check_release_date(release_date) {
            errors.push(FieldError {
                field: FormField::ReleaseDate,
                message,
            });
        }

        if let Some(message) = Self::check_poster_url(poster_url) {
            errors.push(FieldError {
                field: FormField::PosterUrl,
                message,
            });
        }

        if let Some(message) = Self::check_rating(rating) {
            errors.push(FieldError {
                field: FormField::Rating,
                message,
            });
        }

        if genre.trim().is_empty() {
            errors.push(FieldError {
                field: FormField::Genre,
                message: "Select at least one genre".to_string(),
            });
        }

        if let Some(message) = Self::check_runtime(runtime) {
            errors.push(FieldError {
                field: FormField::Runtime,
                message,
            });
        }

        if overview.trim().is_empty() {
            errors.push(FieldError {
                field: FormField::Overview,
                message: "Overview is required".to_string(),
            });
        }

        errors
    }

    fn check_release_date(value: &str) -> Option<String> {
        if value.trim().is_empty() {
            return Some("Release date is required".to_string());
        }
        match value.trim().parse::<jiff::civil::Date>() {
            Ok(_) => None,
            Err(_) => Some("Use a valid date in YYYY-MM-DD form".to_string()),
        }
    }

    fn check_poster_url(value: &str) -> Option<String> {
        if value.trim().is_empty() {
            return Some("Poster URL is required".to_string());
        }
        if URL_RE.is_match(value.trim()) {
            None
        } else {
            Some("Enter an http(s) URL".to_string())
        }
    }

    fn check_rating(value: &str) -> Option<String> {
        if value.trim().is_empty() {
            return Some("Rating is required".to_string());
        }
        match value.trim().parse::<f64>() {
            Ok(r) if (0.0..=10.0).contains(&r) => None,
            Ok(_) => Some("Rating must be between 0 and 10".to_string()),
            Err(_) => Some("Rating must be a number".to_string()),
        }
    }

    fn check_runtime(value: &str) -> Option<String> {
        if value.trim().is_empty() {
            return Some("Runtime is required".to_string());
        }
        if value.chars().any(|c| c.is_ascii_digit()) {
            None
        } else {
            Some("Runtime must contain a number of minutes".to_string())
        }
    }
}

/// First error for the given field, if any
pub fn error_for(errors: &[FieldError], field: FormField) -> Option<&str> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Vec<FieldError> {
        MovieFormValidator::validate(
            "Bohemian Rhapsody",
            "2018-10-24",
            "https://image.example.com/poster.jpg",
            "8.0",
            "COMEDY",
            "134",
            "The story of Queen.",
        )
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(valid().is_empty());
    }

    #[test]
    fn test_empty_title() {
        let errors = MovieFormValidator::validate(
            "  ",
            "2018-10-24",
            "https://a/b.jpg",
            "8.0",
            "COMEDY",
            "134",
            "x",
        );
        assert_eq!(error_for(&errors, FormField::Title), Some("Title is required"));
    }

    #[test]
    fn test_bad_release_date() {
        let errors = MovieFormValidator::validate(
            "T",
            "2018-13-40",
            "https://a/b.jpg",
            "8.0",
            "COMEDY",
            "134",
            "x",
        );
        assert!(error_for(&errors, FormField::ReleaseDate).is_some());
    }

    #[test]
    fn test_bad_poster_url() {
        let errors =
            MovieFormValidator::validate("T", "2018-10-24", "poster.jpg", "8.0", "COMEDY", "134", "x");
        assert_eq!(
            error_for(&errors, FormField::PosterUrl),
            Some("Enter an http(s) URL")
        );
    }

    #[test]
    fn test_rating_out_of_range() {
        let errors = MovieFormValidator::validate(
            "T",
            "2018-10-24",
            "https://a/b.jpg",
            "11",
            "COMEDY",
            "134",
            "x",
        );
        assert_eq!(
            error_for(&errors, FormField::Rating),
            Some("Rating must be between 0 and 10")
        );
    }

    #[test]
    fn test_rating_not_a_number() {
        let errors = MovieFormValidator::validate(
            "T",
            "2018-10-24",
            "https://a/b.jpg",
            "great",
            "COMEDY",
            "134",
            "x",
        );
        assert_eq!(
            error_for(&errors, FormField::Rating),
            Some("Rating must be a number")
        );
    }

    #[test]
    fn test_runtime_needs_digits() {
        let errors = MovieFormValidator::validate(
            "T",
            "2018-10-24",
            "https://a/b.jpg",
            "8",
            "COMEDY",
            "long",
            "x",
        );
        assert!(error_for(&errors, FormField::Runtime).is_some());
    }

    #[test]
    fn test_runtime_accepts_freeform_with_digits() {
        let errors = MovieFormValidator::validate(
            "T",
            "2018-10-24",
            "https://a/b.jpg",
            "8",
            "COMEDY",
            "2h 14min",
            "x",
        );
        assert!(error_for(&errors, FormField::Runtime).is_none());
    }

    #[test]
    fn test_multiple_errors_are_field_scoped() {
        let errors = MovieFormValidator::validate("", "", "", "", "", "", "");
        assert_eq!(errors.len(), 7);
        assert!(error_for(&errors, FormField::Overview).is_some());
        assert!(error_for(&errors, FormField::Genre).is_some());
    }

    #[test]
    fn test_field_cycle_round_trip() {
        let mut field = FormField::Title;
        for _ in 0..7 {
            field = field.next();
        }
        assert_eq!(field, FormField::Title);
        assert_eq!(FormField::Title.prev(), FormField::Overview);
    }
}
