//! Movie form modal for creating and editing movies
//!
//! One form serves both flows: with a movie the form edits it, without one
//! it creates a new record. Validation errors are field-scoped and render
//! next to the input that caused them. The form never touches the network:
//! it emits a validated [`MovieDraft`] and the browser persists it.

use iocraft::prelude::*;

use crate::api::{MovieDetail, MovieDraft};
use crate::filters::FORM_GENRES;
use crate::tui::components::{Footer, form_shortcuts};
use crate::tui::services::{FieldError, FormField, MovieFormValidator, error_for};
use crate::tui::theme::theme;

/// Result of the movie form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormOutcome {
    /// User saved changes
    Saved,
    /// User cancelled without saving
    Cancelled,
    /// Still editing
    #[default]
    Editing,
}

/// Props for the MovieForm component
#[derive(Default, Props)]
pub struct MovieFormProps {
    /// Movie being edited; None means creating a new one
    pub movie: Option<MovieDetail>,
    /// Callback when the form is closed
    pub on_close: Option<State<FormOutcome>>,
    /// Receives the validated draft; the browser persists it
    pub submitted: Option<State<Option<MovieDraft>>>,
    /// Save failure reported back by the browser's save handler
    pub save_error: Option<State<String>>,
    /// Whether a save is in flight
    pub is_saving: Option<State<bool>>,
}

/// Initial field values, kept around for Ctrl+R reset
#[derive(Clone, Default)]
struct InitialValues {
    title: String,
    release_date: String,
    poster_url: String,
    rating: String,
    genre_index: usize,
    runtime: String,
    overview: String,
}

impl InitialValues {
    fn from_movie(movie: &Option<MovieDetail>) -> Self {
        let Some(movie) = movie else {
            return Self::default();
        };

        let genre_index = movie
            .genres
            .first()
            .and_then(|g| {
                FORM_GENRES
                    .iter()
                    .position(|f| f.eq_ignore_ascii_case(g.as_str()))
            })
            .unwrap_or(0);

        Self {
            title: movie.title.clone(),
            release_date: movie.release_date.clone(),
            poster_url: movie.poster_url.clone(),
            rating: movie
                .rating
                .map(|r| format!("{r}"))
                .unwrap_or_default(),
            genre_index,
            // Strip the display suffix back to the stored minutes
            runtime: movie
                .duration
                .as_deref()
                .map(|d| d.trim_end_matches(" min").to_string())
                .unwrap_or_default(),
            overview: movie.description.clone().unwrap_or_default(),
        }
    }
}

/// Full movie form modal component
#[component]
pub fn MovieForm<'a>(props: &MovieFormProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let initial = InitialValues::from_movie(&props.movie);
    let movie_id = props.movie.as_ref().map(|m| m.id.clone());
    let is_new = movie_id.is_none();

    // State for form fields
    let mut title = hooks.use_state(|| initial.title.clone());
    let mut release_date = hooks.use_state(|| initial.release_date.clone());
    let mut poster_url = hooks.use_state(|| initial.poster_url.clone());
    let mut rating = hooks.use_state(|| initial.rating.clone());
    let mut genre_index = hooks.use_state(|| initial.genre_index);
    let mut runtime = hooks.use_state(|| initial.runtime.clone());
    let mut overview = hooks.use_state(|| initial.overview.clone());

    // UI state
    let mut focused_field = hooks.use_state(FormField::default);
    let mut should_save = hooks.use_state(|| false);
    let mut should_cancel = hooks.use_state(|| false);
    let mut should_reset = hooks.use_state(|| false);
    let mut field_errors = hooks.use_state(Vec::<FieldError>::new);

    // Save state lives with the browser, which owns persistence
    let saving = props.is_saving.map(|s| s.get()).unwrap_or(false);
    let save_error_text = props
        .save_error
        .map(|s| s.to_string())
        .unwrap_or_default();

    // Handle save logic: validate, then emit the draft
    if should_save.get() && !saving {
        should_save.set(false);

        let genre = FORM_GENRES
            .get(genre_index.get())
            .copied()
            .unwrap_or(FORM_GENRES[0]);
        let errors = MovieFormValidator::validate(
            &title.to_string(),
            &release_date.to_string(),
            &poster_url.to_string(),
            &rating.to_string(),
            genre,
            &runtime.to_string(),
            &overview.to_string(),
        );

        if errors.is_empty() {
            field_errors.set(Vec::new());
            if let Some(mut submitted) = props.submitted {
                submitted.set(Some(build_draft(
                    movie_id.clone(),
                    &title.to_string(),
                    &release_date.to_string(),
                    &poster_url.to_string(),
                    &rating.to_string(),
                    genre,
                    &runtime.to_string(),
                    &overview.to_string(),
                )));
            }
        } else {
            // Jump focus to the first failing field
            if let Some(first) = errors.first() {
                focused_field.set(first.field);
            }
            field_errors.set(errors);
        }
    }

    // Handle cancel
    if should_cancel.get() {
        should_cancel.set(false);
        if let Some(mut on_close) = props.on_close {
            on_close.set(FormOutcome::Cancelled);
        }
    }

    // Handle reset
    if should_reset.get() {
        should_reset.set(false);
        title.set(initial.title.clone());
        release_date.set(initial.release_date.clone());
        poster_url.set(initial.poster_url.clone());
        rating.set(initial.rating.clone());
        genre_index.set(initial.genre_index);
        runtime.set(initial.runtime.clone());
        overview.set(initial.overview.clone());
        field_errors.set(Vec::new());
        if let Some(mut save_error) = props.save_error {
            save_error.set(String::new());
        }
    }

    // Keyboard handling
    hooks.use_terminal_events({
        move |event| {
            if let TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = event
            {
                if kind == KeyEventKind::Release {
                    return;
                }

                // Global shortcuts (work in any field)
                if modifiers.contains(KeyModifiers::CONTROL) {
                    match code {
                        KeyCode::Char('s') => {
                            should_save.set(true);
                            return;
                        }
                        KeyCode::Char('r') => {
                            should_reset.set(true);
                            return;
                        }
                        _ => {}
                    }
                }

                match code {
                    KeyCode::Esc => {
                        should_cancel.set(true);
                        return;
                    }
                    KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => {
                        focused_field.set(focused_field.get().prev());
                        return;
                    }
                    KeyCode::Tab => {
                        focused_field.set(focused_field.get().next());
                        return;
                    }
                    KeyCode::BackTab => {
                        focused_field.set(focused_field.get().prev());
                        return;
                    }
                    _ => {}
                }

                // Field-specific handling
                match focused_field.get() {
                    FormField::Title => handle_text_input(&mut title, code),
                    FormField::ReleaseDate => handle_text_input(&mut release_date, code),
                    FormField::PosterUrl => handle_text_input(&mut poster_url, code),
                    FormField::Rating => handle_text_input(&mut rating, code),
                    FormField::Genre => handle_genre_input(&mut genre_index, code),
                    FormField::Runtime => handle_text_input(&mut runtime, code),
                    FormField::Overview => handle_overview_input(&mut overview, code),
                }
            }
        }
    });

    let header_title = if is_new {
        "ADD MOVIE".to_string()
    } else {
        "EDIT MOVIE".to_string()
    };

    let errors = field_errors.read().clone();
    let focused = focused_field.get();
    let genre_value = FORM_GENRES
        .get(genre_index.get())
        .copied()
        .unwrap_or(FORM_GENRES[0])
        .to_string();

    element! {
        // Modal backdrop
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            background_color: Color::Rgb { r: 30, g: 30, b: 30 },
        ) {
            // Modal content
            View(
                width: 80pct,
                height: 90pct,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: theme.accent,
                background_color: theme.background,
            ) {
                // Header
                View(
                    width: 100pct,
                    height: 1,
                    padding_left: 1,
                    border_edges: Edges::Bottom,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                    background_color: theme.border,
                ) {
                    Text(
                        content: header_title,
                        color: theme.accent,
                        weight: Weight::Bold,
                    )
                }

                // Save error (backend failures, distinct from field errors)
                #(if !save_error_text.is_empty() {
                    Some(element! {
                        View(
                            width: 100pct,
                            padding_left: 1,
                            padding_right: 1,
                            margin_top: 1,
                        ) {
                            Text(
                                content: save_error_text.clone(),
                                color: theme.error,
                            )
                        }
                    })
                } else {
                    None
                })

                // Form content
                View(
                    flex_grow: 1.0,
                    width: 100pct,
                    padding: 1,
                    flex_direction: FlexDirection::Column,
                    gap: 1,
                    overflow: Overflow::Hidden,
                ) {
                    #(text_field(
                        FormField::Title,
                        &title.to_string(),
                        focused,
                        error_for(&errors, FormField::Title),
                    ))

                    // Row: release date and rating
                    View(flex_direction: FlexDirection::Row, gap: 2) {
                        #(text_field(
                            FormField::ReleaseDate,
                            &release_date.to_string(),
                            focused,
                            error_for(&errors, FormField::ReleaseDate),
                        ))
                        #(text_field(
                            FormField::Rating,
                            &rating.to_string(),
                            focused,
                            error_for(&errors, FormField::Rating),
                        ))
                    }

                    #(text_field(
                        FormField::PosterUrl,
                        &poster_url.to_string(),
                        focused,
                        error_for(&errors, FormField::PosterUrl),
                    ))

                    // Row: genre select and runtime
                    View(flex_direction: FlexDirection::Row, gap: 2) {
                        View(flex_direction: FlexDirection::Column) {
                            Text(
                                content: "Genre:",
                                color: if focused == FormField::Genre {
                                    theme.border_focused
                                } else {
                                    theme.text_dimmed
                                },
                            )
                            View(
                                border_style: BorderStyle::Round,
                                border_color: if focused == FormField::Genre {
                                    theme.border_focused
                                } else {
                                    theme.border
                                },
                                padding_left: 1,
                                padding_right: 1,
                                min_width: 18,
                            ) {
                                View(flex_direction: FlexDirection::Row, gap: 1) {
                                    Text(content: "◀", color: theme.text_dimmed)
                                    Text(content: genre_value, color: theme.genre_tag)
                                    Text(content: "▶", color: theme.text_dimmed)
                                }
                            }
                        }
                        #(text_field(
                            FormField::Runtime,
                            &runtime.to_string(),
                            focused,
                            error_for(&errors, FormField::Runtime),
                        ))
                    }

                    // Overview label
                    View(flex_direction: FlexDirection::Row, gap: 2) {
                        Text(
                            content: "Overview:",
                            color: if focused == FormField::Overview {
                                theme.border_focused
                            } else {
                                theme.text_dimmed
                            },
                        )
                        #(error_for(&errors, FormField::Overview).map(|message| element! {
                            Text(content: message.to_string(), color: theme.error)
                        }))
                    }

                    // Overview text area
                    View(
                        flex_grow: 1.0,
                        width: 100pct,
                        border_style: BorderStyle::Round,
                        border_color: if focused == FormField::Overview {
                            theme.border_focused
                        } else {
                            theme.border
                        },
                        padding: 1,
                        overflow: Overflow::Hidden,
                    ) {
                        View(flex_direction: FlexDirection::Column, height: 100pct) {
                            #({
                                let text = overview.to_string();
                                let is_focused = focused == FormField::Overview;

                                if text.is_empty() {
                                    vec![
                                        element! {
                                            Text(
                                                content: if is_focused { "_" } else { "" },
                                                color: theme.text,
                                            )
                                        }
                                        .into(),
                                    ]
                                } else {
                                    let mut elements: Vec<AnyElement<'static>> = Vec::new();
                                    for line in text.lines() {
                                        let line_owned = line.to_string();
                                        elements.push(
                                            element! {
                                                Text(content: line_owned, color: theme.text)
                                            }
                                            .into(),
                                        );
                                    }
                                    if is_focused {
                                        elements.push(
                                            element! {
                                                Text(content: "_", color: theme.highlight)
                                            }
                                            .into(),
                                        );
                                    }
                                    elements
                                }
                            })
                        }
                    }

                    #(if saving {
                        Some(element! {
                            Text(content: "Saving...", color: theme.text_dimmed)
                        })
                    } else {
                        None
                    })
                }

                // Footer
                Footer(shortcuts: form_shortcuts())
            }
        }
    }
}

/// Render a labelled single-line text field with its error, if any
fn text_field(
    field: FormField,
    value: &str,
    focused: FormField,
    error: Option<&str>,
) -> AnyElement<'static> {
    let theme = theme();
    let is_focused = focused == field;
    let label = field.label();
    let content = if is_focused {
        format!("{value}_")
    } else {
        value.to_string()
    };
    let error = error.map(str::to_string);

    element! {
        View(flex_direction: FlexDirection::Column, flex_grow: 1.0) {
            View(flex_direction: FlexDirection::Row, gap: 2) {
                Text(
                    content: format!("{label}:"),
                    color: if is_focused {
                        theme.border_focused
                    } else {
                        theme.text_dimmed
                    },
                )
                #(error.map(|message| element! {
                    Text(content: message, color: theme.error)
                }))
            }
            View(
                border_style: BorderStyle::Round,
                border_color: if is_focused {
                    theme.border_focused
                } else {
                    theme.border
                },
                padding_left: 1,
                padding_right: 1,
                width: 100pct,
            ) {
                Text(content: content, color: theme.text)
            }
        }
    }
    .into()
}

/// Handle text input for single-line fields
fn handle_text_input(state: &mut State<String>, code: KeyCode) {
    match code {
        KeyCode::Char(c) => {
            let mut val = state.to_string();
            val.push(c);
            state.set(val);
        }
        KeyCode::Backspace => {
            let mut val = state.to_string();
            val.pop();
            state.set(val);
        }
        _ => {}
    }
}

/// Handle input for the multi-line overview field
fn handle_overview_input(state: &mut State<String>, code: KeyCode) {
    match code {
        KeyCode::Char(c) => {
            let mut val = state.to_string();
            val.push(c);
            state.set(val);
        }
        KeyCode::Enter => {
            let mut val = state.to_string();
            val.push('\n');
            state.set(val);
        }
        KeyCode::Backspace => {
            let mut val = state.to_string();
            val.pop();
            state.set(val);
        }
        _ => {}
    }
}

/// Handle select input for the genre field
fn handle_genre_input(state: &mut State<usize>, code: KeyCode) {
    let len = FORM_GENRES.len();
    match code {
        KeyCode::Left | KeyCode::Char('h') => {
            let current = state.get();
            state.set(if current == 0 { len - 1 } else { current - 1 });
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter | KeyCode::Char(' ') => {
            state.set((state.get() + 1) % len);
        }
        _ => {}
    }
}

/// Assemble validated field values into the draft the browser persists.
/// Validation has already run, so the rating string is known numeric.
#[allow(clippy::too_many_arguments)]
fn build_draft(
    movie_id: Option<String>,
    title: &str,
    release_date: &str,
    poster_url: &str,
    rating: &str,
    genre: &str,
    runtime: &str,
    overview: &str,
) -> MovieDraft {
    MovieDraft {
        id: movie_id,
        title: title.trim().to_string(),
        release_date: release_date.trim().to_string(),
        poster_url: poster_url.trim().to_string(),
        rating: rating.trim().parse().unwrap_or(0.0),
        genre: genre.to_string(),
        runtime: runtime.trim().to_string(),
        overview: overview.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_values_for_new_movie() {
        let initial = InitialValues::from_movie(&None);
        assert_eq!(initial.title, "");
        assert_eq!(initial.genre_index, 0);
    }

    #[test]
    fn test_initial_values_prefill_from_movie() {
        let movie = MovieDetail {
            id: "7".to_string(),
            poster_url: "https://img.example.com/p.jpg".to_string(),
            title: "Heat".to_string(),
            release_year: 1995,
            release_date: "1995-12-15".to_string(),
            genres: vec!["CRIME".to_string()],
            rating: Some(8.3),
            duration: Some("170 min".to_string()),
            description: Some("A heist.".to_string()),
        };
        let initial = InitialValues::from_movie(&Some(movie));
        assert_eq!(initial.title, "Heat");
        assert_eq!(initial.release_date, "1995-12-15");
        assert_eq!(initial.rating, "8.3");
        assert_eq!(FORM_GENRES[initial.genre_index], "CRIME");
        assert_eq!(initial.runtime, "170");
        assert_eq!(initial.overview, "A heist.");
    }

    #[test]
    fn test_initial_values_unknown_genre_falls_back() {
        let movie = MovieDetail {
            id: "7".to_string(),
            poster_url: "https://img.example.com/p.jpg".to_string(),
            title: "X".to_string(),
            release_year: 2001,
            release_date: "2001-01-01".to_string(),
            genres: vec!["WESTERN".to_string()],
            rating: None,
            duration: None,
            description: None,
        };
        let initial = InitialValues::from_movie(&Some(movie));
        assert_eq!(initial.genre_index, 0);
        assert_eq!(initial.rating, "");
        assert_eq!(initial.runtime, "");
    }

    #[test]
    fn test_build_draft_normalizes_fields() {
        let draft = build_draft(
            None,
            "  Arrival ",
            " 2016-11-11",
            "https://example.com/arrival.jpg ",
            " 7.9 ",
            "DOCUMENTARY",
            " 116 ",
            " A linguist. ",
        );
        assert_eq!(draft.id, None);
        assert_eq!(draft.title, "Arrival");
        assert_eq!(draft.release_date, "2016-11-11");
        assert_eq!(draft.rating, 7.9);
        assert_eq!(draft.runtime, "116");
        assert_eq!(draft.overview, "A linguist.");
    }

    #[test]
    fn test_build_draft_carries_edit_id() {
        let draft = build_draft(
            Some("550".to_string()),
            "Fight Club",
            "1999-10-15",
            "https://example.com/fc.jpg",
            "8.4",
            "CRIME",
            "139",
            "An insomniac office worker.",
        );
        assert_eq!(draft.id.as_deref(), Some("550"));
        assert_eq!(draft.genre, "CRIME");
    }
}
