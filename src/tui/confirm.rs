//! Delete confirmation modal
//!
//! Purely presentational; the browser's key handler performs the
//! confirm/cancel actions.

use iocraft::prelude::*;

use crate::tui::components::{ModalBorderColor, ModalContainer, ModalOverlay, ModalWidth};
use crate::tui::theme::theme;

/// Props for the DeleteConfirmModal component
#[derive(Default, Props)]
pub struct DeleteConfirmModalProps {
    /// Title of the movie being deleted
    pub title: String,
}

/// Confirmation dialog shown before deleting a movie
#[component]
pub fn DeleteConfirmModal(props: &DeleteConfirmModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        ModalOverlay(show_backdrop: Some(true)) {
            ModalContainer(
                width: Some(ModalWidth::Fixed(50)),
                border_color: Some(ModalBorderColor::Warning),
                title: Some("DELETE MOVIE".to_string()),
                title_color: Some(Color::Yellow),
                footer_text: Some("[y] Delete  [Esc] Cancel".to_string()),
            ) {
                View(flex_direction: FlexDirection::Column, gap: 1, padding_top: 1, padding_bottom: 1) {
                    Text(
                        content: format!("Delete \"{}\"?", props.title),
                        color: theme.text,
                    )
                    Text(
                        content: "This cannot be undone.",
                        color: theme.text_dimmed,
                    )
                }
            }
        }
    }
}
