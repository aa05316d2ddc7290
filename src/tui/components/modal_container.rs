//! Modal container component
//!
//! Provides a standardized modal box with header, content area, and footer.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Predefined modal border colors for common use cases
#[derive(Clone, Copy, Default)]
pub enum ModalBorderColor {
    #[default]
    Focused,
    Warning,
    Error,
}

impl ModalBorderColor {
    pub fn to_color(&self) -> Color {
        match self {
            Self::Focused => theme().border_focused,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// Modal width configuration
#[derive(Clone)]
pub enum ModalWidth {
    Fixed(u32),
    Percent(u32),
}

impl Default for ModalWidth {
    fn default() -> Self {
        Self::Fixed(60)
    }
}

/// Modal height configuration
#[derive(Clone, Default)]
pub enum ModalHeight {
    #[default]
    Auto,
    Fixed(u32),
    Percent(u32),
}

/// Props for the ModalContainer component
#[derive(Default, Props)]
pub struct ModalContainerProps<'a> {
    pub width: Option<ModalWidth>,
    pub height: Option<ModalHeight>,
    pub border_color: Option<ModalBorderColor>,
    pub title: Option<String>,
    pub title_color: Option<Color>,
    pub footer_text: Option<String>,
    pub children: Vec<AnyElement<'a>>,
}

/// Modal box with optional titled header and footer hint line
#[component]
pub fn ModalContainer<'a>(props: &mut ModalContainerProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let border_color = props.border_color.unwrap_or_default().to_color();
    let title_color = props.title_color.unwrap_or(theme.accent);

    let width = props.width.clone().unwrap_or_default();
    let height = props.height.clone().unwrap_or_default();

    let has_title = props.title.is_some();
    let has_footer = props.footer_text.is_some();

    element! {
        View(
            width: match &width {
                ModalWidth::Fixed(n) => Size::Length(*n),
                ModalWidth::Percent(n) => Size::Percent(*n as f32),
            },
            height: match &height {
                ModalHeight::Auto => Size::Auto,
                ModalHeight::Fixed(n) => Size::Length(*n),
                ModalHeight::Percent(n) => Size::Percent(*n as f32),
            },
            background_color: theme.background,
            border_style: BorderStyle::Double,
            border_color: border_color,
            padding: 1,
            flex_direction: FlexDirection::Column,
        ) {
            #(if has_title {
                let title = props.title.clone().unwrap_or_default();
                Some(element! {
                    View(
                        width: 100pct,
                        padding_bottom: 1,
                        border_edges: Edges::Bottom,
                        border_style: BorderStyle::Single,
                        border_color: theme.border,
                        flex_direction: FlexDirection::Row,
                    ) {
                        Text(
                            content: title,
                            color: title_color,
                            weight: Weight::Bold,
                        )
                    }
                })
            } else {
                None
            })

            // Content area
            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::Hidden,
            ) {
                #(std::mem::take(&mut props.children))
            }

            #(if has_footer {
                let footer = props.footer_text.clone().unwrap_or_default();
                Some(element! {
                    View(
                        width: 100pct,
                        padding_top: 1,
                        border_edges: Edges::Top,
                        border_style: BorderStyle::Single,
                        border_color: theme.border,
                    ) {
                        Text(content: footer, color: theme.text_dimmed)
                    }
                })
            } else {
                None
            })
        }
    }
}
