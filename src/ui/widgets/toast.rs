//! Toast notification widget
//!
//! A single floating pill with an icon and a short message. Opacity comes
//! from the caller so the toast can fade in and out.

use iced::widget::{Space, container, row, text};
use iced::{Alignment, Element, Padding};

use crate::ui::theme;

/// Toast notification data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub icon: &'static str,
    pub visible: bool,
}

impl Toast {
    pub fn new(icon: &'static str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            icon,
            visible: true,
        }
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// Build a toast at `opacity`
///
/// A hidden toast is still drawn while it fades out.
pub fn view_toast<'a, Message: 'a>(toast: &Toast, opacity: f32) -> Element<'a, Message> {
    if opacity <= 0.0 {
        return Space::new().width(0).height(0).into();
    }

    let content = row![
        text(toast.icon).size(16),
        Space::new().width(10),
        text(toast.message.clone()).size(14),
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(12.0).left(18.0).right(22.0));

    container(content)
        .style(move |_theme| theme::toast(opacity))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hide() {
        let mut toast = Toast::new("🎵", "Music is playing");
        assert!(toast.visible);
        toast.hide();
        assert!(!toast.visible);
    }
}
