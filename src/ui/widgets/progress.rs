//! Reading progress indicators

use iced::widget::{Space, container, row, text};
use iced::{Alignment, Element, Length};

use crate::ui::theme;

/// Resolution of the filled share of the bar
const PORTIONS: u16 = 1000;

/// Split `progress` into filled and empty portions
fn portions(progress: f32) -> (u16, u16) {
    let filled = (progress.clamp(0.0, 1.0) * PORTIONS as f32).round() as u16;
    (filled, PORTIONS - filled)
}

/// Thin horizontal bar filled to `progress` (0.0 to 1.0)
pub fn progress_bar<'a, Message: 'a>(progress: f32, width: f32) -> Element<'a, Message> {
    let (filled, empty) = portions(progress);

    let mut bar = row![].height(6).width(Length::Fill);
    if filled > 0 {
        bar = bar.push(
            container(Space::new().width(Length::Fill).height(6))
                .width(Length::FillPortion(filled))
                .style(theme::progress_fill),
        );
    }
    if empty > 0 {
        bar = bar.push(Space::new().width(Length::FillPortion(empty)).height(6));
    }

    container(bar)
        .width(width)
        .height(6)
        .style(theme::progress_track)
        .into()
}

/// One heart per note, filled for those already reached
pub fn heart_dots<'a, Message: 'a>(
    reached: impl Iterator<Item = bool>,
    read_glyph: &'a str,
    unread_glyph: &'a str,
) -> Element<'a, Message> {
    row(reached.map(|reached| {
        let (glyph, color) = if reached {
            (read_glyph, theme::HOT_PINK)
        } else {
            (unread_glyph, theme::TEXT_MUTED)
        };
        text(glyph).size(14).color(color).into()
    }))
    .spacing(6)
    .align_y(Alignment::Center)
    .into()
}
