//! Styled buttons shared by every page

use std::time::Duration;

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Padding};

use crate::ui::animation::pulse;
use crate::ui::theme;

/// Rose pill with a label; disabled when `on_press` is `None`
pub fn romantic_button<'a, Message: Clone + 'a>(
    label: &'a str,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    button(text(label).size(18))
        .padding(Padding::new(14.0).left(36.0).right(36.0))
        .style(theme::romantic_button)
        .on_press_maybe(on_press)
        .into()
}

/// Gold pill for opening the gift
pub fn gold_button<'a, Message: Clone + 'a>(
    label: &'a str,
    on_press: Message,
) -> Element<'a, Message> {
    button(text(label).size(18))
        .padding(Padding::new(14.0).left(36.0).right(36.0))
        .style(theme::gold_button)
        .on_press(on_press)
        .into()
}

/// Height of each equalizer bar while playing
fn bar_heights(elapsed: Duration) -> [f32; 3] {
    let periods = [520, 680, 440];
    periods.map(|ms| 4.0 + 10.0 * pulse(elapsed, Duration::from_millis(ms)))
}

/// Pulse period of the ring before the music has been heard
const ATTENTION_PERIOD: Duration = Duration::from_millis(1600);

/// Ring glow, 0.0 when `attention` is off
fn attention_glow(attention: bool, elapsed: Duration) -> f32 {
    if attention {
        pulse(elapsed, ATTENTION_PERIOD)
    } else {
        0.0
    }
}

/// Round floating music toggle
///
/// Shows the playing or paused icon, with small bouncing bars while sound
/// is coming out. With `attention` the ring pulses gold.
pub fn music_button<'a, Message: Clone + 'a>(
    playing: bool,
    playing_icon: &'a str,
    paused_icon: &'a str,
    elapsed: Duration,
    attention: bool,
    on_press: Message,
) -> Element<'a, Message> {
    let icon = if playing { playing_icon } else { paused_icon };
    let glow = attention_glow(attention, elapsed);

    let bars: Element<'a, Message> = if playing {
        let heights = bar_heights(elapsed);
        row(heights.into_iter().map(|height| {
            container(Space::new().width(3).height(height))
                .style(theme::divider)
                .into()
        }))
        .spacing(2)
        .height(14)
        .align_y(Alignment::End)
        .into()
    } else {
        Space::new().width(0).height(0).into()
    };

    button(
        column![text(icon).size(22), bars]
            .align_x(Alignment::Center)
            .spacing(2),
    )
    .width(56)
    .height(56)
    .padding(8)
    .style(theme::music_button(glow))
    .on_press(on_press)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bars_stay_inside_button() {
        for ms in (0..2000).step_by(50) {
            for height in bar_heights(Duration::from_millis(ms)) {
                assert!((4.0..=14.0).contains(&height));
            }
        }
    }

    #[test]
    fn test_attention_glow_only_when_asked() {
        for ms in (0..3200).step_by(100) {
            let elapsed = Duration::from_millis(ms);
            assert_eq!(attention_glow(false, elapsed), 0.0);
            assert!((0.0..=1.0).contains(&attention_glow(true, elapsed)));
        }
        assert!(attention_glow(true, ATTENTION_PERIOD / 2) > 0.9);
    }
}
