//! Romantic palette and widget styles
//! Deep plum background with rose and gold accents

use iced::color;
use iced::gradient::Linear;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Gradient, Radians, Shadow, Theme, Vector};

// ============================================================================
// Color Palette
// ============================================================================

pub const PLUM_DEEP: Color = color!(0x2a0a2e);
pub const PLUM: Color = color!(0x4a1442);
pub const WINE: Color = color!(0x7a1f4b);

pub const ROSE: Color = color!(0xe91e63);
pub const ROSE_HOVER: Color = color!(0xf06292);
pub const ROSE_PRESSED: Color = color!(0xc2185b);
pub const BLUSH: Color = color!(0xffb6d9);
pub const HOT_PINK: Color = color!(0xff69b4);

pub const GOLD: Color = color!(0xffd700);
pub const GOLD_SOFT: Color = color!(0xffe082);
pub const GOLD_DEEP: Color = color!(0xc9a227);

pub const GIFT_RED: Color = color!(0xd32f2f);
pub const GIFT_RED_DARK: Color = color!(0xa31515);

pub const TEXT_PRIMARY: Color = color!(0xffffff);
pub const TEXT_SECONDARY: Color = color!(0xf8d7e6);
pub const TEXT_MUTED: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.6);

/// Same color with a different alpha
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Blend from `from` to `to` by `progress`
pub fn mix(from: Color, to: Color, progress: f32) -> Color {
    let t = progress.clamp(0.0, 1.0);
    Color::from_rgba(
        from.r + (to.r - from.r) * t,
        from.g + (to.g - from.g) * t,
        from.b + (to.b - from.b) * t,
        from.a + (to.a - from.a) * t,
    )
}

// ============================================================================
// Container Styles
// ============================================================================

/// Full window background gradient
pub fn page_background(_theme: &Theme) -> container::Style {
    let gradient = Linear::new(Radians(std::f32::consts::PI * 0.75))
        .add_stop(0.0, PLUM_DEEP)
        .add_stop(0.55, PLUM)
        .add_stop(1.0, WINE);

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(gradient))),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

/// Frosted card used for notes and the letter
pub fn glass_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.1))),
        text_color: Some(TEXT_PRIMARY),
        border: Border {
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.25),
            width: 1.0,
            radius: 24.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 32.0,
        },
        ..Default::default()
    }
}

/// Letter paper, warmer and more opaque than a glass card
pub fn letter_paper(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(color!(0xfff5f8))),
        text_color: Some(PLUM_DEEP),
        border: Border {
            color: with_alpha(GOLD, 0.6),
            width: 2.0,
            radius: 18.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
            offset: Vector::new(0.0, 10.0),
            blur_radius: 40.0,
        },
        ..Default::default()
    }
}

/// Thin gold rule between title and body
pub fn divider(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(GOLD, 0.7))),
        border: Border {
            radius: 1.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Progress bar track
pub fn progress_track(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.15))),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Progress bar fill
pub fn progress_fill(_theme: &Theme) -> container::Style {
    let gradient = Linear::new(Radians(std::f32::consts::FRAC_PI_2))
        .add_stop(0.0, ROSE)
        .add_stop(1.0, HOT_PINK);

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(gradient))),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Toast surface with the given opacity
pub fn toast(opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(PLUM_DEEP, 0.9 * opacity))),
        text_color: Some(with_alpha(TEXT_PRIMARY, opacity)),
        border: Border {
            color: with_alpha(BLUSH, 0.5 * opacity),
            width: 1.0,
            radius: 20.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3 * opacity),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Rose pill used for every primary action
pub fn romantic_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(ROSE)),
        text_color: TEXT_PRIMARY,
        border: Border {
            radius: 28.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: with_alpha(ROSE, 0.45),
            offset: Vector::new(0.0, 6.0),
            blur_radius: 20.0,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(ROSE_HOVER)),
            shadow: Shadow {
                blur_radius: 28.0,
                ..base.shadow
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(ROSE_PRESSED)),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(with_alpha(ROSE, 0.4))),
            text_color: TEXT_MUTED,
            shadow: Shadow::default(),
            ..base
        },
        _ => base,
    }
}

/// Gold variant for the gift button
pub fn gold_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = romantic_button(theme, status);
    let background = match status {
        button::Status::Hovered => GOLD_SOFT,
        button::Status::Pressed => GOLD_DEEP,
        _ => GOLD,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: PLUM_DEEP,
        shadow: Shadow {
            color: with_alpha(GOLD, 0.45),
            ..base.shadow
        },
        ..base
    }
}

/// Round glass music toggle
///
/// `attention` (0.0 to 1.0) warms the ring towards gold before the music has
/// been heard.
pub fn music_button(attention: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| music_button_style(attention, status)
}

fn music_button_style(attention: f32, status: button::Status) -> button::Style {
    let attention = attention.clamp(0.0, 1.0);
    let base = button::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.15))),
        text_color: TEXT_PRIMARY,
        border: Border {
            color: mix(Color::from_rgba(1.0, 1.0, 1.0, 0.3), GOLD, attention),
            width: 1.0 + 2.0 * attention,
            radius: 50.0.into(),
        },
        shadow: Shadow {
            color: with_alpha(GOLD, 0.5 * attention),
            offset: Vector::new(0.0, 0.0),
            blur_radius: 18.0 * attention,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.25))),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.35))),
            ..base
        },
        _ => base,
    }
}
