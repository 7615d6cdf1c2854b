//! Landing page - the first screen
//! Twinkling sparkles, a pulsing heart and the begin button

use std::time::Duration;

use iced::widget::{Space, column, container, stack, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::content::landing;
use crate::ui::animation::pulse;
use crate::ui::effects::particle_field;
use crate::ui::effects::particles::SparkleParticle;
use crate::ui::{ParticleLayer, theme, widgets};

const HEARTBEAT: Duration = Duration::from_millis(1400);

/// Build the landing page
///
/// `elapsed` drives the sparkles and heartbeat, `opacity` is the page
/// fade-in.
pub fn view<'a>(
    sparkles: &'a [SparkleParticle],
    elapsed: Duration,
    opacity: f32,
) -> Element<'a, Message> {
    let heart_size = 84.0 * (1.0 + 0.1 * pulse(elapsed, HEARTBEAT));

    let content = column![
        text(landing::HEART).size(heart_size),
        Space::new().height(16),
        text(landing::TITLE)
            .size(56)
            .color(theme::with_alpha(theme::TEXT_PRIMARY, opacity)),
        Space::new().height(12),
        text(landing::SUBTITLE)
            .size(20)
            .color(theme::with_alpha(theme::TEXT_SECONDARY, opacity)),
        Space::new().height(24),
        container(Space::new().width(120).height(2)).style(theme::divider),
        Space::new().height(36),
        widgets::romantic_button(landing::BEGIN, Some(Message::BeginPressed)),
        Space::new().height(Fill),
        text(landing::FOOTER)
            .size(14)
            .color(theme::with_alpha(theme::TEXT_MUTED, opacity * 0.6)),
    ]
    .align_x(Alignment::Center)
    .padding(Padding::new(40.0).top(120.0));

    stack![
        particle_field::view(ParticleLayer::Sparkles(sparkles), elapsed),
        container(content).center_x(Fill).height(Fill),
    ]
    .width(Fill)
    .height(Fill)
    .into()
}
