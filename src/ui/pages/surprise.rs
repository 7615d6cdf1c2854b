//! Surprise page - gift, letter and finale
//!
//! Everything here is derived from the reveal sequencer and how long the
//! current stage has been running. The page owns no timers.

use std::time::{Duration, Instant};

use iced::alignment::Horizontal;
use iced::widget::{Space, column, container, scrollable, stack, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::content::surprise;
use crate::features::{RevealSequencer, Stage};
use crate::ui::animation::pulse;
use crate::ui::effects::particles::{BurstParticle, ConfettiParticle};
use crate::ui::effects::{gift_box, particle_field};
use crate::ui::{ParticleLayer, theme, widgets};

/// Time for the letter to slide up into place
const LETTER_RISE: f32 = 0.8;
const LETTER_RISE_DISTANCE: f32 = 160.0;
const FINALE_HEARTBEAT: Duration = Duration::from_millis(1200);

/// Particle sets owned by the surprise phase
#[derive(Debug, Clone, Copy)]
pub struct RevealParticles<'a> {
    pub confetti: &'a [ConfettiParticle],
    pub burst: &'a [BurstParticle],
    /// Time since confetti started falling
    pub confetti_elapsed: Duration,
}

/// Build the surprise page
///
/// `elapsed` is the session clock, used while the teaser waits for a press.
pub fn view<'a>(
    sequencer: &'a RevealSequencer,
    particles: RevealParticles<'a>,
    now: Instant,
    elapsed: Duration,
) -> Element<'a, Message> {
    let stage_elapsed = sequencer.stage_elapsed(now);

    if sequencer.is_finale() {
        return finale(sequencer.music_faded(), stage_elapsed);
    }

    if sequencer.shows_letter() {
        let letter = letter(sequencer.stage(), stage_elapsed);
        return stack![
            letter,
            particle_field::view(
                ParticleLayer::Confetti(particles.confetti),
                particles.confetti_elapsed,
            ),
        ]
        .width(Fill)
        .height(Fill)
        .into();
    }

    let stage = sequencer.stage();
    gift_scene(stage, gift_clock(stage, stage_elapsed, elapsed), particles.burst)
}

/// Clock driving the gift box
///
/// The teaser has no stage timestamp, so its wobble runs on session time.
fn gift_clock(stage: Stage, stage_elapsed: Duration, session_elapsed: Duration) -> Duration {
    if stage == Stage::Teaser {
        session_elapsed
    } else {
        stage_elapsed
    }
}

fn gift_scene<'a>(
    stage: Stage,
    stage_elapsed: Duration,
    burst: &'a [BurstParticle],
) -> Element<'a, Message> {
    let mut visual = stack![gift_box::view(stage, stage_elapsed)];
    if stage == Stage::LidOff {
        visual = visual.push(
            container(particle_field::view(ParticleLayer::Burst(burst), stage_elapsed))
                .width(320)
                .height(300),
        );
    }

    let mut content = column![
        text(surprise::TEASER_TITLE)
            .size(34)
            .color(theme::TEXT_PRIMARY),
        text(surprise::TEASER_TEXT)
            .size(20)
            .color(theme::TEXT_SECONDARY),
        Space::new().height(12),
        visual,
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    if stage == Stage::Teaser {
        content = content.push(widgets::gold_button(
            surprise::OPEN,
            Message::OpenGiftPressed,
        ));
    }

    container(content).center_x(Fill).center_y(Fill).into()
}

/// Vertical offset and opacity of the letter
fn letter_rise(stage: Stage, stage_elapsed: Duration) -> (f32, f32) {
    if stage != Stage::LetterRising {
        return (0.0, 1.0);
    }
    let progress = (stage_elapsed.as_secs_f32() / LETTER_RISE).min(1.0);
    let eased = 1.0 - (1.0 - progress).powi(3);
    (LETTER_RISE_DISTANCE * (1.0 - eased), eased)
}

fn letter<'a>(stage: Stage, stage_elapsed: Duration) -> Element<'a, Message> {
    let (offset, opacity) = letter_rise(stage, stage_elapsed);
    let ink = theme::with_alpha(theme::PLUM_DEEP, opacity);

    let mut body = column![
        text(surprise::LETTER_ICON).size(48),
        text(surprise::LETTER_TITLE).size(30).color(ink),
        container(Space::new().width(80).height(2)).style(theme::divider),
        text(surprise::LETTER_GREETING)
            .size(20)
            .color(theme::with_alpha(theme::ROSE_PRESSED, opacity)),
    ]
    .spacing(14)
    .align_x(Alignment::Center);

    for paragraph in surprise::LETTER_BODY {
        body = body.push(text(*paragraph).size(17).color(ink));
    }

    body = body
        .push(text(surprise::LETTER_CLOSING).size(20).color(ink))
        .push(
            text(surprise::LETTER_SIGNATURE)
                .size(18)
                .color(theme::with_alpha(theme::ROSE_PRESSED, opacity)),
        )
        .push(text(surprise::LETTER_HEARTS).size(20));

    // The button only appears once the letter has settled
    if stage == Stage::LetterShown {
        body = body.push(widgets::romantic_button(
            surprise::FINISHED,
            Some(Message::FinishedReadingPressed),
        ));
    }

    let paper = container(body)
        .width(640)
        .padding(40)
        .style(theme::letter_paper);

    container(scrollable(
        container(paper)
            .center_x(Fill)
            .padding(Padding::new(40.0).top(40.0 + offset)),
    ))
    .width(Fill)
    .height(Fill)
    .into()
}

fn finale<'a>(music_faded: bool, stage_elapsed: Duration) -> Element<'a, Message> {
    let heart_size = 96.0 * (1.0 + 0.12 * pulse(stage_elapsed, FINALE_HEARTBEAT));

    let mut content = column![
        text(surprise::FINALE_HEART).size(heart_size),
        text(surprise::FINALE_TITLE)
            .size(48)
            .color(theme::TEXT_PRIMARY),
        text(surprise::FINALE_MESSAGE)
            .size(20)
            .color(theme::TEXT_SECONDARY)
            .align_x(Horizontal::Center),
    ]
    .spacing(18)
    .align_x(Alignment::Center)
    .max_width(720);

    if music_faded {
        content = content
            .push(Space::new().height(12))
            .push(
                text(surprise::FINALE_SUBMESSAGE)
                    .size(22)
                    .color(theme::GOLD_SOFT),
            )
            .push(
                text(surprise::FINALE_CREDIT)
                    .size(14)
                    .color(theme::TEXT_MUTED),
            );
    }

    container(content).center_x(Fill).center_y(Fill).into()
}
