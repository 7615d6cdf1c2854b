// src/app/view.rs
//! Application view rendering

use iced::widget::{Space, container, stack};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::content::music;
use crate::features::Phase;
use crate::ui::effects::particle_field;
use crate::ui::pages::surprise::RevealParticles;
use crate::ui::{ParticleLayer, pages, theme, widgets};

/// Empty element used where an overlay is absent
fn nothing<'a>() -> Element<'a, Message> {
    Space::new().width(0).height(0).into()
}

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let now = self.ui.now;
        let elapsed = now.saturating_duration_since(self.core.started_at);
        let reduced_motion = self.core.reduced_motion();

        // Floating hearts behind every phase
        let hearts: Element<'_, Message> = if reduced_motion {
            nothing()
        } else {
            particle_field::view(ParticleLayer::Hearts(&self.ui.hearts), elapsed)
        };

        let page = self.phase_page(now, elapsed, reduced_motion);

        let music_button = container(widgets::music_button(
            self.ui.music_playing,
            music::PLAYING_ICON,
            music::PAUSED_ICON,
            elapsed,
            !self.ui.music_announced && !reduced_motion,
            Message::ToggleMusic,
        ))
        .width(Fill)
        .height(Fill)
        .padding(24)
        .align_x(Alignment::End)
        .align_y(Alignment::End);

        // Toast overlay, kept while it fades out
        let toast_overlay: Element<'_, Message> = match self.ui.toast_overlay() {
            Some((toast, opacity)) => container(widgets::view_toast(toast, opacity))
                .width(Fill)
                .padding(20)
                .align_x(Alignment::Center)
                .into(),
            None => nothing(),
        };

        container(
            stack![hearts, page, music_button, toast_overlay]
                .width(Fill)
                .height(Fill),
        )
        .width(Fill)
        .height(Fill)
        .style(theme::page_background)
        .into()
    }

    fn phase_page(
        &self,
        now: std::time::Instant,
        elapsed: std::time::Duration,
        reduced_motion: bool,
    ) -> Element<'_, Message> {
        let opacity = self.ui.page_fade.progress();

        match self.phase.phase() {
            Phase::Landing => {
                let sparkles = if reduced_motion {
                    &[][..]
                } else {
                    &self.ui.sparkles[..]
                };
                pages::landing::view(sparkles, elapsed, opacity)
            }
            Phase::Flow => match &self.flow {
                Some(flow) => pages::flow::view(flow, opacity),
                None => nothing(),
            },
            Phase::Surprise => match &self.surprise {
                Some(surprise) => {
                    let particles = if reduced_motion {
                        RevealParticles {
                            confetti: &[],
                            burst: &[],
                            confetti_elapsed: Default::default(),
                        }
                    } else {
                        RevealParticles {
                            confetti: &surprise.confetti,
                            burst: &surprise.burst,
                            confetti_elapsed: surprise.confetti_elapsed(now),
                        }
                    };
                    pages::surprise::view(&surprise.sequencer, particles, now, elapsed)
                }
                None => nothing(),
            },
        }
    }
}
