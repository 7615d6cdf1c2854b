//! Canvas program drawing one particle layer
//!
//! Generic over Message; the layer only borrows descriptors owned by app
//! state and the elapsed time to sample them at.

use std::time::Duration;

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program, Text};
use iced::{Color, Element, Fill, Point, Rectangle, Renderer, Size, Theme, Vector, mouse};

use super::particles::{
    BURST_GLYPH, BurstParticle, ConfettiKind, ConfettiParticle, HeartParticle, ParticleSample,
    SparkleParticle,
};

/// Which particles to draw
#[derive(Debug, Clone, Copy)]
pub enum ParticleLayer<'a> {
    Hearts(&'a [HeartParticle]),
    Confetti(&'a [ConfettiParticle]),
    Sparkles(&'a [SparkleParticle]),
    /// Sparks thrown from the center of the canvas
    Burst(&'a [BurstParticle]),
}

#[derive(Debug, Clone, Copy)]
pub struct ParticleField<'a> {
    pub layer: ParticleLayer<'a>,
    pub elapsed: Duration,
}

fn draw_glyph(frame: &mut Frame, glyph: &str, size: f32, color: Color, sample: ParticleSample) {
    frame.with_save(|frame| {
        frame.translate(Vector::new(sample.position.x, sample.position.y));
        frame.rotate(sample.rotation);
        frame.scale(sample.scale);
        frame.fill_text(Text {
            content: glyph.to_string(),
            position: Point::ORIGIN,
            color: Color {
                a: color.a * sample.opacity,
                ..color
            },
            size: iced::Pixels(size),
            align_x: iced::alignment::Horizontal::Center.into(),
            align_y: iced::alignment::Vertical::Center,
            ..Text::default()
        });
    });
}

impl ParticleField<'_> {
    fn draw_into(&self, frame: &mut Frame, size: Size) {
        match self.layer {
            ParticleLayer::Hearts(hearts) => {
                for heart in hearts {
                    if let Some(sample) = heart.sample(self.elapsed, size) {
                        draw_glyph(frame, heart.glyph, heart.size, Color::WHITE, sample);
                    }
                }
            }
            ParticleLayer::Confetti(confetti) => {
                for piece in confetti {
                    let Some(sample) = piece.sample(self.elapsed, size) else {
                        continue;
                    };
                    match piece.kind {
                        ConfettiKind::Glyph(glyph) => {
                            draw_glyph(frame, glyph, piece.size, Color::WHITE, sample);
                        }
                        ConfettiKind::Shape { color, round } => {
                            let fill = Color {
                                a: sample.opacity,
                                ..color
                            };
                            frame.with_save(|frame| {
                                frame.translate(Vector::new(sample.position.x, sample.position.y));
                                frame.rotate(sample.rotation);
                                let half = piece.size / 2.0;
                                let path = if round {
                                    Path::circle(Point::ORIGIN, half)
                                } else {
                                    Path::rectangle(
                                        Point::new(-half, -half),
                                        Size::new(piece.size, piece.size),
                                    )
                                };
                                frame.fill(&path, fill);
                            });
                        }
                    }
                }
            }
            ParticleLayer::Sparkles(sparkles) => {
                for sparkle in sparkles {
                    if let Some(sample) = sparkle.sample(self.elapsed, size) {
                        let glow = Path::circle(sample.position, 3.0 * sample.scale);
                        frame.fill(&glow, Color::from_rgba(1.0, 0.94, 0.75, sample.opacity));
                    }
                }
            }
            ParticleLayer::Burst(sparks) => {
                let origin = Point::new(size.width / 2.0, size.height / 2.0);
                for spark in sparks {
                    if let Some(sample) = spark.sample(self.elapsed, origin) {
                        draw_glyph(frame, BURST_GLYPH, 18.0, spark.color, sample);
                    }
                }
            }
        }
    }
}

impl<Message> Program<Message> for ParticleField<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        self.draw_into(&mut frame, bounds.size());
        vec![frame.into_geometry()]
    }
}

/// Full-size canvas for a particle layer
pub fn view<'a, Message: 'a>(layer: ParticleLayer<'a>, elapsed: Duration) -> Element<'a, Message> {
    Canvas::new(ParticleField { layer, elapsed })
        .width(Fill)
        .height(Fill)
        .into()
}
