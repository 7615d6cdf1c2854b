//! Randomized particle layouts
//!
//! Each generator produces a fixed set of descriptors once; nothing about a
//! particle changes afterwards. Animation is a pure function of elapsed
//! time: `sample(elapsed, bounds)` says where a particle is drawn and how
//! opaque it is, or `None` when it is not visible.

use std::f32::consts::{PI, TAU};
use std::time::Duration;

use iced::{Color, Point, Size, color};
use rand::Rng;

pub const HEART_GLYPHS: &[&str] = &["❤️", "💕", "💗", "💖", "🩷", "♥️"];
pub const CONFETTI_GLYPHS: &[&str] = &["❤️", "💖", "💕", "✨", "🩷", "⭐", "💗"];
pub const CONFETTI_COLORS: &[Color] = &[
    color!(0xff69b4),
    color!(0xe91e63),
    color!(0xd32f2f),
    color!(0xffd700),
    color!(0xff8a80),
    color!(0xffb6d9),
    color!(0xf48fb1),
];
pub const BURST_COLORS: &[Color] = &[
    color!(0xffd700),
    color!(0xff69b4),
    color!(0xffffff),
    color!(0xffe082),
];
pub const BURST_GLYPH: &str = "✦";

/// Where and how to draw a particle at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSample {
    pub position: Point,
    /// Rotation in radians
    pub rotation: f32,
    pub opacity: f32,
    pub scale: f32,
}

/// A heart drifting up the whole window
#[derive(Debug, Clone, PartialEq)]
pub struct HeartParticle {
    pub glyph: &'static str,
    /// Font size in px, 14..40
    pub size: f32,
    /// Horizontal start in percent of the width, 0..100
    pub left: f32,
    /// Seconds per rise, 6..16
    pub duration: f32,
    /// Seconds before the first rise, 0..duration
    pub delay: f32,
    /// Horizontal sway over one rise in px, -30..30
    pub drift: f32,
    /// Rotation over one rise in degrees, 0..360
    pub spin: f32,
    /// Peak opacity, 0.2..0.7
    pub opacity: f32,
}

/// Confetti look
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfettiKind {
    Glyph(&'static str),
    Shape { color: Color, round: bool },
}

/// A confetti piece falling over the reveal
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiParticle {
    pub kind: ConfettiKind,
    /// Glyph: font size 16..30; shape: edge length 8..18
    pub size: f32,
    /// Percent of the width, 0..100
    pub left: f32,
    /// Seconds, 0..2
    pub delay: f32,
    /// Seconds per fall, 2..5
    pub duration: f32,
    /// Degrees per fall, 360..1080
    pub spin: f32,
}

/// A twinkle on the landing screen
#[derive(Debug, Clone, PartialEq)]
pub struct SparkleParticle {
    /// Percent of the width, 0..100
    pub left: f32,
    /// Percent of the height, 0..100
    pub top: f32,
    /// Seconds, 0..4
    pub delay: f32,
    /// Seconds per twinkle, 2..5
    pub duration: f32,
}

/// One spark thrown out of the gift when the lid comes off
#[derive(Debug, Clone, PartialEq)]
pub struct BurstParticle {
    pub color: Color,
    /// Upward travel in px, 60..180
    pub rise: f32,
    /// Sideways travel in px, -80..80
    pub sway: f32,
    /// Seconds, 0.8..1.4
    pub duration: f32,
    /// Seconds, 0..0.3
    pub delay: f32,
}

fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

pub fn generate_hearts<R: Rng>(count: usize, rng: &mut R) -> Vec<HeartParticle> {
    (0..count)
        .map(|_| {
            let duration = rng.random_range(6.0..16.0);
            HeartParticle {
                glyph: *pick(rng, HEART_GLYPHS),
                size: rng.random_range(14.0..40.0),
                left: rng.random_range(0.0..100.0),
                duration,
                delay: rng.random_range(0.0..duration),
                drift: rng.random_range(-30.0..30.0),
                spin: rng.random_range(0.0..360.0),
                opacity: rng.random_range(0.2..0.7),
            }
        })
        .collect()
}

pub fn generate_confetti<R: Rng>(count: usize, rng: &mut R) -> Vec<ConfettiParticle> {
    (0..count)
        .map(|_| {
            let use_glyph = rng.random_bool(0.5);
            let left = rng.random_range(0.0..100.0);
            let delay = rng.random_range(0.0..2.0);
            let duration = rng.random_range(2.0..5.0);
            let spin = rng.random_range(360.0..1080.0);

            let (kind, size) = if use_glyph {
                (
                    ConfettiKind::Glyph(*pick(rng, CONFETTI_GLYPHS)),
                    rng.random_range(16.0..30.0),
                )
            } else {
                (
                    ConfettiKind::Shape {
                        color: *pick(rng, CONFETTI_COLORS),
                        round: rng.random_bool(0.5),
                    },
                    rng.random_range(8.0..18.0),
                )
            };

            ConfettiParticle {
                kind,
                size,
                left,
                delay,
                duration,
                spin,
            }
        })
        .collect()
}

pub fn generate_sparkles<R: Rng>(count: usize, rng: &mut R) -> Vec<SparkleParticle> {
    (0..count)
        .map(|_| SparkleParticle {
            left: rng.random_range(0.0..100.0),
            top: rng.random_range(0.0..100.0),
            delay: rng.random_range(0.0..4.0),
            duration: rng.random_range(2.0..5.0),
        })
        .collect()
}

pub fn generate_burst<R: Rng>(count: usize, rng: &mut R) -> Vec<BurstParticle> {
    (0..count)
        .map(|i| BurstParticle {
            color: BURST_COLORS[i % BURST_COLORS.len()],
            rise: rng.random_range(60.0..180.0),
            sway: rng.random_range(-80.0..80.0),
            duration: rng.random_range(0.8..1.4),
            delay: rng.random_range(0.0..0.3),
        })
        .collect()
}

/// Position within a looping cycle in `0.0..1.0`, or `None` before the first start
fn loop_phase(elapsed: Duration, delay: f32, duration: f32) -> Option<f32> {
    let t = elapsed.as_secs_f32() - delay;
    if t < 0.0 || duration <= 0.0 {
        return None;
    }
    Some((t % duration) / duration)
}

/// Fade in over the first `edge` and out over the last `edge` of a cycle
fn edge_fade(phase: f32, edge: f32) -> f32 {
    let fade = if phase < edge {
        phase / edge
    } else if phase > 1.0 - edge {
        (1.0 - phase) / edge
    } else {
        1.0
    };
    fade.clamp(0.0, 1.0)
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

impl HeartParticle {
    pub fn sample(&self, elapsed: Duration, bounds: Size) -> Option<ParticleSample> {
        let phase = loop_phase(elapsed, self.delay, self.duration)?;
        // Rise from just below the bottom edge to just above the top one
        let y = bounds.height + self.size - phase * (bounds.height + self.size * 2.0);
        let x = self.left / 100.0 * bounds.width + self.drift * phase;

        Some(ParticleSample {
            position: Point::new(x, y),
            rotation: (self.spin * phase).to_radians(),
            opacity: self.opacity * edge_fade(phase, 0.1),
            scale: 1.0,
        })
    }
}

impl ConfettiParticle {
    pub fn sample(&self, elapsed: Duration, bounds: Size) -> Option<ParticleSample> {
        let phase = loop_phase(elapsed, self.delay, self.duration)?;
        let y = -self.size + phase * (bounds.height + self.size * 2.0);
        // Slight flutter while falling
        let x = self.left / 100.0 * bounds.width + (phase * TAU * 2.0).sin() * self.size * 0.5;
        let opacity = if phase > 0.8 { (1.0 - phase) / 0.2 } else { 1.0 };

        Some(ParticleSample {
            position: Point::new(x, y),
            rotation: (self.spin * phase).to_radians(),
            opacity: opacity.clamp(0.0, 1.0),
            scale: 1.0,
        })
    }
}

impl SparkleParticle {
    pub fn sample(&self, elapsed: Duration, bounds: Size) -> Option<ParticleSample> {
        let phase = loop_phase(elapsed, self.delay, self.duration)?;
        let glow = (phase * PI).sin().max(0.0);

        Some(ParticleSample {
            position: Point::new(
                self.left / 100.0 * bounds.width,
                self.top / 100.0 * bounds.height,
            ),
            rotation: 0.0,
            opacity: glow,
            scale: 0.5 + glow * 0.7,
        })
    }
}

impl BurstParticle {
    /// Offset from the burst origin. One-shot: `None` once finished.
    pub fn sample(&self, elapsed: Duration, origin: Point) -> Option<ParticleSample> {
        let t = elapsed.as_secs_f32() - self.delay;
        if t < 0.0 || t > self.duration {
            return None;
        }
        let progress = ease_out_cubic(t / self.duration);

        Some(ParticleSample {
            position: Point::new(
                origin.x + self.sway * progress,
                origin.y - self.rise * progress,
            ),
            rotation: 0.0,
            opacity: (1.0 - progress).clamp(0.0, 1.0),
            scale: 1.0 - 0.7 * progress,
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(14)
    }

    const BOUNDS: Size = Size::new(1000.0, 800.0);

    #[test]
    fn test_zero_count_is_empty() {
        let mut rng = rng();
        assert!(generate_hearts(0, &mut rng).is_empty());
        assert!(generate_confetti(0, &mut rng).is_empty());
        assert!(generate_sparkles(0, &mut rng).is_empty());
        assert!(generate_burst(0, &mut rng).is_empty());
    }

    #[test]
    fn test_hearts_within_bounds() {
        let hearts = generate_hearts(200, &mut rng());
        assert_eq!(hearts.len(), 200);

        for h in &hearts {
            assert!(HEART_GLYPHS.contains(&h.glyph));
            assert!((14.0..40.0).contains(&h.size));
            assert!((0.0..=100.0).contains(&h.left));
            assert!((6.0..16.0).contains(&h.duration));
            assert!(h.delay >= 0.0 && h.delay < h.duration);
            assert!((-30.0..30.0).contains(&h.drift));
            assert!((0.0..360.0).contains(&h.spin));
            assert!((0.2..0.7).contains(&h.opacity));
        }
    }

    #[test]
    fn test_confetti_within_bounds() {
        let confetti = generate_confetti(300, &mut rng());
        assert_eq!(confetti.len(), 300);

        let mut glyphs = 0;
        let mut shapes = 0;
        for c in &confetti {
            assert!((0.0..=100.0).contains(&c.left));
            assert!((0.0..2.0).contains(&c.delay));
            assert!((2.0..5.0).contains(&c.duration));
            assert!((360.0..1080.0).contains(&c.spin));
            match c.kind {
                ConfettiKind::Glyph(g) => {
                    glyphs += 1;
                    assert!(CONFETTI_GLYPHS.contains(&g));
                    assert!((16.0..30.0).contains(&c.size));
                }
                ConfettiKind::Shape { color, .. } => {
                    shapes += 1;
                    assert!(CONFETTI_COLORS.contains(&color));
                    assert!((8.0..18.0).contains(&c.size));
                }
            }
        }
        // A fair coin over 300 throws lands on both sides
        assert!(glyphs > 0 && shapes > 0);
    }

    #[test]
    fn test_burst_colors_cycle() {
        let burst = generate_burst(12, &mut rng());
        assert_eq!(burst.len(), 12);
        for (i, spark) in burst.iter().enumerate() {
            assert_eq!(spark.color, BURST_COLORS[i % 4]);
            assert!((60.0..180.0).contains(&spark.rise));
            assert!((-80.0..80.0).contains(&spark.sway));
        }
    }

    #[test]
    fn test_heart_hidden_before_delay() {
        let heart = HeartParticle {
            glyph: "❤️",
            size: 20.0,
            left: 50.0,
            duration: 10.0,
            delay: 3.0,
            drift: 0.0,
            spin: 0.0,
            opacity: 0.5,
        };
        assert!(heart.sample(Duration::from_secs(2), BOUNDS).is_none());

        let start = heart.sample(Duration::from_secs(3), BOUNDS).unwrap();
        let middle = heart.sample(Duration::from_secs(8), BOUNDS).unwrap();
        assert!(middle.position.y < start.position.y);
        assert!((middle.position.x - 500.0).abs() < f32::EPSILON);
        assert!((middle.opacity - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_samples_keep_opacity_in_range() {
        let mut rng = rng();
        let hearts = generate_hearts(50, &mut rng);
        let confetti = generate_confetti(50, &mut rng);
        let sparkles = generate_sparkles(50, &mut rng);
        let burst = generate_burst(12, &mut rng);

        for step in 0..200 {
            let elapsed = Duration::from_millis(step * 97);
            let samples = hearts
                .iter()
                .filter_map(|p| p.sample(elapsed, BOUNDS))
                .chain(confetti.iter().filter_map(|p| p.sample(elapsed, BOUNDS)))
                .chain(sparkles.iter().filter_map(|p| p.sample(elapsed, BOUNDS)))
                .chain(
                    burst
                        .iter()
                        .filter_map(|p| p.sample(elapsed, Point::new(500.0, 400.0))),
                );
            for s in samples {
                assert!((0.0..=1.0).contains(&s.opacity), "opacity {}", s.opacity);
            }
        }
    }

    #[test]
    fn test_burst_is_one_shot() {
        let spark = BurstParticle {
            color: BURST_COLORS[0],
            rise: 100.0,
            sway: 40.0,
            duration: 1.0,
            delay: 0.0,
        };
        let origin = Point::new(0.0, 0.0);

        let end = spark.sample(Duration::from_millis(1000), origin).unwrap();
        assert!((end.position.y + 100.0).abs() < 1e-3);
        assert!((end.position.x - 40.0).abs() < 1e-3);
        assert!(spark.sample(Duration::from_millis(1001), origin).is_none());
    }
}
