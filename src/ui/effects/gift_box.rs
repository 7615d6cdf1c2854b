//! Gift box drawn on a canvas
//!
//! The box pose depends only on the reveal stage and the clock passed in,
//! so the same stage always animates the same way.

use std::f32::consts::PI;
use std::time::Duration;

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program};
use iced::{Color, Element, Point, Rectangle, Renderer, Size, Theme, Vector, mouse};

use crate::features::Stage;
use crate::ui::theme;

/// Time for the lid to fly off
const LID_FLIGHT: f32 = 0.7;
/// Time for the golden glow to bloom
const GLOW_BLOOM: f32 = 0.8;

/// Lid transform relative to its resting place
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LidPose {
    pub offset_y: f32,
    /// Radians
    pub rotation: f32,
    pub opacity: f32,
    pub scale: f32,
}

impl LidPose {
    const REST: LidPose = LidPose {
        offset_y: 0.0,
        rotation: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };
}

fn ease_out_back(t: f32) -> f32 {
    let c1 = 1.70158;
    let c3 = c1 + 1.0;
    1.0 + c3 * (t - 1.0).powi(3) + c1 * (t - 1.0).powi(2)
}

/// Where the lid is at `stage_elapsed` into `stage`
pub fn lid_pose(stage: Stage, stage_elapsed: Duration) -> LidPose {
    let t = stage_elapsed.as_secs_f32();
    match stage {
        Stage::Teaser => LidPose {
            // Gentle wobble while waiting
            rotation: (t * 2.5).sin() * 2f32.to_radians(),
            ..LidPose::REST
        },
        Stage::Shaking => LidPose {
            rotation: (t * 2.0 * PI / 0.12).sin() * 3f32.to_radians(),
            ..LidPose::REST
        },
        _ => {
            let progress = (t / LID_FLIGHT).min(1.0);
            let eased = ease_out_back(progress);
            LidPose {
                offset_y: -200.0 * eased,
                rotation: 25f32.to_radians() * eased,
                opacity: (1.0 - progress).clamp(0.0, 1.0),
                scale: 1.0 - 0.4 * progress,
            }
        }
    }
}

/// Golden glow behind the box: (opacity, scale)
pub fn glow(stage: Stage, stage_elapsed: Duration) -> (f32, f32) {
    if stage < Stage::LidOff {
        return (0.0, 0.3);
    }
    let progress = (stage_elapsed.as_secs_f32() / GLOW_BLOOM).min(1.0);
    let eased = 1.0 - (1.0 - progress).powi(3);
    (eased, 0.3 + 2.2 * eased)
}

/// Box shake offset while in the shaking stage
fn box_shake(stage: Stage, stage_elapsed: Duration) -> f32 {
    if stage == Stage::Shaking {
        (stage_elapsed.as_secs_f32() * 2.0 * PI / 0.1).sin() * 4.0
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GiftBox {
    pub stage: Stage,
    pub stage_elapsed: Duration,
}

impl<Message> Program<Message> for GiftBox {
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
        let center_x = bounds.width / 2.0 + box_shake(self.stage, self.stage_elapsed);
        let box_size = Size::new(140.0, 110.0);
        let box_top = bounds.height - box_size.height - 20.0;

        // Golden light burst
        let (glow_opacity, glow_scale) = glow(self.stage, self.stage_elapsed);
        if glow_opacity > 0.0 {
            let glow = Path::circle(Point::new(center_x, box_top), 60.0 * glow_scale);
            frame.fill(
                &glow,
                Color {
                    a: 0.35 * glow_opacity,
                    ..theme::GOLD
                },
            );
        }

        // Box base with ribbons
        let base = Path::rectangle(
            Point::new(center_x - box_size.width / 2.0, box_top),
            box_size,
        );
        frame.fill(&base, theme::GIFT_RED);
        let ribbon_v = Path::rectangle(
            Point::new(center_x - 10.0, box_top),
            Size::new(20.0, box_size.height),
        );
        frame.fill(&ribbon_v, theme::GOLD);
        let ribbon_h = Path::rectangle(
            Point::new(center_x - box_size.width / 2.0, box_top + box_size.height / 2.0 - 8.0),
            Size::new(box_size.width, 16.0),
        );
        frame.fill(&ribbon_h, theme::GOLD);

        // Lid with bow
        let pose = lid_pose(self.stage, self.stage_elapsed);
        if pose.opacity > 0.0 {
            frame.with_save(|frame| {
                frame.translate(Vector::new(center_x, box_top + pose.offset_y));
                frame.rotate(pose.rotation);
                frame.scale(pose.scale);

                let lid_size = Size::new(box_size.width + 16.0, 28.0);
                let lid = Path::rectangle(
                    Point::new(-lid_size.width / 2.0, -lid_size.height),
                    lid_size,
                );
                frame.fill(
                    &lid,
                    Color {
                        a: pose.opacity,
                        ..theme::GIFT_RED_DARK
                    },
                );

                let gold = Color {
                    a: pose.opacity,
                    ..theme::GOLD
                };
                let lid_ribbon =
                    Path::rectangle(Point::new(-10.0, -lid_size.height), Size::new(20.0, 28.0));
                frame.fill(&lid_ribbon, gold);
                for dx in [-18.0, 18.0] {
                    let loop_path = Path::circle(Point::new(dx, -lid_size.height - 12.0), 14.0);
                    frame.fill(&loop_path, gold);
                }
                let knot = Path::circle(Point::new(0.0, -lid_size.height - 8.0), 8.0);
                frame.fill(&knot, Color { a: pose.opacity, ..theme::GOLD_DEEP });
            });
        }

        vec![frame.into_geometry()]
    }
}

pub fn view<'a, Message: 'a>(stage: Stage, stage_elapsed: Duration) -> Element<'a, Message> {
    Canvas::new(GiftBox {
        stage,
        stage_elapsed,
    })
    .width(320)
    .height(300)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lid_rests_before_opening() {
        let pose = lid_pose(Stage::Teaser, Duration::ZERO);
        assert_eq!(pose.offset_y, 0.0);
        assert_eq!(pose.opacity, 1.0);

        let later = lid_pose(Stage::Teaser, Duration::from_millis(600));
        assert_ne!(later.rotation, pose.rotation);
        assert_eq!(later.offset_y, 0.0);
    }

    #[test]
    fn test_lid_flies_off() {
        let start = lid_pose(Stage::LidOff, Duration::ZERO);
        let end = lid_pose(Stage::LidOff, Duration::from_millis(900));
        assert!(start.offset_y.abs() < 1e-3);
        assert!((end.offset_y + 200.0).abs() < 1e-3);
        assert_eq!(end.opacity, 0.0);
        assert!((end.scale - 0.6).abs() < 1e-4);
    }

    #[test]
    fn test_glow_only_after_lid_off() {
        assert_eq!(glow(Stage::Shaking, Duration::from_secs(5)).0, 0.0);
        let (opacity, scale) = glow(Stage::LidOff, Duration::from_millis(800));
        assert!((opacity - 1.0).abs() < 1e-4);
        assert!((scale - 2.5).abs() < 1e-4);
    }
}
