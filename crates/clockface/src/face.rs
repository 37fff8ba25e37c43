//! Records the clock into a [`DrawList`].
//!
//! Everything is drawn in dial space: origin at the dial centre, +Y down,
//! rotations clockwise. The caller's transform is left as it was found.

use clockface_engine::coords::{Transform, Vec2, Viewport};
use clockface_engine::scene::{Border, DrawList, LineCap, TextAlign, ZIndex};
use clockface_engine::text::FontId;

use crate::angles::{numeral_angle, HandAngles};
use crate::style::{ClockStyle, HandStyle};
use crate::time_source::ClockTime;

const Z_FACE: ZIndex = ZIndex::new(0);
const Z_NUMERALS: ZIndex = ZIndex::new(1);
const Z_HANDS: ZIndex = ZIndex::new(2);

/// Placement of the dial on the surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DialGeometry {
    pub center: Vec2,
    pub radius: f32,
}

impl DialGeometry {
    /// Dial of radius `height / 2` centred on the surface, or `None` for an
    /// empty surface.
    pub fn from_viewport(viewport: Viewport) -> Option<Self> {
        if !viewport.is_valid() {
            return None;
        }
        let radius = viewport.height * 0.5;
        (radius > 0.0).then(|| Self { center: viewport.center(), radius })
    }
}

/// Records one complete frame: face, numerals, then hands.
///
/// Numerals are skipped when `font` is `None`.
pub fn draw_scene(
    dl: &mut DrawList,
    viewport: Viewport,
    time: ClockTime,
    font: Option<FontId>,
    style: &ClockStyle,
) {
    let Some(dial) = DialGeometry::from_viewport(viewport) else {
        return;
    };

    dl.with_transform(Transform::translation(dial.center), |dl| {
        draw_face(dl, dial.radius, style);
        if let Some(font) = font {
            draw_numerals(dl, dial.radius, font, style);
        }
        draw_hands(dl, dial.radius, HandAngles::from_time(time), style);
    });
}

/// Filled dial with its rim on the inside edge, and the centre hub.
pub fn draw_face(dl: &mut DrawList, radius: f32, style: &ClockStyle) {
    let rim = Border::new(style.stroke_width.min(radius), style.ink);
    dl.push_circle(Z_FACE, Vec2::zero(), radius, style.face_fill, Some(rim));
    dl.push_solid_circle(Z_FACE, Vec2::zero(), radius * style.hub_radius, style.ink);
}

/// Numerals 1 to 12, upright, centred on the numeral ring.
pub fn draw_numerals(dl: &mut DrawList, radius: f32, font: FontId, style: &ClockStyle) {
    let size = radius * style.numeral_size;
    let outward = Transform::translation(Vec2::new(0.0, -radius * style.numeral_radius));

    for n in 1..=12u32 {
        let angle = numeral_angle(n);
        dl.with_transform(Transform::rotation(angle), |dl| {
            dl.with_transform(outward, |dl| {
                dl.with_transform(Transform::rotation(-angle), |dl| {
                    dl.push_text(
                        Z_NUMERALS,
                        n.to_string(),
                        font,
                        size,
                        style.ink,
                        Vec2::zero(),
                        TextAlign::Center,
                    );
                });
            });
        });
    }
}

pub fn draw_hands(dl: &mut DrawList, radius: f32, angles: HandAngles, style: &ClockStyle) {
    draw_hand(dl, angles.hour, radius, style.hour_hand, style);
    draw_hand(dl, angles.minute, radius, style.minute_hand, style);
    draw_hand(dl, angles.second, radius, style.second_hand, style);
}

// A vertical stroke up from the centre, in a frame rotated by `angle`.
fn draw_hand(dl: &mut DrawList, angle: f32, radius: f32, hand: HandStyle, style: &ClockStyle) {
    dl.with_transform(Transform::rotation(angle), |dl| {
        dl.push_line(
            Z_HANDS,
            Vec2::zero(),
            Vec2::new(0.0, -radius * hand.length),
            radius * hand.width,
            style.ink,
            LineCap::Round,
        );
    });
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use clockface_engine::scene::shapes::circle::CircleCmd;
    use clockface_engine::scene::shapes::line::LineCmd;
    use clockface_engine::scene::shapes::text::TextCmd;
    use clockface_engine::scene::DrawCmd;

    use super::*;

    const EPS: f32 = 1e-3;

    fn record(viewport: Viewport, time: ClockTime) -> DrawList {
        let mut dl = DrawList::new();
        draw_scene(&mut dl, viewport, time, Some(FontId::from_raw(0)), &ClockStyle::default());
        dl
    }

    fn circles(dl: &DrawList) -> Vec<&CircleCmd> {
        dl.items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Circle(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    fn lines(dl: &DrawList) -> Vec<&LineCmd> {
        dl.items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Line(l) => Some(l),
                _ => None,
            })
            .collect()
    }

    fn texts(dl: &DrawList) -> Vec<&TextCmd> {
        dl.items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Text(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    // Clockwise angle from 12 o'clock of `v` on a +Y-down surface.
    fn dial_angle(v: Vec2) -> f32 {
        let a = v.x.atan2(-v.y);
        if a < 0.0 { a + 2.0 * PI } else { a }
    }

    #[test]
    fn dial_fills_surface_height() {
        let dial = DialGeometry::from_viewport(Viewport::new(300.0, 200.0)).unwrap();
        assert_eq!(dial.center, Vec2::new(150.0, 100.0));
        assert_eq!(dial.radius, 100.0);
        assert!(DialGeometry::from_viewport(Viewport::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn empty_surface_records_nothing() {
        let dl = record(Viewport::new(0.0, 0.0), ClockTime::new(1, 2, 3));
        assert!(dl.is_empty());
    }

    #[test]
    fn face_stays_within_radius() {
        for size in [20.0, 200.0, 1000.0] {
            let vp = Viewport::new(size, size);
            let dl = record(vp, ClockTime::new(10, 10, 30));
            let r = size * 0.5;

            let cs = circles(&dl);
            assert_eq!(cs.len(), 2);
            let face = cs[0];
            assert_eq!(face.center, vp.center());
            assert_eq!(face.radius, r);
            let rim = face.border.unwrap();
            assert_eq!(rim.width, 4.0);

            let hub = cs[1];
            assert!((hub.radius - 0.1 * r).abs() < EPS);
            assert!(hub.border.is_none());
        }
    }

    #[test]
    fn rim_never_wider_than_dial() {
        let dl = record(Viewport::new(4.0, 4.0), ClockTime::new(0, 0, 0));
        let face = circles(&dl)[0];
        assert!(face.border.unwrap().width <= face.radius);
    }

    #[test]
    fn numerals_sit_on_the_ring_upright_and_in_order() {
        let vp = Viewport::new(400.0, 400.0);
        let r = 200.0;
        let dl = record(vp, ClockTime::new(4, 20, 0));
        let ts = texts(&dl);
        assert_eq!(ts.len(), 12);

        for (i, t) in ts.iter().enumerate() {
            let n = i as u32 + 1;
            assert_eq!(t.text, n.to_string());
            assert_eq!(t.align, TextAlign::Center);
            assert!((t.size - 0.15 * r).abs() < EPS);

            let rel = t.anchor - vp.center();
            assert!((rel.length() - 0.85 * r).abs() < EPS, "numeral {n} at {}", rel.length());

            let expected = numeral_angle(n) % (2.0 * PI);
            let got = dial_angle(rel);
            let diff = (got - expected).abs();
            assert!(
                diff < EPS || (diff - 2.0 * PI).abs() < EPS,
                "numeral {n}: {got} vs {expected}"
            );
        }
    }

    #[test]
    fn three_and_twelve_land_where_expected() {
        let vp = Viewport::new(200.0, 200.0);
        let ts_dl = record(vp, ClockTime::new(0, 0, 0));
        let ts = texts(&ts_dl);
        let three = ts[2].anchor;
        let twelve = ts[11].anchor;
        assert!(three.distance(Vec2::new(100.0 + 85.0, 100.0)) < EPS);
        assert!(twelve.distance(Vec2::new(100.0, 100.0 - 85.0)) < EPS);
    }

    #[test]
    fn no_font_skips_numerals_only() {
        let mut dl = DrawList::new();
        draw_scene(
            &mut dl,
            Viewport::new(100.0, 100.0),
            ClockTime::new(1, 0, 0),
            None,
            &ClockStyle::default(),
        );
        assert!(texts(&dl).is_empty());
        assert_eq!(circles(&dl).len(), 2);
        assert_eq!(lines(&dl).len(), 3);
    }

    #[test]
    fn hands_start_at_centre_and_stay_inside() {
        for size in [10.0, 300.0, 2048.0] {
            let vp = Viewport::new(size, size);
            let r = size * 0.5;
            let dl = record(vp, ClockTime::new(7, 41, 13));
            let ls = lines(&dl);
            assert_eq!(ls.len(), 3);

            let expected = [(0.5, 0.07), (0.7, 0.05), (0.9, 0.02)];
            for (l, (len, width)) in ls.iter().zip(expected) {
                assert!(l.from.distance(vp.center()) < EPS);
                let reach = l.to.distance(vp.center());
                assert!((reach - len * r).abs() < EPS * size);
                assert!(reach <= 0.9 * r + EPS * size);
                assert!((l.width - width * r).abs() < EPS);
                assert_eq!(l.cap, LineCap::Round);
            }
        }
    }

    #[test]
    fn hands_point_along_their_angles() {
        let vp = Viewport::new(400.0, 400.0);
        let time = ClockTime::new(3, 30, 45);
        let dl = record(vp, time);
        let angles = HandAngles::from_time(time);

        let ls = lines(&dl);
        for (l, expected) in ls.iter().zip([angles.hour, angles.minute, angles.second]) {
            assert!((dial_angle(l.to - l.from) - expected).abs() < EPS);
        }
    }

    #[test]
    fn noon_hands_all_point_up() {
        let vp = Viewport::new(400.0, 400.0);
        let dl = record(vp, ClockTime::new(12, 0, 0));
        for l in lines(&dl) {
            assert!((l.to.x - l.from.x).abs() < EPS);
            assert!(l.to.y < l.from.y);
        }
    }

    #[test]
    fn hands_paint_above_face_and_numerals() {
        let mut dl = record(Viewport::new(200.0, 200.0), ClockTime::new(9, 15, 0));
        let order: Vec<&str> = dl
            .iter_in_paint_order()
            .map(|i| match i.cmd {
                DrawCmd::Circle(_) => "circle",
                DrawCmd::Text(_) => "text",
                DrawCmd::Line(_) => "line",
            })
            .collect();
        let first_line = order.iter().position(|k| *k == "line").unwrap();
        assert!(order[first_line..].iter().all(|k| *k == "line"));
        assert_eq!(&order[..2], &["circle", "circle"]);
    }

    #[test]
    fn recording_is_idempotent() {
        let vp = Viewport::new(320.0, 240.0);
        let time = ClockTime::new(18, 5, 59);
        let a = record(vp, time);
        let b = record(vp, time);
        assert_eq!(a.items(), b.items());
    }

    #[test]
    fn transform_state_is_restored() {
        let mut dl = DrawList::new();
        draw_numerals(&mut dl, 100.0, FontId::from_raw(0), &ClockStyle::default());
        assert_eq!(dl.transform_depth(), 0);
        assert!(dl.transform().approx_eq(Transform::identity(), 1e-6));
        assert!(dl.transform().rotation_angle().abs() < 1e-6);

        draw_scene(
            &mut dl,
            Viewport::new(50.0, 50.0),
            ClockTime::new(2, 2, 2),
            None,
            &ClockStyle::default(),
        );
        assert_eq!(dl.transform_depth(), 0);
        assert!(dl.transform().approx_eq(Transform::identity(), 1e-6));
    }

    #[test]
    fn callers_transform_is_respected() {
        let mut dl = DrawList::new();
        let shift = Vec2::new(10.0, 20.0);
        dl.with_transform(Transform::translation(shift), |dl| {
            draw_face(dl, 50.0, &ClockStyle::default());
        });
        assert_eq!(circles(&dl)[0].center, shift);
    }
}
