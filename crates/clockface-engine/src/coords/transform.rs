use super::Vec2;

/// 2D affine transform in logical pixel space.
///
/// Stored column-major as
///
/// ```text
/// | a  c  e |
/// | b  d  f |
/// | 0  0  1 |
/// ```
///
/// Composition follows the immediate-mode canvas model: `current.concat(local)`
/// applies `local` first, then `current`. Recording a rotate, then a translate,
/// then drawing at the origin therefore places the point at the translated
/// offset turned by the rotation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Clockwise-on-screen rotation by `angle` radians (+Y is down).
    #[inline]
    pub fn rotation(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { a: cos, b: sin, c: -sin, d: cos, e: 0.0, f: 0.0 }
    }

    #[inline]
    pub const fn translation(offset: Vec2) -> Self {
        Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: offset.x, f: offset.y }
    }

    /// Returns `self * local`: `local` is applied to points before `self`.
    #[inline]
    pub fn concat(self, local: Transform) -> Self {
        Self {
            a: self.a * local.a + self.c * local.b,
            b: self.b * local.a + self.d * local.b,
            c: self.a * local.c + self.c * local.d,
            d: self.b * local.c + self.d * local.d,
            e: self.a * local.e + self.c * local.f + self.e,
            f: self.b * local.e + self.d * local.f + self.f,
        }
    }

    /// Maps a point through the transform.
    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Net rotation carried by the linear part, in `(-π, π]`.
    #[inline]
    pub fn rotation_angle(self) -> f32 {
        self.b.atan2(self.a)
    }

    #[inline]
    pub fn offset(self) -> Vec2 {
        Vec2::new(self.e, self.f)
    }

    /// Component-wise comparison with tolerance `eps`.
    pub fn approx_eq(self, other: Transform, eps: f32) -> bool {
        (self.a - other.a).abs() <= eps
            && (self.b - other.b).abs() <= eps
            && (self.c - other.c).abs() <= eps
            && (self.d - other.d).abs() <= eps
            && (self.e - other.e).abs() <= eps
            && (self.f - other.f).abs() <= eps
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-4;

    fn close(a: Vec2, b: Vec2) -> bool {
        a.distance(b) <= EPS
    }

    #[test]
    fn quarter_turn_maps_up_to_right() {
        let p = Transform::rotation(FRAC_PI_2).apply(Vec2::new(0.0, -10.0));
        assert!(close(p, Vec2::new(10.0, 0.0)), "{p:?}");
    }

    #[test]
    fn half_turn_maps_up_to_down() {
        let p = Transform::rotation(PI).apply(Vec2::new(0.0, -10.0));
        assert!(close(p, Vec2::new(0.0, 10.0)), "{p:?}");
    }

    #[test]
    fn concat_applies_local_first() {
        let t = Transform::translation(Vec2::new(100.0, 0.0))
            .concat(Transform::rotation(FRAC_PI_2));
        // rotate (0,-5) -> (5,0), then translate.
        assert!(close(t.apply(Vec2::new(0.0, -5.0)), Vec2::new(105.0, 0.0)));
    }

    #[test]
    fn opposite_rotations_cancel() {
        let t = Transform::rotation(1.234).concat(Transform::rotation(-1.234));
        assert!(t.approx_eq(Transform::IDENTITY, EPS));
    }

    #[test]
    fn rotate_translate_counter_rotate_keeps_orientation() {
        let ang = 5.0 * PI / 6.0;
        let t = Transform::rotation(ang)
            .concat(Transform::translation(Vec2::new(0.0, -50.0)))
            .concat(Transform::rotation(-ang));

        assert!(t.rotation_angle().abs() <= EPS);
        let expected = Transform::rotation(ang).apply(Vec2::new(0.0, -50.0));
        assert!(close(t.offset(), expected));
    }
}
