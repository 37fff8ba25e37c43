//! Hand angles.
//!
//! Angles are radians measured clockwise from 12 o'clock, matching
//! `Transform::rotation` on a +Y-down surface.

use std::f32::consts::PI;

use crate::time_source::ClockTime;

/// Hour hand: a twelfth of a turn per hour plus the creep from the minutes.
#[inline]
pub fn hour_angle(hour: u32, minute: u32) -> f32 {
    (hour % 12) as f32 * (PI / 6.0) + minute as f32 * (PI / 360.0)
}

/// Minute hand: a sixtieth of a turn per minute plus the creep from the seconds.
#[inline]
pub fn minute_angle(minute: u32, second: u32) -> f32 {
    minute as f32 * (PI / 30.0) + second as f32 * (PI / 1800.0)
}

#[inline]
pub fn second_angle(second: u32) -> f32 {
    second as f32 * (PI / 30.0)
}

/// Angle of numeral `n` (1..=12) on the dial.
#[inline]
pub fn numeral_angle(n: u32) -> f32 {
    n as f32 * (PI / 6.0)
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl HandAngles {
    pub fn from_time(t: ClockTime) -> Self {
        Self {
            hour: hour_angle(t.hour, t.minute),
            minute: minute_angle(t.minute, t.second),
            second: second_angle(t.second),
        }
    }
}
