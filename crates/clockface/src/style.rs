use clockface_engine::paint::Color;

/// Hand proportions, relative to the dial radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandStyle {
    pub length: f32,
    pub width: f32,
}

impl HandStyle {
    pub const fn new(length: f32, width: f32) -> Self {
        Self { length, width }
    }
}

/// Look of the clock.
///
/// Fields named `*_radius`, `*_size` or holding a [`HandStyle`] are fractions
/// of the dial radius `R`; `stroke_width` is in logical pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockStyle {
    /// Surface clear color outside the dial.
    pub background: Color,
    pub face_fill: Color,
    /// Rim, hub, numerals and hands.
    pub ink: Color,
    pub stroke_width: f32,
    pub hub_radius: f32,
    pub numeral_radius: f32,
    pub numeral_size: f32,
    pub hour_hand: HandStyle,
    pub minute_hand: HandStyle,
    pub second_hand: HandStyle,
}

impl Default for ClockStyle {
    fn default() -> Self {
        Self {
            background: Color::white(),
            face_fill: Color::white(),
            ink: Color::from_srgb_u8(0x33, 0x33, 0x33, 0xff),
            stroke_width: 4.0,
            hub_radius: 0.1,
            numeral_radius: 0.85,
            numeral_size: 0.15,
            hour_hand: HandStyle::new(0.5, 0.07),
            minute_hand: HandStyle::new(0.7, 0.05),
            second_hand: HandStyle::new(0.9, 0.02),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ink_is_dark_grey() {
        assert_eq!(ClockStyle::default().ink, Color::from_hex("#333").unwrap());
    }

    #[test]
    fn hands_get_longer_and_thinner() {
        let s = ClockStyle::default();
        let hands = [s.hour_hand, s.minute_hand, s.second_hand];
        assert!(hands.windows(2).all(|w| w[0].length < w[1].length && w[0].width > w[1].width));
        assert!(hands.iter().all(|h| h.length <= 0.9));
    }
}
