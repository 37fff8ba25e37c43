use chrono::{Local, Timelike};

/// Wall-clock time of day, 24-hour.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockTime {
    pub const fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self { hour, minute, second }
    }

    /// Truncates any chrono time value to whole seconds.
    ///
    /// A leap second (`second() == 59`, nanos past 1e9) reads as :59.
    pub fn from_timelike<T: Timelike>(t: &T) -> Self {
        Self::new(t.hour(), t.minute(), t.second())
    }
}

/// Source of the time the clock displays.
pub trait TimeSource {
    /// Samples the current time of day.
    fn now(&self) -> ClockTime;

    /// Name for log records.
    fn name(&self) -> &str {
        "TimeSource"
    }
}

/// Local wall clock in the host's time zone.
#[derive(Debug, Default, Copy, Clone)]
pub struct LocalTime;

impl TimeSource for LocalTime {
    fn now(&self) -> ClockTime {
        ClockTime::from_timelike(&Local::now())
    }

    fn name(&self) -> &str {
        "local"
    }
}

/// Always reports the same time. Useful for screenshots and tests.
#[derive(Debug, Copy, Clone)]
pub struct FixedTime(pub ClockTime);

impl TimeSource for FixedTime {
    fn now(&self) -> ClockTime {
        self.0
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn timelike_fields_are_copied() {
        let t = NaiveTime::from_hms_opt(18, 4, 59).unwrap();
        assert_eq!(ClockTime::from_timelike(&t), ClockTime::new(18, 4, 59));
    }

    #[test]
    fn sub_second_part_is_dropped() {
        let t = NaiveTime::from_hms_milli_opt(9, 30, 12, 999).unwrap();
        assert_eq!(ClockTime::from_timelike(&t), ClockTime::new(9, 30, 12));
    }

    #[test]
    fn local_time_is_in_range() {
        let t = LocalTime.now();
        assert!(t.hour < 24);
        assert!(t.minute < 60);
        assert!(t.second < 60);
    }

    #[test]
    fn fixed_time_never_moves() {
        let src = FixedTime(ClockTime::new(10, 10, 30));
        assert_eq!(src.now(), src.now());
        assert_eq!(src.name(), "fixed");
    }
}
