//! Parsing of container uptime strings such as `"5h 30m"`.

use serde::Serialize;

const HOURS_PER_DAY: f64 = 24.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DaysAndHours {
    pub days: u64,
    pub hours: u64,
}

/// Hour and minute components read from the start of an uptime string.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Uptime {
    pub hours: f64,
    pub minutes: f64,
}

impl Uptime {
    /// Reads an optional `<N>h`, optional whitespace, then an optional `<N>m`,
    /// all anchored at the start of the input. A component that is not found
    /// where expected counts as zero; trailing text is ignored.
    pub fn parse(input: &str) -> Self {
        let (hours, rest) = match take_component(input, 'h') {
            Some((value, rest)) => (value, rest),
            None => (0.0, input),
        };
        let rest = rest.trim_start();
        let minutes = take_component(rest, 'm').map(|(value, _)| value).unwrap_or(0.0);
        Self { hours, minutes }
    }

    pub fn total_hours(&self) -> f64 {
        self.hours + self.minutes / 60.0
    }

    /// `hours` is rounded half away from zero after taking the remainder, so
    /// a total such as 47.5h yields `{ days: 1, hours: 24 }` rather than
    /// rolling over into the next day.
    pub fn days_and_hours(&self) -> DaysAndHours {
        let total = self.total_hours();
        DaysAndHours {
            days: (total / HOURS_PER_DAY).floor() as u64,
            hours: (total % HOURS_PER_DAY).round() as u64,
        }
    }
}

/// Leading run of ASCII digits followed by `unit`.
fn take_component(input: &str, unit: char) -> Option<(f64, &str)> {
    let digits = input.len() - input.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let rest = input[digits..].strip_prefix(unit)?;
    let value = input[..digits].parse::<f64>().ok()?;
    Some((value, rest))
}

pub fn parse_uptime_to_hours(uptime: &str) -> f64 {
    Uptime::parse(uptime).total_hours()
}

pub fn parse_uptime_to_days_and_hours(uptime: &str) -> DaysAndHours {
    Uptime::parse(uptime).days_and_hours()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_and_unrecognized_input_is_zero() {
        for input in ["", "   ", "forever", "up 5h", "h m"] {
            assert_eq!(parse_uptime_to_hours(input), 0.0, "input {:?}", input);
            assert_eq!(
                parse_uptime_to_days_and_hours(input),
                DaysAndHours { days: 0, hours: 0 },
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn hours_and_minutes() {
        assert!(approx(parse_uptime_to_hours("5h 30m"), 5.5));
        assert_eq!(
            parse_uptime_to_days_and_hours("5h 30m"),
            DaysAndHours { days: 0, hours: 6 }
        );
        assert!(approx(parse_uptime_to_hours("2h 15m"), 2.25));
        assert!(approx(parse_uptime_to_hours("5h30m"), 5.5));
    }

    #[test]
    fn single_components() {
        assert!(approx(parse_uptime_to_hours("26h"), 26.0));
        assert_eq!(
            parse_uptime_to_days_and_hours("26h"),
            DaysAndHours { days: 1, hours: 2 }
        );
        assert!(approx(parse_uptime_to_hours("45m"), 0.75));
        assert_eq!(
            parse_uptime_to_days_and_hours("45m"),
            DaysAndHours { days: 0, hours: 1 }
        );
    }

    #[test]
    fn partial_components_default_to_zero() {
        assert!(approx(parse_uptime_to_hours("5h 30"), 5.0));
        assert!(approx(parse_uptime_to_hours("12"), 0.0));
        assert!(approx(parse_uptime_to_hours("3h 20m since boot"), 3.0 + 20.0 / 60.0));
    }

    #[test]
    fn half_hour_rounds_up_into_twenty_four() {
        // The remainder is rounded after the day split, so the hour count can
        // reach 24 instead of carrying into days.
        assert_eq!(
            parse_uptime_to_days_and_hours("47h 30m"),
            DaysAndHours { days: 1, hours: 24 }
        );
        assert_eq!(
            parse_uptime_to_days_and_hours("23h 30m"),
            DaysAndHours { days: 0, hours: 24 }
        );
    }

    #[test]
    fn oversized_numbers_do_not_fault() {
        let huge = "99999999999999999999999h";
        assert!(parse_uptime_to_hours(huge) > 1e22);
        let _ = parse_uptime_to_days_and_hours(huge);
    }
}
