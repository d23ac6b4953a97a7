//! `Weekday` — day-of-week enum.

/// Day of the week.
///
/// Variants are numbered 0–6 starting from Sunday (Sunday = 0,
/// Saturday = 6), which is the numbering the holiday roll arithmetic works
/// in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Weekday {
    /// Sunday (0).
    Sunday = 0,
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
}

impl Weekday {
    /// All seven weekdays, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Construct from a day-of-week number (0 = Sunday … 6 = Saturday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_day_of_week(n: u8) -> Option<Self> {
        Self::ALL.get(n as usize).copied()
    }

    /// Return the day-of-week number (0 = Sunday … 6 = Saturday).
    pub fn day_of_week(&self) -> u8 {
        *self as u8
    }

    /// Return `true` if this is Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    /// Days to move forward from `self` to reach `target` (0–6).
    pub fn days_until(&self, target: Weekday) -> u8 {
        (target.day_of_week() + 7 - self.day_of_week()) % 7
    }

    /// Days to move backward from `self` to reach `target` (0–6).
    pub fn days_since(&self, target: Weekday) -> u8 {
        (self.day_of_week() + 7 - target.day_of_week()) % 7
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering_starts_on_sunday() {
        assert_eq!(Weekday::Sunday.day_of_week(), 0);
        assert_eq!(Weekday::Saturday.day_of_week(), 6);
        for n in 0..7u8 {
            assert_eq!(Weekday::from_day_of_week(n).unwrap().day_of_week(), n);
        }
        assert!(Weekday::from_day_of_week(7).is_none());
    }

    #[test]
    fn weekend_days() {
        let weekend: Vec<_> = Weekday::ALL.iter().filter(|w| w.is_weekend()).collect();
        assert_eq!(weekend, [&Weekday::Sunday, &Weekday::Saturday]);
    }

    #[test]
    fn roll_distances() {
        // Same day never moves.
        assert_eq!(Weekday::Monday.days_until(Weekday::Monday), 0);
        assert_eq!(Weekday::Monday.days_since(Weekday::Monday), 0);
        // Friday → next Monday is 3 days ahead, previous Monday 4 days back.
        assert_eq!(Weekday::Friday.days_until(Weekday::Monday), 3);
        assert_eq!(Weekday::Friday.days_since(Weekday::Monday), 4);
        // Sunday → Thursday.
        assert_eq!(Weekday::Sunday.days_until(Weekday::Thursday), 4);
        assert_eq!(Weekday::Sunday.days_since(Weekday::Thursday), 3);
    }
}
