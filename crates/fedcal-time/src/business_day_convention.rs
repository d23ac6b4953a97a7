//! Business-day convention.

/// How to move a date that is not a business day onto one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BusinessDayConvention {
    /// The first business day after the date.
    Following,
    /// The first business day after the date unless it belongs to a
    /// different month; in that case the first business day before it.
    ModifiedFollowing,
    /// The first business day before the date.
    Preceding,
    /// The first business day before the date unless it belongs to a
    /// different month; in that case the first business day after it.
    ModifiedPreceding,
    /// Keep the date as is.
    Unadjusted,
    /// The closest business day; ties go forward.
    Nearest,
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
            BusinessDayConvention::Unadjusted => "Unadjusted",
            BusinessDayConvention::Nearest => "Nearest",
        };
        write!(f, "{s}")
    }
}
