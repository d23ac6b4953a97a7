//! Concrete calendars built on the holiday engine.

/// U.S. federal calendar.
pub mod united_states;
