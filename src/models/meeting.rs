//! Weekly meeting block model.
//!
//! A `MeetingTime` is one recurring block on the weekly grid: a set of
//! weekdays plus a start/end clock time in minutes since midnight.
//! Registration systems report some meetings (online/arranged sections)
//! with no fixed time; those carry the sentinel times and an empty day
//! set, and never conflict with anything.
//!
//! # Conflict Semantics
//!
//! Two meetings conflict iff they share at least one weekday and their
//! `[start, end]` ranges intersect as **closed** intervals. Back-to-back
//! meetings (one ending at the exact minute another starts) therefore
//! conflict. This is deliberate: students cannot teleport between
//! buildings, and downstream consumers rely on the conservative rule.

use serde::{Deserialize, Serialize};

/// Sentinel minute value for meetings with no fixed time ("TBA").
pub const UNSCHEDULED_MINUTE: i16 = -1;

/// A weekday on the registration grid (weekend meetings do not occur).
///
/// `from_code` accepts the single-letter shorthand used by registration
/// systems: `M T W R F` (R = Thursday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Weekday {
    /// Parses the registration shorthand (`'M'`, `'T'`, `'W'`, `'R'`, `'F'`).
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'M' => Some(Weekday::Mon),
            'T' => Some(Weekday::Tue),
            'W' => Some(Weekday::Wed),
            'R' => Some(Weekday::Thu),
            'F' => Some(Weekday::Fri),
            _ => None,
        }
    }

    /// The registration shorthand letter for this weekday.
    pub fn code(&self) -> char {
        match self {
            Weekday::Mon => 'M',
            Weekday::Tue => 'T',
            Weekday::Wed => 'W',
            Weekday::Thu => 'R',
            Weekday::Fri => 'F',
        }
    }
}

/// One weekly meeting block of a section (lecture, lab, or recitation).
///
/// Times are minutes since midnight (`0..=1439`), or [`UNSCHEDULED_MINUTE`]
/// in both positions when the meeting has no fixed time. An empty `days`
/// set likewise marks an unscheduled (online/arranged) meeting. Both
/// sentinels make the meeting inert for conflict purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingTime {
    /// Weekdays this block meets. Empty = unscheduled/online.
    pub days: Vec<Weekday>,
    /// Start time, minutes since midnight. `-1` = no fixed time.
    pub start_minute: i16,
    /// End time, minutes since midnight. `-1` = no fixed time.
    pub end_minute: i16,
    /// Instructor display name, if known.
    pub instructor: String,
    /// Building and room, or "TBA".
    pub location: String,
}

impl MeetingTime {
    /// Creates a scheduled meeting block.
    pub fn new(days: Vec<Weekday>, start_minute: i16, end_minute: i16) -> Self {
        Self {
            days,
            start_minute,
            end_minute,
            instructor: String::new(),
            location: String::from("TBA"),
        }
    }

    /// Creates an unscheduled (online/arranged) meeting block.
    pub fn unscheduled() -> Self {
        Self {
            days: Vec::new(),
            start_minute: UNSCHEDULED_MINUTE,
            end_minute: UNSCHEDULED_MINUTE,
            instructor: String::new(),
            location: String::from("TBA"),
        }
    }

    /// Parses a day shorthand string ("MWF", "TR") into a day set.
    ///
    /// Unknown characters are skipped, matching the tolerant behavior of
    /// registration-page parsers.
    pub fn parse_days(shorthand: &str) -> Vec<Weekday> {
        shorthand.chars().filter_map(Weekday::from_code).collect()
    }

    /// Sets the instructor name.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Whether this block has a fixed weekly time.
    ///
    /// Requires both non-sentinel times and a non-empty day set; either
    /// sentinel alone already makes the block unscheduled.
    #[inline]
    pub fn is_scheduled(&self) -> bool {
        self.start_minute != UNSCHEDULED_MINUTE
            && self.end_minute != UNSCHEDULED_MINUTE
            && !self.days.is_empty()
    }

    /// Whether two blocks meet on at least one common weekday.
    ///
    /// An unscheduled block shares a day with nothing, including another
    /// unscheduled block.
    pub fn shares_day(&self, other: &Self) -> bool {
        if !self.is_scheduled() || !other.is_scheduled() {
            return false;
        }
        self.days.iter().any(|d| other.days.contains(d))
    }

    /// Whether two blocks conflict.
    ///
    /// False when either side is unscheduled or no weekday is shared.
    /// Otherwise true iff the closed ranges `[start, end]` intersect —
    /// touching endpoints count as a conflict.
    pub fn overlaps(&self, other: &Self) -> bool {
        if !self.shares_day(other) {
            return false;
        }
        self.start_minute <= other.end_minute && other.start_minute <= self.end_minute
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mwf(start: i16, end: i16) -> MeetingTime {
        MeetingTime::new(vec![Weekday::Mon, Weekday::Wed, Weekday::Fri], start, end)
    }

    fn tr(start: i16, end: i16) -> MeetingTime {
        MeetingTime::new(vec![Weekday::Tue, Weekday::Thu], start, end)
    }

    #[test]
    fn test_weekday_codes() {
        assert_eq!(Weekday::from_code('M'), Some(Weekday::Mon));
        assert_eq!(Weekday::from_code('r'), Some(Weekday::Thu));
        assert_eq!(Weekday::from_code('S'), None);
        assert_eq!(Weekday::Thu.code(), 'R');
    }

    #[test]
    fn test_parse_days() {
        assert_eq!(
            MeetingTime::parse_days("MWF"),
            vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]
        );
        assert_eq!(MeetingTime::parse_days("TR"), vec![Weekday::Tue, Weekday::Thu]);
        // Tolerant of junk characters
        assert_eq!(MeetingTime::parse_days("M?F"), vec![Weekday::Mon, Weekday::Fri]);
        assert!(MeetingTime::parse_days("").is_empty());
    }

    #[test]
    fn test_shares_day() {
        let a = mwf(540, 590);
        let b = tr(540, 590);
        let c = MeetingTime::new(vec![Weekday::Wed], 600, 650);
        assert!(!a.shares_day(&b));
        assert!(a.shares_day(&c));
        assert!(c.shares_day(&a));
    }

    #[test]
    fn test_overlap_basic() {
        let a = mwf(540, 590); // 9:00-9:50
        let b = mwf(560, 620);
        let c = mwf(600, 650); // 10:00-10:50
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_overlap_symmetric() {
        let a = mwf(540, 590);
        let b = mwf(560, 620);
        let c = tr(540, 590);
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
        assert_eq!(a.overlaps(&c), c.overlaps(&a));
    }

    #[test]
    fn test_overlap_closed_interval_boundary() {
        // 9:00-9:50 and 9:50-10:00 touch at 9:50 and DO conflict
        let a = mwf(540, 590);
        let b = mwf(590, 600);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_different_days_never_overlap() {
        let a = mwf(540, 590);
        let b = tr(540, 590);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_unscheduled_is_inert() {
        let tba = MeetingTime::unscheduled();
        let a = mwf(540, 590);
        assert!(!tba.is_scheduled());
        assert!(!tba.overlaps(&a));
        assert!(!a.overlaps(&tba));
        // Two unscheduled blocks do not conflict with each other either
        assert!(!tba.overlaps(&MeetingTime::unscheduled()));
        assert!(!tba.shares_day(&MeetingTime::unscheduled()));
    }

    #[test]
    fn test_empty_days_is_inert() {
        // Times present but no days: still unscheduled for conflicts
        let floating = MeetingTime::new(Vec::new(), 540, 590);
        let a = mwf(540, 590);
        assert!(!floating.is_scheduled());
        assert!(!floating.overlaps(&a));
    }

    #[test]
    fn test_builders() {
        let m = mwf(540, 590)
            .with_instructor("Sheffield")
            .with_location("SERC 306");
        assert_eq!(m.instructor, "Sheffield");
        assert_eq!(m.location, "SERC 306");
    }

    #[test]
    fn test_serde_roundtrip() {
        let m = mwf(540, 590).with_location("Anderson 24");
        let json = serde_json::to_string(&m).unwrap();
        let back: MeetingTime = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
