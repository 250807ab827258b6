//! Show domain entity and schedule window arithmetic

use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};

/// A scheduled screening of a movie on a screen.
#[derive(Debug, Clone)]
pub struct Show {
    pub id: i64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub ticket_price: f64,
    pub is_active: bool,
    pub movie_id: i64,
    pub screen_id: i64,
    pub created_at: DateTime<Utc>,
}

impl Show {
    pub fn new(
        date: NaiveDate,
        start_time: NaiveTime,
        ticket_price: f64,
        movie_id: i64,
        screen_id: i64,
    ) -> Self {
        Self {
            id: 0,
            date,
            start_time,
            ticket_price,
            is_active: true,
            movie_id,
            screen_id,
            created_at: Utc::now(),
        }
    }

    /// Hide from future-facing listings (past-date sweep).
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Whether the show's date lies strictly before `today`.
    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.date < today
    }

    /// Minutes from midnight at which the show starts.
    pub fn start_minutes(&self) -> i32 {
        (self.start_time.num_seconds_from_midnight() / 60) as i32
    }

    /// Minutes from midnight at which the show's occupation of the screen
    /// ends, clamped to end-of-day. The window is half-open: a show that
    /// ends at minute `m` does not conflict with one starting at `m`.
    pub fn end_minutes(&self, duration_minutes: i32) -> i32 {
        (self.start_minutes() + duration_minutes).min(24 * 60)
    }
}

/// Half-open interval overlap: [s1, e1) and [s2, e2) conflict iff
/// `s1 < e2 && s2 < e1`. Touching endpoints do not conflict.
pub fn windows_overlap(s1: i32, e1: i32, s2: i32, e2: i32) -> bool {
    s1 < e2 && s2 < e1
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn show_at(hour: u32, min: u32) -> Show {
        Show::new(
            NaiveDate::from_ymd_opt(2026, 9, 14).unwrap(),
            NaiveTime::from_hms_opt(hour, min, 0).unwrap(),
            250.0,
            1,
            1,
        )
    }

    #[test]
    fn new_show_is_active() {
        let s = show_at(10, 0);
        assert!(s.is_active);
        assert_eq!(s.ticket_price, 250.0);
    }

    #[test]
    fn deactivate_hides_show() {
        let mut s = show_at(10, 0);
        s.deactivate();
        assert!(!s.is_active);
    }

    #[test]
    fn past_detection_is_strict() {
        let s = show_at(10, 0);
        assert!(s.is_past(NaiveDate::from_ymd_opt(2026, 9, 15).unwrap()));
        assert!(!s.is_past(NaiveDate::from_ymd_opt(2026, 9, 14).unwrap()));
    }

    #[test]
    fn window_minutes() {
        let s = show_at(10, 0);
        assert_eq!(s.start_minutes(), 600);
        assert_eq!(s.end_minutes(150), 750);
    }

    #[test]
    fn end_clamped_to_end_of_day() {
        let s = show_at(23, 0);
        assert_eq!(s.end_minutes(180), 24 * 60);
    }

    #[test]
    fn overlapping_windows_conflict() {
        // [10:00, 12:30) vs [12:00, 14:00)
        assert!(windows_overlap(600, 750, 720, 840));
    }

    #[test]
    fn touching_windows_do_not_conflict() {
        // [10:00, 12:30) vs [12:30, 14:00)
        assert!(!windows_overlap(600, 750, 750, 840));
        // [09:00, 10:00) vs [10:00, 12:30)
        assert!(!windows_overlap(540, 600, 600, 750));
    }

    #[test]
    fn contained_window_conflicts() {
        assert!(windows_overlap(600, 750, 620, 640));
    }
}
