use chrono::NaiveDate;

/// Movie catalogue entry. Shows reference a movie for its runtime and
/// release gating.
#[derive(Debug, Clone)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub duration_minutes: i32,
    pub release_date: Option<NaiveDate>,
    pub is_active: bool,
}

impl Movie {
    pub fn new(title: String, duration_minutes: i32) -> Self {
        Self {
            id: 0,
            title,
            description: None,
            genre: None,
            duration_minutes,
            release_date: None,
            is_active: true,
        }
    }

    /// A show may not be scheduled before the movie's release date.
    pub fn released_by(&self, date: NaiveDate) -> bool {
        match self.release_date {
            Some(release) => date >= release,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_gating() {
        let mut m = Movie::new("Interstellar".into(), 169);
        assert!(m.released_by(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));

        m.release_date = NaiveDate::from_ymd_opt(2026, 9, 20);
        assert!(!m.released_by(NaiveDate::from_ymd_opt(2026, 9, 19).unwrap()));
        assert!(m.released_by(NaiveDate::from_ymd_opt(2026, 9, 20).unwrap()));
    }
}
