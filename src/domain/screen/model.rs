/// Auditorium with a fixed seat grid. Seats are provisioned once when the
/// screen is created; rows map to letters so the grid is capped at 26 rows.
#[derive(Debug, Clone)]
pub struct Screen {
    pub id: i64,
    pub name: String,
    pub total_rows: i32,
    pub seats_per_row: i32,
    pub is_active: bool,
}

pub const MAX_ROWS: i32 = 26;

impl Screen {
    pub fn new(name: String, total_rows: i32, seats_per_row: i32) -> Self {
        Self {
            id: 0,
            name,
            total_rows,
            seats_per_row,
            is_active: true,
        }
    }

    pub fn capacity(&self) -> i32 {
        self.total_rows * self.seats_per_row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_grid_size() {
        let s = Screen::new("Screen 1".into(), 10, 12);
        assert_eq!(s.capacity(), 120);
    }
}
