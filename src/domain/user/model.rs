/// Registered customer. Holds and bookings are attributed to a user id.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
}

impl User {
    pub fn new(name: String, email: String) -> Self {
        Self {
            id: 0,
            name,
            email,
            phone_number: None,
        }
    }
}
