pub mod model;
pub mod repository;

pub use model::{Screen, MAX_ROWS};
pub use repository::ScreenRepository;
