pub mod model;
pub mod repository;

pub use model::{windows_overlap, Show};
pub use repository::ShowRepository;
