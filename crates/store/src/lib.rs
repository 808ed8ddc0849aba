pub mod sessions;

pub use sessions::memory_repository::InMemorySessionRepository;
pub use sessions::models::{Session, SessionResults};
pub use sessions::repositories::{SessionChange, SessionRepository};
