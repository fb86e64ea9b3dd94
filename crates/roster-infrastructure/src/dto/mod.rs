//! Wire and storage DTOs, kept apart from the domain models.

mod app_state;
mod users_response;

pub use app_state::PersistedStateDto;
pub use users_response::UsersResponse;
