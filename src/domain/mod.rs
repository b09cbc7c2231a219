mod api_response;
mod credentials;
mod run_id;
mod tourist;

pub use api_response::ApiResponse;
pub use credentials::LoginCredentials;
pub use run_id::RunId;
pub use tourist::{NewTourist, TouristId};
