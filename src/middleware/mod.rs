pub mod auth;

pub use auth::{get_authenticated_user, AuthLayer, AuthenticatedUser};
