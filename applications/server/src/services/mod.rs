/// Server services
pub mod auth;

pub use auth::AuthService;
