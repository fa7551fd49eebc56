pub mod dto;
pub mod error;
pub mod jwt;
pub mod password;
pub mod service;

pub use dto::{LoginRequest, RegisterRequest};
pub use error::AuthServiceError;
pub use jwt::{Claims, JwtManager, SESSION_COOKIE};
pub use service::AuthService;
