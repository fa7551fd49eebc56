pub mod error;
pub mod model;
pub mod service;

pub use error::LikeServiceError;
pub use model::{LikeOutcome, LikeView};
pub use service::LikeService;
