pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::{PostContentRequest, PostResponse};
pub use error::PostServiceError;
pub use model::{Post, PostView};
pub use service::{PostService, PostServiceApi};
