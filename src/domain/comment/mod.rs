pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::{CommentResponse, CreateCommentRequest};
pub use error::CommentServiceError;
pub use model::{Comment, CommentView};
pub use service::CommentService;
