pub mod object_id;
pub mod ownership;
pub mod pagination;

pub use object_id::{InvalidObjectId, ObjectId};
pub use ownership::Ownership;
pub use pagination::{Page, PageError, PAGE_SIZE};
