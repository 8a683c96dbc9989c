//! Content module - the post record

mod post;

pub use post::{Post, PostId};
