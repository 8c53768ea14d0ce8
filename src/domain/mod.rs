pub mod fixtures;
pub mod post;

pub use post::{filter_posts, Post, PostStatus, StatusFilter};
