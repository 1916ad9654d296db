pub use catalog::{Catalog, CatalogError, Post, ALL_CATEGORIES};
pub use comments::{Author, Comment, CommentId, CommentTree, Render};
pub use sessions::{SessionId, Sessions};
use thiserror::Error;

/// The read-only collection of blog posts.
pub mod catalog;

/// Data structures for nested comment threads.
pub mod comments;

/// Comment trees owned by open post pages.
pub mod sessions;

/// A post slug or comment id did not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFound {
    #[error("no post with slug `{0}`")]
    Post(String),
    #[error("no comment with id {0}")]
    Comment(CommentId),
}
