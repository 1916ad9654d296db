use maud::{html, Markup, PreEscaped};

use crate::data::*;

pub mod components;
pub mod pages;
mod wrappers;

/// Name the site goes by in the navigation bar and page titles.
pub const SITE_NAME: &str = "DevBlog";

/// Link target for a post.
pub fn post_href(slug: &str) -> String {
    format!("/blog/{slug}")
}

/// Link target for the blog index filtered to one category, encoded the way
/// `Query` decodes it.
pub fn category_href(category: &str) -> String {
    match serde_urlencoded::to_string([("category", category)]) {
        Ok(query) => format!("/blog?{query}"),
        Err(_) => "/blog".to_owned(),
    }
}
