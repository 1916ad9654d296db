use chrono::NaiveDate;
use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;
use thiserror::Error;

use super::NotFound;

/// The synthetic category that matches every post.
pub const ALL_CATEGORIES: &str = "All";

static EMBEDDED_POSTS: &str = include_str!("../../content/posts.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("post catalog is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("post slug `{0}` appears more than once")]
    DuplicateSlug(String),
}

#[derive(Deserialize)]
pub(super) struct PostData {
    slug: String,
    title: String,
    preview: String,
    content: String,
    category: String,
    read_time: String,
    date: NaiveDate,
    author: String,
}

/// Every post on the site, keyed by slug in the order they were authored
/// into the catalog.
pub struct Catalog {
    posts: IndexMap<String, PostData>,
}

impl Catalog {
    /// Load the catalog compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_POSTS)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: Vec<PostData> = serde_json::from_str(json)?;

        let mut posts = IndexMap::with_capacity(data.len());
        for post in data {
            if posts.contains_key(&post.slug) {
                return Err(CatalogError::DuplicateSlug(post.slug));
            }
            posts.insert(post.slug.clone(), post);
        }

        Ok(Catalog { posts })
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn lookup(&self, slug: &str) -> Result<Post<'_>, NotFound> {
        self.posts
            .get_key_value(slug)
            .map(|(slug, data)| Post { slug, data })
            .ok_or_else(|| NotFound::Post(slug.to_owned()))
    }

    /// All posts in catalog order, restricted to one category unless the
    /// filter is absent or [`ALL_CATEGORIES`].
    pub fn list<'a>(&'a self, category: Option<&'a str>) -> impl Iterator<Item = Post<'a>> {
        let category = category.filter(|&c| c != ALL_CATEGORIES);
        self.posts()
            .filter(move |post| category.map_or(true, |c| post.category() == c))
    }

    /// Distinct categories in first-seen order, preceded by [`ALL_CATEGORIES`].
    pub fn categories(&self) -> Vec<&str> {
        let mut categories = IndexSet::new();
        categories.insert(ALL_CATEGORIES);
        for post in self.posts.values() {
            categories.insert(post.category.as_str());
        }
        categories.into_iter().collect()
    }

    /// Each category with the number of posts filed under it, in first-seen
    /// order.
    pub fn category_counts(&self) -> Vec<(&str, usize)> {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for post in self.posts.values() {
            *counts.entry(post.category.as_str()).or_default() += 1;
        }
        counts.into_iter().collect()
    }

    /// The first `n` posts of the catalog.
    pub fn latest(&self, n: usize) -> impl Iterator<Item = Post<'_>> {
        self.posts().take(n)
    }

    fn posts(&self) -> impl Iterator<Item = Post<'_>> {
        self.posts.iter().map(|(slug, data)| Post { slug, data })
    }
}

/// A post in the catalog.
#[derive(Clone, Copy)]
pub struct Post<'catalog> {
    slug: &'catalog str,
    data: &'catalog PostData,
}

impl<'catalog> Post<'catalog> {
    pub fn slug(&self) -> &'catalog str {
        self.slug
    }

    pub fn title(&self) -> &'catalog str {
        &self.data.title
    }

    pub fn preview(&self) -> &'catalog str {
        &self.data.preview
    }

    /// The post body. This is trusted, author-written HTML.
    pub fn content(&self) -> &'catalog str {
        &self.data.content
    }

    pub fn category(&self) -> &'catalog str {
        &self.data.category
    }

    pub fn read_time(&self) -> &'catalog str {
        &self.data.read_time
    }

    pub fn date(&self) -> NaiveDate {
        self.data.date
    }

    /// The publication date, e.g. "March 21, 2024".
    pub fn date_long(&self) -> String {
        self.data.date.format("%B %-d, %Y").to_string()
    }

    pub fn author(&self) -> &'catalog str {
        &self.data.author
    }
}
