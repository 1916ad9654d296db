use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use super::NotFound;

/// Identifies a comment within its tree.
///
/// Ids are derived from the creation time in milliseconds and are strictly
/// increasing within a tree, so two comments created in the same millisecond
/// still get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CommentId(u64);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for CommentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(CommentId)
    }
}

/// The person a comment is attributed to. Never checked against any user
/// registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub badge: Option<String>,
}

impl Author {
    /// The identity every visitor comments under.
    pub fn anonymous() -> Self {
        Author {
            id: "anonymous".to_owned(),
            name: "Anonymous".to_owned(),
            avatar: None,
            badge: Some("user".to_owned()),
        }
    }

    /// Uppercase first letters of each word of the name, or `?` if the name
    /// has none.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "?".to_owned()
        } else {
            initials
        }
    }
}

/// A comment and the replies nested under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,

    /// Plain text written by a visitor. Must never be rendered as markup.
    pub content: String,

    /// When the comment was created.
    pub date: DateTime<Utc>,

    pub author: Author,

    /// Slug of the post the comment was left on.
    pub post_id: String,

    pub likes: u32,

    /// Whether the current viewer likes this comment.
    pub liked: bool,

    /// Display name of the author being replied to. Only shown to the
    /// reader; nesting is expressed by `replies`.
    pub reply_to: Option<String>,

    /// Direct replies in the order they were posted.
    pub replies: Vec<Comment>,
}

impl Comment {
    fn new(
        id: CommentId,
        content: String,
        author: Author,
        post_id: String,
        reply_to: Option<String>,
    ) -> Self {
        Comment {
            id,
            content,
            date: Utc::now(),
            author,
            post_id,
            likes: 0,
            liked: false,
            reply_to,
            replies: Vec::new(),
        }
    }

    /// The creation date, e.g. "Mar 21, 10:30 AM".
    pub fn date_short(&self) -> String {
        self.date.format("%b %-d, %I:%M %p").to_string()
    }
}

#[derive(Debug, Default)]
struct IdSource {
    last: u64,
}

impl IdSource {
    fn next(&mut self) -> CommentId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        self.last = now.max(self.last + 1);
        CommentId(self.last)
    }
}

/// The comments left on one post during one page view.
#[derive(Debug)]
pub struct CommentTree {
    post_id: String,
    roots: Vec<Comment>,
    ids: IdSource,
}

impl CommentTree {
    pub fn new(post_id: impl Into<String>) -> Self {
        CommentTree {
            post_id: post_id.into(),
            roots: Vec::new(),
            ids: IdSource::default(),
        }
    }

    /// Slug of the post this tree belongs to.
    pub fn post_id(&self) -> &str {
        &self.post_id
    }

    /// Top-level comments in the order they were posted.
    pub fn roots(&self) -> &[Comment] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Append a new top-level comment.
    ///
    /// Empty content is accepted; callers decide whether to reject it.
    pub fn add(
        &mut self,
        content: impl Into<String>,
        author: Author,
        post_id: impl Into<String>,
    ) -> &Comment {
        let id = self.ids.next();
        self.roots
            .push(Comment::new(id, content.into(), author, post_id.into(), None));
        &self.roots[self.roots.len() - 1]
    }

    /// Append a reply to the end of the comment `parent`'s replies, at
    /// whatever depth the parent sits.
    pub fn reply(
        &mut self,
        parent: CommentId,
        content: impl Into<String>,
        author: Author,
    ) -> Result<&Comment, NotFound> {
        let parent = find_mut(&mut self.roots, parent).ok_or(NotFound::Comment(parent))?;
        let reply = Comment::new(
            self.ids.next(),
            content.into(),
            author,
            parent.post_id.clone(),
            Some(parent.author.name.clone()),
        );
        parent.replies.push(reply);
        Ok(&parent.replies[parent.replies.len() - 1])
    }

    /// Like the comment if the viewer has not, otherwise take the like back.
    pub fn toggle_like(&mut self, id: CommentId) -> Result<&Comment, NotFound> {
        let comment = find_mut(&mut self.roots, id).ok_or(NotFound::Comment(id))?;
        if comment.liked {
            comment.likes = comment.likes.saturating_sub(1);
        } else {
            comment.likes += 1;
        }
        comment.liked = !comment.liked;
        Ok(&*comment)
    }

    /// Remove a comment together with all of its replies.
    ///
    /// Returns whether the comment existed.
    pub fn delete(&mut self, id: CommentId) -> bool {
        let mut stack: Vec<&mut Vec<Comment>> = vec![&mut self.roots];
        while let Some(siblings) = stack.pop() {
            if let Some(position) = siblings.iter().position(|c| c.id == id) {
                siblings.remove(position);
                return true;
            }
            stack.extend(siblings.iter_mut().map(|c| &mut c.replies));
        }
        false
    }

    pub fn get(&self, id: CommentId) -> Option<&Comment> {
        self.render().map(|(c, _)| c).find(|c| c.id == id)
    }

    /// Number of comments at every depth.
    pub fn count(&self) -> usize {
        self.render().count()
    }

    /// Walk the tree in display order: each comment comes before its
    /// replies, paired with its nesting depth (0 for top-level).
    pub fn render(&self) -> Render<'_> {
        Render {
            stack: self.roots.iter().rev().map(|c| (c, 0)).collect(),
        }
    }
}

fn find_mut(roots: &mut [Comment], id: CommentId) -> Option<&mut Comment> {
    let mut stack: Vec<&mut Comment> = roots.iter_mut().rev().collect();
    while let Some(comment) = stack.pop() {
        if comment.id == id {
            return Some(comment);
        }
        stack.extend(comment.replies.iter_mut().rev());
    }
    None
}

/// Pre-order iterator over a [`CommentTree`], created by
/// [`CommentTree::render`].
pub struct Render<'tree> {
    stack: Vec<(&'tree Comment, usize)>,
}

impl<'tree> Iterator for Render<'tree> {
    type Item = (&'tree Comment, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (comment, depth) = self.stack.pop()?;
        self.stack
            .extend(comment.replies.iter().rev().map(|r| (r, depth + 1)));
        Some((comment, depth))
    }
}
