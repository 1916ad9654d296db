use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use tracing::debug;

use super::CommentTree;

/// Identifies the comment tree of one open post page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl SessionId {
    fn random() -> Self {
        SessionId(rand::random())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u64::from_str_radix(s, 16).map(SessionId)
    }
}

/// The comment trees of every open post page.
///
/// A page opens a session when it is served and closes it when the reader
/// leaves. Nothing survives a closed session. When more than `capacity`
/// pages are open at once the oldest session is dropped.
pub struct Sessions {
    trees: IndexMap<SessionId, CommentTree>,
    capacity: usize,
}

impl Sessions {
    pub fn new(capacity: usize) -> Self {
        Sessions {
            trees: IndexMap::new(),
            capacity: capacity.max(1),
        }
    }

    /// Start an empty comment tree for the post `post_id`.
    pub fn open(&mut self, post_id: &str) -> SessionId {
        while self.trees.len() >= self.capacity {
            if let Some((evicted, tree)) = self.trees.shift_remove_index(0) {
                debug!(session = %evicted, post = tree.post_id(), "Evicting oldest comment session");
            }
        }

        let mut id = SessionId::random();
        while self.trees.contains_key(&id) {
            id = SessionId::random();
        }
        self.trees.insert(id, CommentTree::new(post_id));
        id
    }

    pub fn get(&self, id: SessionId) -> Option<&CommentTree> {
        self.trees.get(&id)
    }

    pub fn get_mut(&mut self, id: SessionId) -> Option<&mut CommentTree> {
        self.trees.get_mut(&id)
    }

    /// Discard a session and its comments. Returns whether it was open.
    pub fn close(&mut self, id: SessionId) -> bool {
        self.trees.shift_remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}
