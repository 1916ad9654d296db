use super::*;

#[derive(Deserialize)]
pub struct CommentBody {
    #[serde(default)]
    content: String,
}

fn session_id(session: &str) -> Result<SessionId> {
    session
        .parse()
        .map_err(|_| Error::SessionNotFound(session.to_owned()))
}

fn tree_mut<'a>(
    sessions: &'a mut Sessions,
    session: &str,
) -> Result<(SessionId, &'a mut CommentTree)> {
    let id = session_id(session)?;
    let tree = sessions
        .get_mut(id)
        .ok_or_else(|| Error::SessionNotFound(session.to_owned()))?;
    Ok((id, tree))
}

/// A comment id that does not parse cannot name a comment in any tree; it is
/// treated like an id that is simply absent.
fn comment_id(comment: &str) -> Option<CommentId> {
    comment.parse().ok()
}

/// The comment section as it currently stands.
pub async fn section(
    State(state): State<AppState>,
    ReqPath(session): ReqPath<String>,
) -> Result<Markup> {
    let mut sessions = state.sessions.lock().await;
    let (id, tree) = tree_mut(&mut sessions, &session)?;
    Ok(html::components::comments(id, tree, &viewer()))
}

pub async fn add(
    State(state): State<AppState>,
    ReqPath(session): ReqPath<String>,
    Form(body): Form<CommentBody>,
) -> Result<Markup> {
    if state.reject_blank_comments && body.content.trim().is_empty() {
        return Err(Error::BlankComment);
    }

    let mut sessions = state.sessions.lock().await;
    let (id, tree) = tree_mut(&mut sessions, &session)?;
    let post_id = tree.post_id().to_owned();
    let comment = tree.add(body.content, viewer(), post_id);
    debug!(session = %id, comment = %comment.id, "Added comment");

    Ok(html::components::comments(id, tree, &viewer()))
}

/// Replies are refused when blank, matching the disabled reply button.
pub async fn reply(
    State(state): State<AppState>,
    ReqPath((session, parent)): ReqPath<(String, String)>,
    Form(body): Form<CommentBody>,
) -> Result<Markup> {
    if body.content.trim().is_empty() {
        return Err(Error::BlankComment);
    }

    let mut sessions = state.sessions.lock().await;
    let (id, tree) = tree_mut(&mut sessions, &session)?;
    match comment_id(&parent) {
        Some(parent) => match tree.reply(parent, body.content, viewer()) {
            Ok(reply) => debug!(session = %id, comment = %reply.id, "Added reply"),
            Err(e) => debug!(session = %id, error = %e, "Ignoring reply"),
        },
        None => debug!(session = %id, %parent, "Ignoring reply to malformed id"),
    }

    Ok(html::components::comments(id, tree, &viewer()))
}

pub async fn like(
    State(state): State<AppState>,
    ReqPath((session, comment)): ReqPath<(String, String)>,
) -> Result<Markup> {
    let mut sessions = state.sessions.lock().await;
    let (id, tree) = tree_mut(&mut sessions, &session)?;
    match comment_id(&comment) {
        Some(comment) => match tree.toggle_like(comment) {
            Ok(c) => debug!(session = %id, comment = %c.id, liked = c.liked, "Toggled like"),
            Err(e) => debug!(session = %id, error = %e, "Ignoring like"),
        },
        None => debug!(session = %id, %comment, "Ignoring like of malformed id"),
    }

    Ok(html::components::comments(id, tree, &viewer()))
}

/// Only the comment's author may delete it. Anyone else gets the section
/// back unchanged.
pub async fn delete(
    State(state): State<AppState>,
    ReqPath((session, comment)): ReqPath<(String, String)>,
) -> Result<Markup> {
    let viewer = viewer();
    let mut sessions = state.sessions.lock().await;
    let (id, tree) = tree_mut(&mut sessions, &session)?;

    let authored = comment_id(&comment)
        .and_then(|comment| tree.get(comment))
        .filter(|c| c.author.id == viewer.id)
        .map(|c| c.id);
    match authored {
        Some(comment) => {
            let removed = tree.delete(comment);
            debug!(session = %id, %comment, removed, "Deleted comment");
        }
        None => debug!(session = %id, %comment, "Ignoring delete"),
    }

    Ok(html::components::comments(id, tree, &viewer))
}

/// The reader left the page; its comments go with it.
pub async fn close(
    State(state): State<AppState>,
    ReqPath(session): ReqPath<String>,
) -> Result<StatusCode> {
    let id = session_id(&session)?;
    let mut sessions = state.sessions.lock().await;
    if !sessions.close(id) {
        return Err(Error::SessionNotFound(session));
    }
    debug!(session = %id, open = sessions.len(), "Closed comment session");

    Ok(StatusCode::NO_CONTENT)
}
