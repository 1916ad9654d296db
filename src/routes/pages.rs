use super::*;

pub async fn home(State(state): State<AppState>) -> Markup {
    html::pages::home::home(&state.catalog)
}

#[derive(Deserialize)]
pub struct BlogQuery {
    category: Option<String>,
}

pub async fn blog(State(state): State<AppState>, Query(query): Query<BlogQuery>) -> Markup {
    let selected = query.category.as_deref().unwrap_or(ALL_CATEGORIES);
    html::pages::blog::blog(&state.catalog, selected)
}

/// Serve a post and open the comment session its page will use.
///
/// Readers asking for a post that does not exist are sent home.
pub async fn post(
    State(state): State<AppState>,
    ReqPath(slug): ReqPath<String>,
) -> Result<Markup, Redirect> {
    let post = match state.catalog.lookup(&slug) {
        Ok(post) => post,
        Err(e) => {
            info!(error = %e, "Redirecting home");
            return Err(Redirect::to("/"));
        }
    };

    let mut sessions = state.sessions.lock().await;
    let session = sessions.open(post.slug());
    debug!(%session, post = post.slug(), open = sessions.len(), "Opened comment session");

    let Some(tree) = sessions.get(session) else {
        return Err(Redirect::to("/"));
    };

    Ok(html::pages::post::post(&post, session, tree, &viewer()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_links_decode_to_their_category() {
        for category in ["React", "Web Development", "C++ & Rust", "100% #1"] {
            let uri: Uri = html::category_href(category).parse().unwrap();
            let Query(query) = Query::<BlogQuery>::try_from_uri(&uri).unwrap();
            assert_eq!(query.category.as_deref(), Some(category));
        }
    }
}
