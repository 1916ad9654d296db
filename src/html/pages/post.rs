use super::*;

/// The full post page with an empty discussion bound to `session`.
pub fn post(post: &Post, session: SessionId, comments: &CommentTree, viewer: &Author) -> Markup {
    let body = html! {
        article #post {
            header {
                .meta {
                    span.category { (post.category()) }
                    span.read-time { (post.read_time()) }
                }
                h1 { (post.title()) }
                p.byline {
                    span.author { (post.author()) }
                    time datetime=(post.date().to_string()) { (post.date_long()) }
                }
            }
            (article(post))
            section #discussion data-session=(session.to_string()) {
                h2 { "Join the Discussion" }
                form #comment-form {
                    textarea name="content" placeholder="Write a comment..." {}
                    button type="submit" { "Submit" }
                }
                (components::comments(session, comments, viewer))
            }
        }
    };

    wrappers::universal(body, Some("post"), post.title())
}

/// The post body. Catalog content is trusted HTML and is emitted verbatim,
/// unlike anything a reader writes.
pub fn article(post: &Post) -> Markup {
    html! {
        .prose {
            (PreEscaped(post.content()))
        }
    }
}
