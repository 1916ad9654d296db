use maud::DOCTYPE;

use super::*;

/// Navigation bar, page body and footer shared by every page.
pub(super) fn standard(body: Markup) -> Markup {
    html! {
        nav #topnav {
            a.brand href="/" { (SITE_NAME) }
            .links {
                a href="/" { "Home" }
                a href="/blog" { "Blog" }
            }
        }
        main {
            (body)
        }
        footer {
            p { "© " (chrono::Utc::now().format("%Y").to_string()) " " (SITE_NAME) }
        }
    }
}

/// The document skeleton. Pages that need client-side behavior name their
/// script; it is served from `/script/<name>.js`.
pub(super) fn universal(body: Markup, script: Option<&'static str>, title: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en-us" {
            head {
                meta charset="utf-8";
                title { (SITE_NAME) " | " (title) }
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                link type="text/css" rel="stylesheet" href="/style/site.css";
            }
            body {
                (standard(body))
                @if let Some(script) = script {
                    script type="module" src={"/script/" (script) ".js"} {}
                }
            }
        }
    }
}

/// A card linking to a post, used by the home page and the blog index.
pub(super) fn post_card(post: &Post) -> Markup {
    html! {
        article.post-card {
            .meta {
                span.category { (post.category()) }
                span.read-time { (post.read_time()) }
            }
            h3 {
                a href=(post_href(post.slug())) { (post.title()) }
            }
            p.preview { (post.preview()) }
            .footer {
                time datetime=(post.date().to_string()) { (post.date_long()) }
                a.read-more href=(post_href(post.slug())) { "Read more →" }
            }
        }
    }
}
