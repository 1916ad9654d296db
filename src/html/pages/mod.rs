use super::*;

pub mod blog;
pub mod home;
pub mod post;

/// Shown for any path the site does not serve, and for failed requests.
pub fn error(status: u16, message: &str) -> Markup {
    let title = if status == 404 { "Not found" } else { "Error" };

    let body = html! {
        section.error {
            h1 { (status) }
            p { (message) }
            a href="/" { "Return home" }
        }
    };

    wrappers::universal(body, None, title)
}
