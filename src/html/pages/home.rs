use super::*;

/// Number of posts featured under "Latest Articles".
const LATEST_COUNT: usize = 3;

pub fn home(catalog: &Catalog) -> Markup {
    let body = html! {
        section #hero {
            p.welcome { "Welcome to " (SITE_NAME) }
            h1 {
                span { "Discover the Art of" }
                br;
                span.accent { "Modern Development" }
            }
            p {
                "Explore the latest insights, tutorials, and best practices in web development. "
                "Join our community of developers and level up your skills."
            }
            .actions {
                a.primary href="/blog" { "Start Reading →" }
                a.secondary href="#latest-posts" { "Latest Posts" }
            }
        }
        section #categories {
            h2 { "Popular Categories" }
            .category-grid {
                @for (category, count) in catalog.category_counts() {
                    a.category href=(category_href(category)) {
                        h3 { (category) }
                        p {
                            (count)
                            @if count == 1 { " article" } @else { " articles" }
                        }
                    }
                }
            }
        }
        section #latest-posts {
            h2 { "Latest Articles" }
            .post-grid {
                @for post in catalog.latest(LATEST_COUNT) {
                    (wrappers::post_card(&post))
                }
            }
            a.view-all href="/blog" { "View All Posts →" }
        }
    };

    wrappers::universal(body, None, "Home")
}
