use super::*;

/// The blog index, showing the posts filed under `selected`.
pub fn blog(catalog: &Catalog, selected: &str) -> Markup {
    let posts: Vec<_> = catalog.list(Some(selected)).collect();

    let body = html! {
        section.intro {
            h1 { "Blog Posts" }
            p { "Discover all our articles about web development and programming" }
        }
        nav #category-filter {
            @for category in catalog.categories() {
                @if category == ALL_CATEGORIES {
                    a.selected[selected == category] href="/blog" { (category) }
                } @else {
                    a.selected[selected == category] href=(category_href(category)) { (category) }
                }
            }
        }
        @if posts.is_empty() {
            p.no-posts { "No posts found in this category." }
        }
        .post-grid {
            @for post in &posts {
                (wrappers::post_card(post))
            }
        }
    };

    wrappers::universal(body, None, "Blog")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_marks_selected_category() {
        let catalog = Catalog::embedded().unwrap();
        let page = blog(&catalog, "React").into_string();
        assert!(page.contains(r#"href="/blog?category=React""#));
        assert_eq!(page.matches("selected").count(), 1);
        assert!(page.contains("/blog/mastering-react-hooks"));
        assert!(!page.contains("/blog/getting-started-with-nextjs"));
    }

    #[test]
    fn filter_links_encode_reserved_characters() {
        let catalog = Catalog::from_json(
            r#"[{
                "slug": "generics",
                "title": "Generics",
                "preview": "Templates and traits",
                "content": "<p>Generics</p>",
                "category": "C++ & Rust",
                "read_time": "4 min read",
                "date": "2024-03-18",
                "author": "Jane Smith"
            }]"#,
        )
        .unwrap();

        let page = blog(&catalog, "C++ & Rust").into_string();
        assert!(page.contains(r#"href="/blog?category=C%2B%2B+%26+Rust""#));
        assert!(page.contains("/blog/generics"));
        assert_eq!(page.matches("selected").count(), 1);
    }

    #[test]
    fn unknown_category_shows_no_posts() {
        let catalog = Catalog::embedded().unwrap();
        let page = blog(&catalog, "Cooking").into_string();
        assert!(page.contains("No posts found in this category."));
    }
}
