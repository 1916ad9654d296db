use folio::config::Config;
use folio::data::Catalog;
use folio::AppState;
use reqwest::{redirect, Client, StatusCode};
use tokio::net::TcpListener;

struct Site {
    base: String,
    client: Client,
}

impl Site {
    async fn spawn(config: Config) -> Site {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let app = folio::app(AppState::new(Catalog::embedded().unwrap(), &config));
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        let client = Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .unwrap();
        Site {
            base: format!("http://{address}"),
            client,
        }
    }

    async fn get(&self, path: &str) -> (StatusCode, String) {
        let response = self
            .client
            .get(format!("{}{path}", self.base))
            .send()
            .await
            .unwrap();
        (response.status(), response.text().await.unwrap())
    }

    async fn post(&self, path: &str, content: Option<&str>) -> (StatusCode, String) {
        let mut request = self.client.post(format!("{}{path}", self.base));
        if let Some(content) = content {
            request = request.form(&[("content", content)]);
        }
        let response = request.send().await.unwrap();
        (response.status(), response.text().await.unwrap())
    }

    async fn delete(&self, path: &str) -> (StatusCode, String) {
        let response = self
            .client
            .delete(format!("{}{path}", self.base))
            .send()
            .await
            .unwrap();
        (response.status(), response.text().await.unwrap())
    }

    /// Load a post page and return the comment session it opened.
    async fn open(&self, slug: &str) -> String {
        let (status, page) = self.get(&format!("/blog/{slug}")).await;
        assert_eq!(status, StatusCode::OK);
        attribute(&page, "data-session").remove(0)
    }
}

/// Every value of `name="..."` in the page, in document order.
fn attribute(page: &str, name: &str) -> Vec<String> {
    let needle = format!(r#"{name}=""#);
    page.match_indices(&needle)
        .map(|(start, _)| {
            let rest = &page[start + needle.len()..];
            rest[..rest.find('"').unwrap()].to_owned()
        })
        .collect()
}

#[tokio::test]
async fn home_and_blog_pages() {
    let site = Site::spawn(Config::default()).await;

    let (status, home) = site.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(home.contains("Latest Articles"));
    assert!(home.contains("/blog/web-development-best-practices"));

    let (status, blog) = site.get("/blog?category=Next.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(blog.contains("/blog/getting-started-with-nextjs"));
    assert!(!blog.contains("/blog/mastering-react-hooks"));

    let filter = attribute(&home, "href")
        .into_iter()
        .find(|href| href.starts_with("/blog?category=Web"))
        .unwrap();
    assert_eq!(filter, "/blog?category=Web+Development");
    let (status, blog) = site.get(&filter).await;
    assert_eq!(status, StatusCode::OK);
    assert!(blog.contains("/blog/web-development-best-practices"));
    assert!(!blog.contains("/blog/getting-started-with-nextjs"));

    let (_, all) = site.get("/blog").await;
    let first = all.find("/blog/getting-started-with-nextjs").unwrap();
    let second = all.find("/blog/mastering-react-hooks").unwrap();
    let third = all.find("/blog/web-development-best-practices").unwrap();
    assert!(first < second && second < third);
}

#[tokio::test]
async fn unknown_post_redirects_home() {
    let site = Site::spawn(Config::default()).await;
    let response = site
        .client
        .get(format!("{}/blog/no-such-post", site.base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let site = Site::spawn(Config::default()).await;
    let (status, page) = site.get("/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(page.contains("does not exist"));

    let (status, _) = site.get("/script/missing.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn comment_thread_through_http() {
    let site = Site::spawn(Config::default()).await;
    let session = site.open("mastering-react-hooks").await;
    let comments = format!("/session/{session}/comments");

    let (status, section) = site.post(&comments, Some("first <b>post</b>")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(section.contains("1 Comment<"));
    assert!(section.contains("first &lt;b&gt;post&lt;/b&gt;"));
    let parent = attribute(&section, "data-comment").remove(0);

    let (_, section) = site
        .post(&format!("{comments}/{parent}/replies"), Some("a reply"))
        .await;
    assert!(section.contains("2 Comments"));
    assert!(section.contains("Replying to "));
    let reply = attribute(&section, "data-comment").remove(1);

    let (_, section) = site.post(&format!("{comments}/{reply}/like"), None).await;
    assert!(section.contains(r#"<span class="likes">1</span>"#));
    let (_, section) = site.post(&format!("{comments}/{reply}/like"), None).await;
    assert!(section.contains(r#"<span class="likes">0</span>"#));

    let (status, section) = site.delete(&format!("{comments}/{parent}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(section.contains("0 Comments"));
}

#[tokio::test]
async fn unknown_comment_is_a_no_op() {
    let site = Site::spawn(Config::default()).await;
    let session = site.open("mastering-react-hooks").await;
    let comments = format!("/session/{session}/comments");
    site.post(&comments, Some("hello")).await;

    let (status, section) = site.post(&format!("{comments}/42/like"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(section.contains("1 Comment<"));

    let (status, section) = site.delete(&format!("{comments}/not-an-id")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(section.contains("1 Comment<"));
}

#[tokio::test]
async fn blank_comments() {
    let site = Site::spawn(Config::default()).await;
    let session = site.open("mastering-react-hooks").await;
    let comments = format!("/session/{session}/comments");

    let (status, section) = site.post(&comments, Some("")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(section.contains("1 Comment<"));
    let parent = attribute(&section, "data-comment").remove(0);

    let (status, _) = site
        .post(&format!("{comments}/{parent}/replies"), Some("   "))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let strict = Site::spawn(Config {
        reject_blank_comments: true,
        ..Config::default()
    })
    .await;
    let session = strict.open("mastering-react-hooks").await;
    let (status, _) = strict
        .post(&format!("/session/{session}/comments"), Some("  "))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn reload_starts_a_fresh_discussion() {
    let site = Site::spawn(Config::default()).await;
    let first = site.open("mastering-react-hooks").await;
    site.post(&format!("/session/{first}/comments"), Some("hi"))
        .await;

    let second = site.open("mastering-react-hooks").await;
    assert_ne!(first, second);
    let (_, section) = site.get(&format!("/session/{second}/comments")).await;
    assert!(section.contains("0 Comments"));

    let (status, _) = site.delete(&format!("/session/{first}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = site.get(&format!("/session/{first}/comments")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
