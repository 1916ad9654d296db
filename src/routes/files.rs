use super::*;

/// Scripts served under `/script/`.
static SCRIPTS: &[(&str, &str)] = &[("post.js", include_str!("../../static/scripts/post.js"))];

/// Stylesheets served under `/style/`.
static STYLES: &[(&str, &str)] = &[("site.css", include_str!("../../static/styles/site.css"))];

pub async fn script(ReqPath(file_name): ReqPath<String>) -> Result<Response> {
    static_file(SCRIPTS, file_name, "text/javascript")
}

pub async fn style(ReqPath(file_name): ReqPath<String>) -> Result<Response> {
    static_file(STYLES, file_name, "text/css")
}

fn static_file(
    files: &[(&str, &'static str)],
    file_name: String,
    content_type: &'static str,
) -> Result<Response> {
    let Some(&(_, content)) = files.iter().find(|(name, _)| *name == file_name) else {
        return Err(Error::UnknownAsset(file_name));
    };

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        content,
    )
        .into_response())
}
