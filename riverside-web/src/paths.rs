//! URLs that respect the deployment base path.
///
/// `PUBLIC_URL` is read at compile time (for example `/library` when the app is
/// served from a subdirectory). Without it, paths are anchored at the root.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Catalog images are usually absolute URLs; anything else is a bundled asset.
#[must_use]
pub fn image_src(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") || url.starts_with("data:") {
        url.to_string()
    } else {
        asset_path(url)
    }
}

/// Base path for the router, `None` when served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_anchored_without_base() {
        assert_eq!(asset_path("static/img/logo.svg"), "/static/img/logo.svg");
        assert_eq!(asset_path("/static/img/logo.svg"), "/static/img/logo.svg");
    }

    #[test]
    fn prefixed_with_public_base() {
        assert_eq!(
            asset_path_with_base("static/img/logo.svg", "/library/"),
            "/library/static/img/logo.svg"
        );
        assert_eq!(router_base_with_base("/library/"), Some("/library".into()));
        assert_eq!(router_base_with_base("  "), None);
        assert_eq!(router_base(), None);
    }

    #[test]
    fn remote_images_pass_through() {
        let cover = "https://covers.openlibrary.org/b/id/8247200-L.jpg";
        assert_eq!(image_src(cover), cover);
        assert_eq!(image_src("static/img/logo.svg"), "/static/img/logo.svg");
    }
}
