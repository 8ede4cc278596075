//! Helpers for constructing URLs that respect the deployment base path.

/// Build a URL for a static asset.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/site` when hosted under
/// a subdirectory), generated URLs are prefixed accordingly. Local builds
/// without `PUBLIC_URL` fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Resolve a catalog image reference. The backend mixes site-relative paths
/// with absolute CDN URLs; absolute references pass through untouched.
#[must_use]
pub fn image_url(reference: &str) -> String {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        reference.to_string()
    } else {
        asset_path(reference)
    }
}

/// Base path for the router.
///
/// Returns `None` when no base path is configured so the router falls back to root.
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
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{asset_path, image_url, router_base};

    #[test]
    fn builds_root_prefixed_path_when_base_missing() {
        assert_eq!(asset_path("cars/clio.jpg"), "/cars/clio.jpg");
        assert_eq!(asset_path("/cars/clio.jpg"), "/cars/clio.jpg");
    }

    #[test]
    fn builds_paths_with_public_base() {
        assert_eq!(
            super::asset_path_with_base("cars/clio.jpg", "/site"),
            "/site/cars/clio.jpg"
        );
        assert_eq!(
            super::asset_path_with_base("/cars/clio.jpg", "/site/"),
            "/site/cars/clio.jpg"
        );
    }

    #[test]
    fn absolute_image_references_pass_through() {
        let cdn = "https://images.example.com/q8.jpg?w=800";
        assert_eq!(image_url(cdn), cdn);
        assert_eq!(image_url("/cars/clio.jpg"), "/cars/clio.jpg");
    }

    #[test]
    fn router_base_is_none_by_default() {
        assert_eq!(router_base(), None);
    }

    #[test]
    fn router_base_returns_trimmed_value() {
        assert_eq!(
            super::router_base_with_base("/site/"),
            Some(String::from("/site"))
        );
    }
}
