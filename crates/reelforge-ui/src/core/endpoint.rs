//! Backend endpoint resolution for dev-proxy and deployed modes.
//!
//! # Design
//! - The base address is read once at boot and injected here immutably;
//!   nothing in this module touches the environment at call time.
//! - Resolution is a pure function of (base, path). One [`ApiBase`] can be
//!   shared by any number of callers without coordination.

/// Immutable backend base address, normalized at construction.
///
/// An empty base means relative addressing: the development proxy owns the
/// mapping of `/api/*` and `/files/*` to a real origin. A non-empty base is
/// an absolute origin URL with trailing slashes stripped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiBase {
    base: String,
}

impl ApiBase {
    /// Build a base address from raw configuration, stripping any trailing
    /// slashes so the join point always carries exactly one `/`.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            base: raw.into().trim_end_matches('/').to_string(),
        }
    }

    /// Whether a remote base is configured (deployed mode).
    #[must_use]
    pub fn is_remote(&self) -> bool {
        !self.base.is_empty()
    }

    /// Map a logical resource path to the URL the client should request.
    ///
    /// Empty input is returned unchanged. Every other path is normalized to
    /// start with `/`. Without a configured base the normalized path is
    /// returned as-is and the dev proxy takes it from there. With a base, the
    /// client-side `/api/` routing prefix is stripped down to its leading
    /// slash before concatenation; `/files/*` and everything else (including
    /// a bare `/api`) concatenate verbatim.
    #[must_use]
    pub fn resolve(&self, path: &str) -> String {
        if path.is_empty() {
            return String::new();
        }
        let normalized = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        if self.base.is_empty() {
            return normalized;
        }
        normalized.strip_prefix("/api/").map_or_else(
            || format!("{}{normalized}", self.base),
            |rest| format!("{}/{rest}", self.base),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::ApiBase;

    fn remote() -> ApiBase {
        ApiBase::new("https://backend.example.com")
    }

    #[test]
    fn empty_path_passes_through() {
        assert_eq!(ApiBase::default().resolve(""), "");
        assert_eq!(remote().resolve(""), "");
    }

    #[test]
    fn relative_mode_returns_normalized_path() {
        let base = ApiBase::new("");
        assert_eq!(base.resolve("api/widgets"), "/api/widgets");
        assert_eq!(base.resolve("/files/a.png"), "/files/a.png");
        assert!(!base.is_remote());
    }

    #[test]
    fn remote_mode_strips_api_prefix() {
        assert_eq!(
            remote().resolve("/api/widgets"),
            "https://backend.example.com/widgets"
        );
        assert_eq!(
            remote().resolve("api/pipeline/suggest"),
            "https://backend.example.com/pipeline/suggest"
        );
    }

    #[test]
    fn remote_mode_keeps_file_paths_verbatim() {
        assert_eq!(
            remote().resolve("/files/a.png"),
            "https://backend.example.com/files/a.png"
        );
    }

    #[test]
    fn bare_api_is_not_rewritten() {
        assert_eq!(remote().resolve("/api"), "https://backend.example.com/api");
    }

    #[test]
    fn trailing_slash_on_base_is_stripped() {
        let slashed = ApiBase::new("https://backend.example.com/");
        assert_eq!(slashed, remote());
        assert_eq!(
            slashed.resolve("/api/widgets"),
            "https://backend.example.com/widgets"
        );
        assert_eq!(
            slashed.resolve("/files/a.png"),
            "https://backend.example.com/files/a.png"
        );
    }

    #[test]
    fn resolution_is_referentially_transparent() {
        let base = remote();
        assert_eq!(base.resolve("/api/health"), base.resolve("/api/health"));
    }
}
