macro_rules! v1_path {
    ($path:literal) => {
        concat!("/api/v1", $path)
    };
}

/// Versioned API route definitions shared across Dvrex services
pub mod v1 {
    pub const ROOT: &str = "/api/v1";
    pub const VERSION: &str = "v1";

    pub mod dvr {
        pub const RECORDINGS: &str = v1_path!("/dvr/recordings");
        pub const RECORDING_ITEM: &str = v1_path!("/dvr/recordings/{id}");
        pub const RECORDING_STREAM: &str =
            v1_path!("/dvr/recordings/{id}/stream");
        pub const RECORDING_PROGRESS: &str =
            v1_path!("/dvr/recordings/{id}/progress");
    }

    pub mod watch {
        pub const SESSION_START: &str = v1_path!("/watch/sessions");
        pub const SESSION_END: &str =
            v1_path!("/watch/sessions/current/end");
    }
}

/// Helper utilities for working with route templates
pub mod utils {
    /// Replace a single path parameter (e.g. `"{id}"`) with the provided value.
    pub fn replace_param(
        route: &str,
        param: &str,
        value: impl AsRef<str>,
    ) -> String {
        route.replace(param, value.as_ref())
    }

    /// Append query parameters to the provided route.
    pub fn with_query(route: &str, params: &[(&str, &str)]) -> String {
        if params.is_empty() {
            return route.to_string();
        }

        let mut path =
            String::with_capacity(route.len() + 1 + params.len() * 8);
        path.push_str(route);
        path.push('?');

        for (i, (key, value)) in params.iter().enumerate() {
            if i > 0 {
                path.push('&');
            }
            path.push_str(key);
            path.push('=');
            path.push_str(value);
        }

        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_param_expands_recording_routes() {
        let path = utils::replace_param(
            v1::dvr::RECORDING_STREAM,
            "{id}",
            "0198c6c2-7a70-7aa6-b7a4-4a77f6d5cdda",
        );
        assert_eq!(
            path,
            "/api/v1/dvr/recordings/0198c6c2-7a70-7aa6-b7a4-4a77f6d5cdda/stream"
        );
    }

    #[test]
    fn test_with_query_appends_pairs() {
        let path = utils::with_query(v1::dvr::RECORDINGS, &[("status", "completed")]);
        assert_eq!(path, "/api/v1/dvr/recordings?status=completed");
    }
}
