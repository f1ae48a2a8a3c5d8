use url::Url;

/// Extract the video id from a YouTube URL.
///
/// Long-form hosts (`youtube.com`) carry the id in the `v` query parameter;
/// short-link hosts (`youtu.be`) carry it as the first path segment. Anything
/// else is not a YouTube URL. The id is not validated beyond being non-empty;
/// whether the video exists is discovered at transcript fetch time.
pub fn extract_video_id(youtube_url: &str) -> Option<String> {
    let parsed = Url::parse(youtube_url).ok()?;
    let host = parsed.host_str()?;

    if host.contains("youtube.com") {
        return parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
            .filter(|id| !id.is_empty());
    }

    if host.contains("youtu.be") {
        let id = parsed
            .path()
            .trim_start_matches('/')
            .split('/')
            .next()
            .unwrap_or_default();
        if !id.is_empty() {
            return Some(id.to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=120"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_watch_url_bare_host() {
        assert_eq!(
            extract_video_id("https://youtube.com/watch?v=abc123"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_watch_url_missing_v_param() {
        assert_eq!(extract_video_id("https://www.youtube.com/watch?t=120"), None);
    }

    #[test]
    fn test_watch_url_empty_v_param() {
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v="), None);
    }

    #[test]
    fn test_short_url() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_short_url_with_query() {
        assert_eq!(
            extract_video_id("https://youtu.be/abc123?t=30"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_short_url_empty_path() {
        assert_eq!(extract_video_id("https://youtu.be/"), None);
    }

    #[test]
    fn test_unrecognized_host() {
        assert_eq!(extract_video_id("https://notyoutube.com/x"), None);
    }

    #[test]
    fn test_not_a_url() {
        assert_eq!(extract_video_id("not a url at all"), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_video_id(""), None);
    }
}
