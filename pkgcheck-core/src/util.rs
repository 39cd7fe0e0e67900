/// Join a base URL and a file path with exactly one `/` between them.
///
/// Trailing slashes are stripped from `url` and leading slashes from `file`,
/// so `"http://x/"` + `"/f.zip"` and `"http://x"` + `"f.zip"` both give
/// `"http://x/f.zip"`.
pub fn combine_url_and_file(url: &str, file: &str) -> String {
    format!(
        "{}/{}",
        url.trim_end_matches('/'),
        file.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_url_and_file() {
        assert_eq!(combine_url_and_file("http://x/", "/f.zip"), "http://x/f.zip");
        assert_eq!(combine_url_and_file("http://x", "f.zip"), "http://x/f.zip");
        assert_eq!(combine_url_and_file("http://x", "/f.zip"), "http://x/f.zip");
        assert_eq!(combine_url_and_file("http://x/", "f.zip"), "http://x/f.zip");
    }

    #[test]
    fn test_combine_collapses_repeated_slashes() {
        assert_eq!(
            combine_url_and_file("https://host.example/files///", "//patch.zip"),
            "https://host.example/files/patch.zip"
        );
    }

    #[test]
    fn test_combine_keeps_inner_path() {
        assert_eq!(
            combine_url_and_file(
                "https://github.com/owner/repo/releases/download/v1.2/",
                "dir/game.tar.xz"
            ),
            "https://github.com/owner/repo/releases/download/v1.2/dir/game.tar.xz"
        );
    }
}
