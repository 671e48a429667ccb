//! Dot-segment removal (RFC 3986 §5.2.4).

/// Removes `.` and `..` segments from a path.
///
/// Operates on the path as written; percent-encoded dots (`%2E`) are not
/// treated as dots, so run [`normalize`](crate::normalize) first if they
/// should be.
pub fn remove_dot_segments(path: &str) -> String {
    let mut input = path;
    let mut output = String::with_capacity(path.len());

    while !input.is_empty() {
        if let Some(rest) = input
            .strip_prefix("../")
            .or_else(|| input.strip_prefix("./"))
        {
            // A: drop a leading "../" or "./"
            input = rest;
        } else if input.starts_with("/./") {
            // B: "/./" -> "/"
            input = &input[2..];
        } else if input == "/." {
            input = "/";
        } else if input.starts_with("/../") {
            // C: "/../" -> "/" and drop the last output segment
            input = &input[3..];
            pop_last_segment(&mut output);
        } else if input == "/.." {
            input = "/";
            pop_last_segment(&mut output);
        } else if input == "." || input == ".." {
            // D
            input = "";
        } else {
            // E: move the first segment, with its leading '/', to the output
            let start = usize::from(input.starts_with('/'));
            let end = input[start..]
                .find('/')
                .map_or(input.len(), |offset| start + offset);
            output.push_str(&input[..end]);
            input = &input[end..];
        }
    }

    output
}

fn pop_last_segment(output: &mut String) {
    match output.rfind('/') {
        Some(idx) => output.truncate(idx),
        None => output.clear(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc_examples() {
        assert_eq!(remove_dot_segments("/a/b/c/./../../g"), "/a/g");
        assert_eq!(remove_dot_segments("mid/content=5/../6"), "mid/6");
    }

    #[test]
    fn rfc_reference_resolution_paths() {
        // Merged paths from the RFC 3986 §5.4 examples with base "/b/c/d;p".
        let cases = [
            ("/b/c/g", "/b/c/g"),
            ("/b/c/./g", "/b/c/g"),
            ("/b/c/g/", "/b/c/g/"),
            ("/b/c/.", "/b/c/"),
            ("/b/c/./", "/b/c/"),
            ("/b/c/..", "/b/"),
            ("/b/c/../", "/b/"),
            ("/b/c/../g", "/b/g"),
            ("/b/c/../..", "/"),
            ("/b/c/../../", "/"),
            ("/b/c/../../g", "/g"),
            ("/b/c/../../../g", "/g"),
            ("/b/c/../../../../g", "/g"),
            ("/./g", "/g"),
            ("/../g", "/g"),
            ("/b/c/g.", "/b/c/g."),
            ("/b/c/.g", "/b/c/.g"),
            ("/b/c/g..", "/b/c/g.."),
            ("/b/c/..g", "/b/c/..g"),
            ("/b/c/./../g", "/b/g"),
            ("/b/c/./g/.", "/b/c/g/"),
            ("/b/c/g/./h", "/b/c/g/h"),
            ("/b/c/g/../h", "/b/c/h"),
        ];
        for (input, expected) in cases {
            assert_eq!(remove_dot_segments(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn relative_and_degenerate_paths() {
        assert_eq!(remove_dot_segments(""), "");
        assert_eq!(remove_dot_segments("."), "");
        assert_eq!(remove_dot_segments(".."), "");
        assert_eq!(remove_dot_segments("../a"), "a");
        assert_eq!(remove_dot_segments("./a/./b"), "a/b");
        assert_eq!(remove_dot_segments("a/.."), "/");
        assert_eq!(remove_dot_segments("/"), "/");
        assert_eq!(remove_dot_segments("//a"), "//a");
    }

    #[test]
    fn encoded_dots_are_not_segments() {
        assert_eq!(remove_dot_segments("/a/%2E%2E/b"), "/a/%2E%2E/b");
    }
}
