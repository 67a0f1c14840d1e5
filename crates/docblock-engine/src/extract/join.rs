use super::fence::PreservedRegion;

/// Re-joins one-line-per-comment text into paragraph-separated markdown.
///
/// Lines are separated by a blank line, except inside a fenced code region or
/// a directive block, where a single newline keeps the region intact. Any
/// fence or directive marker toggles the same region flag. No separator
/// follows the last line.
pub fn graceful_join_markdown<S: AsRef<str>>(lines: &[S]) -> String {
    let mut inside_region = false;
    let mut text = String::new();

    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if PreservedRegion::sig(line).is_some() {
            inside_region = !inside_region;
        }
        text.push_str(line);
        if i == lines.len() - 1 {
            break;
        }
        text.push_str(if inside_region { "\n" } else { "\n\n" });
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::empty(&[], "")]
    #[case::single(&["only"], "only")]
    #[case::paragraphs(&["a", "b"], "a\n\nb")]
    #[case::fence(&["```", "code1", "code2", "```"], "```\ncode1\ncode2\n```")]
    #[case::directive(&[":::tip", "careful", ":::"], ":::tip\ncareful\n:::")]
    fn test_graceful_join(#[case] lines: &[&str], #[case] expected: &str) {
        assert_eq!(graceful_join_markdown(lines), expected);
    }

    #[test]
    fn test_text_around_fence_gets_blank_lines() {
        let lines = ["Intro", "```toml", "a = 1", "```", "Outro"];
        insta::assert_snapshot!(graceful_join_markdown(&lines), @r"
        Intro

        ```toml
        a = 1
        ```

        Outro
        ");
    }

    #[test]
    fn test_unclosed_fence_stays_tight() {
        let lines = ["```", "x", "y"];
        assert_eq!(graceful_join_markdown(&lines), "```\nx\ny");
    }
}
