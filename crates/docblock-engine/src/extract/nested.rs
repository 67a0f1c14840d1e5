use crate::models::ChannelValues;

use super::channels::{COMMENT_MARKER, ChannelRegistry};

/// Collect the comment lines of the first block whose opening line starts
/// with `starts_with` and ends with `{`, following nested `{ ... }` regions to
/// the true end of the block.
///
/// Depth counts the opener itself. Every later line ending in `{` opens a
/// level, comments included, and only a line that is exactly `}` closes one.
/// Scanning stops when the depth returns to zero. Returned lines are trimmed.
pub fn block_comment_lines<'a>(starts_with: &str, text: &'a str) -> Vec<&'a str> {
    let mut lines = Vec::new();
    let mut depth: Option<usize> = None;

    for line in text.split('\n').map(str::trim) {
        let Some(current) = depth else {
            if line.starts_with(starts_with) && line.ends_with('{') {
                depth = Some(1);
            }
            continue;
        };

        let mut next = current;
        if line.ends_with('{') {
            next += 1;
        }
        if line.starts_with(COMMENT_MARKER) {
            lines.push(line);
        }
        if line == "}" {
            next -= 1;
            if next == 0 {
                break;
            }
        }
        depth = Some(next);
    }

    lines
}

/// Merge collected comment lines per channel by newline concatenation.
///
/// Unlike [`super::segment_lines`] there are no records here: each channel
/// receives one value for the whole block and renderers are not applied.
pub fn merge_comments<S: AsRef<str>>(lines: &[S], registry: &ChannelRegistry) -> ChannelValues {
    let mut values = ChannelValues::default();
    for line in lines {
        if let Some((key, content)) = registry.classify(line.as_ref()) {
            values.append(key, content);
        }
    }
    values
}
