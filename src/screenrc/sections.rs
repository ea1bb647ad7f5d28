use std::sync::LazyLock;

use regex::Regex;

pub const BEGIN_MARKER: &str = "## BEGIN GENERATED CONFIG ##";
pub const END_MARKER: &str = "## END GENERATED CONFIG ##";

static WINDOW_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^screen.*\s(\d+)$").expect("window pattern is valid"));

/// An existing screen config split around the generated block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    /// Lines before the begin marker (everything, if there is none).
    pub top: Vec<String>,
    /// Lines after the end marker.
    pub bottom: Vec<String>,
    /// Highest window number used outside the generated block.
    pub highest_window: u32,
}

/// Split `content`. Lines between the markers are dropped; a begin marker
/// without an end marker drops the rest of the file.
pub fn split_sections(content: &str) -> Sections {
    let mut sections = Sections::default();
    let mut seen_begin = false;
    let mut seen_end = false;

    for line in content.lines() {
        if line.contains(BEGIN_MARKER) {
            seen_begin = true;
            continue;
        }
        if line.contains(END_MARKER) {
            seen_end = true;
            continue;
        }
        if seen_begin && !seen_end {
            continue;
        }

        if let Some(num) = WINDOW_LINE
            .captures(line)
            .and_then(|caps| caps[1].parse::<u32>().ok())
        {
            sections.highest_window = sections.highest_window.max(num);
        }

        if seen_end {
            sections.bottom.push(line.to_string());
        } else {
            sections.top.push(line.to_string());
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_around_markers() {
        let content = "startup_message off\nscreen -t top 3\n## BEGIN GENERATED CONFIG ##\nscreen -t old 40\n## END GENERATED CONFIG ##\nscreen -t tail 7\n";
        let s = split_sections(content);
        assert_eq!(s.top, vec!["startup_message off", "screen -t top 3"]);
        assert_eq!(s.bottom, vec!["screen -t tail 7"]);
        // the old generated window does not count
        assert_eq!(s.highest_window, 7);
    }

    #[test]
    fn no_markers_keeps_everything_on_top() {
        let s = split_sections("a\nb\n");
        assert_eq!(s.top, vec!["a", "b"]);
        assert!(s.bottom.is_empty());
        assert_eq!(s.highest_window, 0);
    }

    #[test]
    fn unterminated_block_drops_the_rest() {
        let s = split_sections("a\n## BEGIN GENERATED CONFIG ##\nscreen 99\nb\n");
        assert_eq!(s.top, vec!["a"]);
        assert!(s.bottom.is_empty());
        assert_eq!(s.highest_window, 0);
    }
}
