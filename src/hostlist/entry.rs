//! One line of a host list.

/// Prefix added to the comment of a disabled entry.
pub const DISABLED_TAG: &str = "[DOWN]";

/// A parsed host list line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// Host identifier, never empty.
    pub host: String,
    /// Trailing comment; carries [`DISABLED_TAG`] for disabled entries.
    pub comment: Option<String>,
    /// Line was prefixed with `#` directly followed by the host.
    pub disabled: bool,
}

/// Parse one line.
///
/// `#host` (no space) disables an entry; `# text` is a plain comment line.
/// The host is the first word before the first unescaped `#`, everything
/// after it is the comment. `\#` and `\\` unescape to `#` and `\` in both
/// parts. Lines without a host yield `None`.
pub fn parse_line(line: &str) -> Option<ListEntry> {
    let line = line.trim();

    let (disabled, body) = match line.strip_prefix('#') {
        Some(rest) if rest.starts_with(|c: char| !c.is_whitespace() && c != '#') => (true, rest),
        Some(_) => return None,
        None => (false, line),
    };

    let (host_part, comment) = split_comment(body);

    let host = host_part.split_whitespace().next()?.to_string();
    let comment = comment
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    let comment = if disabled {
        Some(match comment {
            Some(text) => format!("{DISABLED_TAG} {text}"),
            None => DISABLED_TAG.to_string(),
        })
    } else {
        comment
    };

    Some(ListEntry {
        host,
        comment,
        disabled,
    })
}

/// Split at the first unescaped `#`, unescaping both halves.
fn split_comment(body: &str) -> (String, Option<String>) {
    let mut host = String::new();
    let mut comment: Option<String> = None;
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c == '#' && comment.is_none() {
            comment = Some(String::new());
            continue;
        }
        let out = match comment.as_mut() {
            Some(text) => text,
            None => &mut host,
        };
        match c {
            '\\' => match chars.next() {
                Some(escaped @ ('#' | '\\')) => out.push(escaped),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            },
            _ => out.push(c),
        }
    }

    (host, comment)
}
