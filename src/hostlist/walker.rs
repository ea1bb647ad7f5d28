//! Cursor-driven walk over a named list.

use crate::hostlist::entry::ListEntry;
use crate::hostlist::store::NamedList;
use crate::hostlist::ListError;

/// Which entries `next` may hand out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkPolicy {
    /// Skip disabled entries as candidates. They still match the cursor.
    pub skip_disabled: bool,
}

impl WalkPolicy {
    fn eligible(&self, entry: &ListEntry) -> bool {
        !(self.skip_disabled && entry.disabled)
    }
}

/// Pick the entry after `cursor`, or the first one when there is no cursor.
///
/// Never wraps: stepping past the last entry is [`ListError::EndOfList`], and
/// a cursor naming no entry is [`ListError::StaleCursor`]. The caller saves
/// the returned host.
pub fn resolve_next<'a>(
    list: &'a NamedList,
    cursor: Option<&str>,
    policy: WalkPolicy,
) -> Result<&'a ListEntry, ListError> {
    let Some(last) = cursor else {
        return list
            .entries
            .iter()
            .find(|e| policy.eligible(e))
            .ok_or_else(|| ListError::Empty {
                name: list.name.clone(),
            });
    };

    let position = list
        .entries
        .iter()
        .position(|e| e.host == last)
        .ok_or_else(|| ListError::StaleCursor {
            name: list.name.clone(),
            host: last.to_string(),
        })?;

    list.entries[position + 1..]
        .iter()
        .find(|e| policy.eligible(e))
        .ok_or_else(|| ListError::EndOfList {
            name: list.name.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> NamedList {
        NamedList::parse("machines.test", "a\nb\nc\n")
    }

    #[test]
    fn no_cursor_starts_at_first() {
        let list = abc();
        let entry = resolve_next(&list, None, WalkPolicy::default()).unwrap();
        assert_eq!(entry.host, "a");
    }

    #[test]
    fn cursor_advances() {
        let list = abc();
        let entry = resolve_next(&list, Some("a"), WalkPolicy::default()).unwrap();
        assert_eq!(entry.host, "b");
    }

    #[test]
    fn last_entry_is_end_of_list() {
        let list = abc();
        let err = resolve_next(&list, Some("c"), WalkPolicy::default()).unwrap_err();
        assert!(matches!(err, ListError::EndOfList { .. }));
    }

    #[test]
    fn unknown_cursor_is_stale() {
        let list = abc();
        let err = resolve_next(&list, Some("zz"), WalkPolicy::default()).unwrap_err();
        assert!(matches!(err, ListError::StaleCursor { ref host, .. } if host == "zz"));
    }

    #[test]
    fn blank_lines_are_not_candidates() {
        let list = NamedList::parse("machines.test", "a\n\n   \nb\n\n");
        let entry = resolve_next(&list, Some("a"), WalkPolicy::default()).unwrap();
        assert_eq!(entry.host, "b");
        let err = resolve_next(&list, Some("b"), WalkPolicy::default()).unwrap_err();
        assert!(matches!(err, ListError::EndOfList { .. }));
    }

    #[test]
    fn disabled_entries_are_candidates_by_default() {
        let list = NamedList::parse("machines.test", "a\n#b # down\nc\n");
        let entry = resolve_next(&list, Some("a"), WalkPolicy::default()).unwrap();
        assert_eq!(entry.host, "b");
        assert_eq!(entry.comment.as_deref(), Some("[DOWN] down"));
    }

    #[test]
    fn skip_disabled_policy() {
        let policy = WalkPolicy {
            skip_disabled: true,
        };
        let list = NamedList::parse("machines.test", "#a\nb\n#c\n");
        assert_eq!(resolve_next(&list, None, policy).unwrap().host, "b");
        // cursor may still point at a disabled host
        let list = NamedList::parse("machines.test", "a\n#b\nc\n");
        assert_eq!(resolve_next(&list, Some("b"), policy).unwrap().host, "c");
        assert!(matches!(
            resolve_next(&NamedList::parse("m", "a\n#b\n"), Some("a"), policy),
            Err(ListError::EndOfList { .. })
        ));
    }

    #[test]
    fn empty_list_without_cursor() {
        let list = NamedList::parse("machines.none", "# nothing here\n\n");
        assert!(matches!(
            resolve_next(&list, None, WalkPolicy::default()),
            Err(ListError::Empty { .. })
        ));
    }
}
