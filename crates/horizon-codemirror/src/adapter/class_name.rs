//! Container class names.

/// Class every editor container carries.
pub const BASE_CLASS: &str = "CodeMirrorAdapter";

/// Class added while the widget has focus.
pub const FOCUSED_CLASS: &str = "CodeMirrorAdapter--focused";

/// Join the present, non-empty class names with single spaces.
pub fn class_names<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    parts
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The container class for an editor in the given focus state.
pub fn editor_class_name(focused: bool, extra: Option<&str>) -> String {
    class_names([Some(BASE_CLASS), focused.then_some(FOCUSED_CLASS), extra])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name_reflects_focus() {
        assert_eq!(editor_class_name(false, None), "CodeMirrorAdapter");
        assert_eq!(
            editor_class_name(true, Some("sql-editor")),
            "CodeMirrorAdapter CodeMirrorAdapter--focused sql-editor"
        );
    }

    #[test]
    fn test_empty_parts_are_skipped() {
        assert_eq!(class_names([Some("a"), None, Some("  "), Some("b")]), "a b");
        assert_eq!(class_names([None, None]), "");
    }
}
