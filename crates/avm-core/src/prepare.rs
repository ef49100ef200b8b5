//! Category field preparation.

use avm_model::PreparedLabel;

/// Marker some release exports put in front of the category field.
pub const CATEGORY_MARKER: &str = "X.";

/// Separator between labels in a category field.
pub const LABEL_SEPARATOR: &str = ", ";

/// Strip the leading `X.` marker and unescape `&gt;`.
pub fn normalize_category_text(text: &str) -> String {
    let text = text.strip_prefix(CATEGORY_MARKER).unwrap_or(text);
    text.replace("&gt;", ">")
}

/// Split a category field into its ordered, classified labels.
///
/// Total: every string yields at least one label.
pub fn prepare_labels(text: &str) -> Vec<PreparedLabel> {
    normalize_category_text(text)
        .split(LABEL_SEPARATOR)
        .map(PreparedLabel::from_label)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use avm_model::{CategoryLabel, Sentinel};

    #[test]
    fn strips_marker_and_unescapes() {
        assert_eq!(
            normalize_category_text("X.Galaxy &gt; Spiral"),
            "Galaxy > Spiral"
        );
        assert_eq!(normalize_category_text("Galaxy > Spiral"), "Galaxy > Spiral");
    }

    #[test]
    fn marker_is_only_stripped_once_at_start() {
        assert_eq!(normalize_category_text("X.X.Star"), "X.Star");
        assert_eq!(normalize_category_text("Star X."), "Star X.");
    }

    #[test]
    fn splits_on_comma_space() {
        let labels = prepare_labels("X.Galaxy &gt; Spiral, Galaxy &gt; Interacting, unknown");
        assert_eq!(
            labels,
            vec![
                PreparedLabel::Lookup(CategoryLabel::from("Galaxy > Spiral")),
                PreparedLabel::Interacting,
                PreparedLabel::Sentinel(Sentinel::Unknown),
            ]
        );
    }

    #[test]
    fn comma_without_space_does_not_split() {
        let labels = prepare_labels("Galaxy > Spiral,Star > Nova");
        assert_eq!(labels.len(), 1);
    }

    #[test]
    fn empty_field_yields_one_empty_label() {
        assert_eq!(
            prepare_labels(""),
            vec![PreparedLabel::Lookup(CategoryLabel::from(""))]
        );
    }
}
