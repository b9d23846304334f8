//! Field filter driven by per-field metadata.

use crate::reflect::Field;

/// Metadata key the comparator reads directives from.
pub const TAG_KEY: &str = "tracedeq";

/// Directive that removes a field from comparison.
pub const IGNORE: &str = "ignore";

/// Whether the field pair takes no part in the comparison.
///
/// Each side's own metadata is consulted; either side carrying [`IGNORE`]
/// excludes the field.
pub(crate) fn is_excluded(x: &Field<'_>, y: &Field<'_>) -> bool {
    has_directive(x, IGNORE) || has_directive(y, IGNORE)
}

fn has_directive(field: &Field<'_>, directive: &str) -> bool {
    field
        .tag(TAG_KEY)
        .is_some_and(|value| value.split(',').any(|d| d.trim() == directive))
}

#[cfg(test)]
mod tests {
    use super::*;

    static VALUE: u8 = 0;

    fn field(tags: &'static [(&'static str, &'static str)]) -> Field<'static> {
        Field::new("f", &VALUE).with_tags(tags)
    }

    #[test]
    fn untagged_field_is_compared() {
        assert!(!is_excluded(&field(&[]), &field(&[])));
    }

    #[test]
    fn ignore_among_other_directives() {
        let tagged = field(&[(TAG_KEY, "omitempty, ignore")]);
        assert!(is_excluded(&tagged, &field(&[])));
    }

    #[test]
    fn each_side_is_read_independently() {
        let tagged = field(&[(TAG_KEY, "ignore")]);
        assert!(is_excluded(&field(&[]), &tagged));
        assert!(is_excluded(&tagged, &field(&[])));
    }

    #[test]
    fn other_keys_and_directives_are_inert() {
        assert!(!is_excluded(&field(&[("json", "ignore")]), &field(&[])));
        assert!(!is_excluded(&field(&[(TAG_KEY, "ignored,skip")]), &field(&[])));
    }
}
