//! Resolves a `FieldIdentifier` to a concrete field in a snapshot's
//! field list: find the `match_number`-th field whose trimmed text
//! matches the label, then step `skip` positions further down the list.

use crate::domain::model::Field;
use crate::domain::primitive::FieldIdentifier;
use crate::shared::error::SessionError;

/// Index of the `match_number`-th label match, or `None` when fewer
/// matches exist. Matching compares the label against the field's
/// normalized, trimmed text.
pub fn label_match_index(fields: &[Field], identifier: &FieldIdentifier) -> Option<usize> {
    let wanted = identifier.match_number.max(1);
    let mut seen = 0;
    for (index, field) in fields.iter().enumerate() {
        let text = field.display_value();
        if identifier.match_mode.matches(&identifier.label, text.trim()) {
            seen += 1;
            if seen == wanted {
                return Some(index);
            }
        }
    }
    None
}

/// Index of the field `skip` positions after the label match. Fails
/// with `LabelNotFound` when the label has too few matches and with
/// `FieldOutOfRange` when the skip lands past the end of the list.
pub fn find_field_index(
    fields: &[Field],
    identifier: &FieldIdentifier,
) -> Result<usize, SessionError> {
    let matched = label_match_index(fields, identifier).ok_or_else(|| {
        SessionError::LabelNotFound {
            label: identifier.label.clone(),
            skip: identifier.skip,
            match_number: identifier.match_number,
            match_mode: identifier.match_mode,
        }
    })?;
    match matched.checked_add(identifier.skip) {
        Some(resolved) if resolved < fields.len() => Ok(resolved),
        _ => Err(SessionError::FieldOutOfRange {
            label: identifier.label.clone(),
            skip: identifier.skip,
            resolved_index: matched.saturating_add(identifier.skip),
            field_count: fields.len(),
        }),
    }
}

pub fn find_field<'a>(
    fields: &'a [Field],
    identifier: &FieldIdentifier,
) -> Result<&'a Field, SessionError> {
    find_field_index(fields, identifier).map(|index| &fields[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FieldKind;
    use crate::domain::primitive::MatchMode;

    fn label(text: &str) -> Field {
        Field::new(0, 0, text.to_string(), FieldKind::Protected)
    }

    fn input(text: &str) -> Field {
        Field::new(0, 0, text.to_string(), FieldKind::Input)
    }

    fn form_fields() -> Vec<Field> {
        vec![label("Name:"), input(""), label("Date:"), input("")]
    }

    // =========================================================================
    // Tests: label matching
    // =========================================================================

    #[test]
    fn first_match_is_found_by_default() {
        let fields = form_fields();
        let identifier = FieldIdentifier::new("Name:");
        assert_eq!(label_match_index(&fields, &identifier), Some(0));
    }

    #[test]
    fn match_number_selects_a_later_occurrence() {
        let fields = vec![label("Item:"), input("a"), label("Item:"), input("b")];
        let identifier = FieldIdentifier::new("Item:").match_number(2);
        assert_eq!(label_match_index(&fields, &identifier), Some(2));
    }

    #[test]
    fn too_few_matches_is_none() {
        let fields = form_fields();
        let identifier = FieldIdentifier::new("Name:").match_number(2);
        assert_eq!(label_match_index(&fields, &identifier), None);
    }

    #[test]
    fn match_number_zero_behaves_like_one() {
        let fields = form_fields();
        let identifier = FieldIdentifier::new("Name:").match_number(0);
        assert_eq!(label_match_index(&fields, &identifier), Some(0));
    }

    #[test]
    fn matching_compares_trimmed_normalized_text() {
        let fields = vec![label("  Name: \u{0}\u{0}"), input("")];
        let identifier = FieldIdentifier::new("Name:");
        assert_eq!(label_match_index(&fields, &identifier), Some(0));
    }

    #[test]
    fn contains_mode_matches_partial_labels() {
        let fields = vec![label("First Name:"), input("")];
        let exact = FieldIdentifier::new("Name:");
        let contains = FieldIdentifier::new("Name:").match_mode(MatchMode::Contains);
        assert_eq!(label_match_index(&fields, &exact), None);
        assert_eq!(label_match_index(&fields, &contains), Some(0));
    }

    #[test]
    fn case_insensitive_mode_ignores_case() {
        let fields = vec![label("NAME:"), input("")];
        let identifier = FieldIdentifier::new("name:").match_mode(MatchMode::CaseInsensitive);
        assert_eq!(label_match_index(&fields, &identifier), Some(0));
    }

    // =========================================================================
    // Tests: skip resolution
    // =========================================================================

    #[test]
    fn default_skip_resolves_to_the_field_after_the_label() {
        let fields = form_fields();
        let identifier = FieldIdentifier::new("Name:");
        assert_eq!(find_field_index(&fields, &identifier).unwrap(), 1);
    }

    #[test]
    fn skip_zero_resolves_to_the_label_field_itself() {
        let fields = form_fields();
        let identifier = FieldIdentifier::new("Name:").skip(0);
        assert_eq!(find_field_index(&fields, &identifier).unwrap(), 0);
    }

    #[test]
    fn increasing_skip_strictly_increases_the_resolved_index() {
        let fields = form_fields();
        let mut previous = None;
        for skip in 0..fields.len() {
            let identifier = FieldIdentifier::new("Name:").skip(skip);
            let resolved = find_field_index(&fields, &identifier).unwrap();
            if let Some(previous) = previous {
                assert!(resolved > previous);
            }
            previous = Some(resolved);
        }
    }

    #[test]
    fn skip_past_the_end_fails_with_field_out_of_range() {
        let fields = form_fields();
        let identifier = FieldIdentifier::new("Date:").skip(2);
        let err = find_field_index(&fields, &identifier).unwrap_err();
        assert!(matches!(
            err,
            SessionError::FieldOutOfRange {
                resolved_index: 4,
                field_count: 4,
                ..
            }
        ));
    }

    #[test]
    fn skip_overflowing_the_index_fails_with_field_out_of_range() {
        let fields = form_fields();
        let identifier = FieldIdentifier::new("Date:").skip(usize::MAX);
        let err = find_field_index(&fields, &identifier).unwrap_err();
        assert!(matches!(err, SessionError::FieldOutOfRange { .. }));
    }

    #[test]
    fn unknown_label_fails_with_label_not_found() {
        let fields = form_fields();
        let identifier = FieldIdentifier::new("Account:");
        let err = find_field_index(&fields, &identifier).unwrap_err();
        assert!(matches!(err, SessionError::LabelNotFound { .. }));
    }

    #[test]
    fn label_not_found_is_distinguishable_from_index_zero() {
        let fields = form_fields();
        let found = FieldIdentifier::new("Name:").skip(0);
        let missing = FieldIdentifier::new("Account:").skip(0);
        assert_eq!(find_field_index(&fields, &found).unwrap(), 0);
        assert!(find_field_index(&fields, &missing).is_err());
    }

    #[test]
    fn find_field_returns_the_resolved_field() {
        let fields = vec![label("Name:"), input("JOHN")];
        let field = find_field(&fields, &FieldIdentifier::new("Name:")).unwrap();
        assert_eq!(field.value(), "JOHN");
    }

    #[test]
    fn empty_field_list_fails_with_label_not_found() {
        let err = find_field_index(&[], &FieldIdentifier::new("Name:")).unwrap_err();
        assert!(matches!(err, SessionError::LabelNotFound { .. }));
    }
}
