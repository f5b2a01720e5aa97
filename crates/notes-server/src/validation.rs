//! Request body validation for mutating note operations.
//!
//! The check is shallow: it requires `title`, `content`, and
//! `categoryId` to be present and non-empty, and nothing more. Whether
//! `categoryId` parses as an object id or references an existing
//! category is the handler's concern. A rejected payload never reaches
//! the store.

use serde::Deserialize;

use crate::error::ApiError;

/// Fixed message returned for any incomplete note payload.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Title, content, and categoryId are required";

/// Raw note payload as received on POST and PUT.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePayload {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<String>,
}

/// Note payload that passed validation. All fields are present and
/// non-empty.
#[derive(Debug, Clone)]
pub struct ValidNote {
    pub title: String,
    pub content: String,
    pub category_id: String,
}

/// Check a note payload, turning it into a [`ValidNote`].
///
/// Both the create and update routes run this same check, so an update
/// request must carry the full payload even though the store merge
/// itself is partial.
pub fn validate_note_payload(payload: NotePayload) -> Result<ValidNote, ApiError> {
    match (payload.title, payload.content, payload.category_id) {
        (Some(title), Some(content), Some(category_id))
            if !title.is_empty() && !content.is_empty() && !category_id.is_empty() =>
        {
            Ok(ValidNote {
                title,
                content,
                category_id,
            })
        }
        _ => Err(ApiError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: Option<&str>, content: Option<&str>, category_id: Option<&str>) -> NotePayload {
        NotePayload {
            title: title.map(str::to_string),
            content: content.map(str::to_string),
            category_id: category_id.map(str::to_string),
        }
    }

    #[test]
    fn complete_payload_passes() {
        let valid =
            validate_note_payload(payload(Some("T"), Some("body"), Some("0123456789abcdef01234567")))
                .unwrap();
        assert_eq!(valid.title, "T");
        assert_eq!(valid.content, "body");
        assert_eq!(valid.category_id, "0123456789abcdef01234567");
    }

    #[test]
    fn missing_fields_are_rejected() {
        for p in [
            payload(None, Some("body"), Some("c")),
            payload(Some("T"), None, Some("c")),
            payload(Some("T"), Some("body"), None),
            payload(None, None, None),
        ] {
            let err = validate_note_payload(p).unwrap_err();
            assert!(matches!(err, ApiError::Validation(_)));
            assert_eq!(err.to_string(), REQUIRED_FIELDS_MESSAGE);
        }
    }

    #[test]
    fn empty_strings_are_rejected() {
        for p in [
            payload(Some(""), Some("body"), Some("c")),
            payload(Some("T"), Some(""), Some("c")),
            payload(Some("T"), Some("body"), Some("")),
        ] {
            assert!(validate_note_payload(p).is_err());
        }
    }

    #[test]
    fn validation_does_not_check_id_format() {
        // Format checks belong to the handler/store; any non-empty string
        // passes here.
        assert!(validate_note_payload(payload(Some("T"), Some("b"), Some("not-hex"))).is_ok());
    }

    #[test]
    fn payload_deserializes_with_absent_and_null_fields() {
        let p: NotePayload = serde_json::from_str(r#"{"title": "T"}"#).unwrap();
        assert_eq!(p.title.as_deref(), Some("T"));
        assert!(p.content.is_none());
        assert!(p.category_id.is_none());

        let p: NotePayload =
            serde_json::from_str(r#"{"title": null, "content": "c", "categoryId": "x"}"#).unwrap();
        assert!(p.title.is_none());
        assert_eq!(p.category_id.as_deref(), Some("x"));
    }
}
