//! Client-side submit rules and typing sanitizers.
//!
//! Submit rules run on trimmed values before any network call and return
//! the cleaned value on success. Sanitizers mirror what the form inputs
//! accept while the user is typing: input they refuse keeps the previous
//! value.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidateEmail;

use crate::error::CoreError;
use crate::image::{ImageField, ImageUpload};
use crate::resource::FormMode;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Longest donation goal accepted at submit time.
pub const DONATION_GOAL_MAX_DIGITS: usize = 10;

/// Longest donation goal the input accepts while typing.
pub const DONATION_GOAL_INPUT_MAX_CHARS: usize = 8;

pub const CONTACT_NAME_MAX_CHARS: usize = 100;

pub const CONTACT_NUMBER_DIGITS: usize = 10;

// ASCII classes on purpose: `\d` would also match non-Latin digits.
static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid regex"));

// ---------------------------------------------------------------------------
// Submit rules
// ---------------------------------------------------------------------------

/// Donation goal: digits only, at most ten of them.
pub fn validate_donation_goal(raw: &str) -> Result<String, CoreError> {
    let goal = raw.trim();
    if !DIGITS_RE.is_match(goal) {
        return Err(CoreError::validation(
            "donation_goal",
            "Donation amount must be numeric",
        ));
    }
    if goal.len() > DONATION_GOAL_MAX_DIGITS {
        return Err(CoreError::validation(
            "donation_goal",
            "Donation amount cannot exceed 10 digits",
        ));
    }
    Ok(goal.to_string())
}

/// Contact name: 1 to 100 characters after trimming.
pub fn validate_contact_name(raw: &str) -> Result<String, CoreError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CoreError::validation("name", "Name is required"));
    }
    if name.chars().count() > CONTACT_NAME_MAX_CHARS {
        return Err(CoreError::validation(
            "name",
            "Name cannot exceed 100 characters",
        ));
    }
    Ok(name.to_string())
}

/// Contact number: exactly ten ASCII digits after trimming.
pub fn validate_contact_number(raw: &str) -> Result<String, CoreError> {
    let number = raw.trim();
    if !PHONE_RE.is_match(number) {
        return Err(CoreError::validation(
            "number",
            "Contact number must be exactly 10 digits",
        ));
    }
    Ok(number.to_string())
}

pub fn validate_email(raw: &str) -> Result<String, CoreError> {
    let email: &str = raw.trim();
    if email.is_empty() {
        return Err(CoreError::validation("email", "Email is required"));
    }
    if !email.validate_email() {
        return Err(CoreError::validation(
            "email",
            "Please enter a valid email address",
        ));
    }
    Ok(email.to_string())
}

/// Non-empty after trimming. `label` is the user-facing field name.
pub fn require_text(field: &'static str, label: &str, raw: &str) -> Result<String, CoreError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(CoreError::validation(field, format!("{label} is required")));
    }
    Ok(value.to_string())
}

pub fn require_category(category_id: Option<DbId>) -> Result<DbId, CoreError> {
    category_id.ok_or_else(|| CoreError::validation("category", "Category is required"))
}

/// Decide which image, if any, goes into the submit payload.
///
/// In add mode a newly chosen file is mandatory. In edit mode the image is
/// only sent when it was replaced; an unchanged image is left out so the
/// partial update keeps the stored one.
pub fn image_for_submit(
    mode: FormMode,
    image: Option<&ImageField>,
) -> Result<Option<ImageUpload>, CoreError> {
    let replacement = image.and_then(ImageField::replacement).cloned();
    match mode {
        FormMode::Add => replacement
            .map(Some)
            .ok_or_else(|| CoreError::validation("image", "Image is required")),
        FormMode::Edit => Ok(replacement),
        FormMode::View => Err(CoreError::ReadOnly),
    }
}

// ---------------------------------------------------------------------------
// Typing sanitizers
// ---------------------------------------------------------------------------

pub fn sanitize_donation_goal_input(current: &str, raw: &str) -> String {
    if raw.chars().count() <= DONATION_GOAL_INPUT_MAX_CHARS {
        raw.to_string()
    } else {
        current.to_string()
    }
}

pub fn sanitize_contact_name_input(current: &str, raw: &str) -> String {
    if raw.chars().count() <= CONTACT_NAME_MAX_CHARS {
        raw.to_string()
    } else {
        current.to_string()
    }
}

/// Strip non-digits; refuse the edit if more than ten digits remain.
pub fn sanitize_contact_number_input(current: &str, raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() <= CONTACT_NUMBER_DIGITS {
        digits
    } else {
        current.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    // -- donation goal ------------------------------------------------------

    #[test]
    fn donation_goal_accepts_digits_up_to_ten() {
        for ok in ["123", "0", "9999999999"] {
            assert_eq!(validate_donation_goal(ok).unwrap(), ok);
        }
    }

    #[test]
    fn donation_goal_rejects_non_numeric() {
        for bad in ["12a", "-5", "", "1.5", "١٢٣"] {
            let err = validate_donation_goal(bad).unwrap_err();
            assert_eq!(err.user_message(), "Donation amount must be numeric");
        }
    }

    #[test]
    fn donation_goal_rejects_eleven_digits() {
        let err = validate_donation_goal("12345678901").unwrap_err();
        assert_eq!(err.user_message(), "Donation amount cannot exceed 10 digits");
    }

    #[test]
    fn donation_goal_is_trimmed() {
        assert_eq!(validate_donation_goal(" 42 ").unwrap(), "42");
    }

    // -- contact name ---------------------------------------------------------

    #[test]
    fn contact_name_bounds() {
        assert_matches!(
            validate_contact_name(""),
            Err(CoreError::Validation { field: "name", .. })
        );
        assert_matches!(validate_contact_name("   "), Err(_));
        assert!(validate_contact_name(&"a".repeat(100)).is_ok());
        let err = validate_contact_name(&"a".repeat(101)).unwrap_err();
        assert_eq!(err.user_message(), "Name cannot exceed 100 characters");
    }

    #[test]
    fn contact_name_counts_characters_not_bytes() {
        assert!(validate_contact_name(&"é".repeat(100)).is_ok());
    }

    // -- contact number -------------------------------------------------------

    #[test]
    fn contact_number_requires_exactly_ten_digits() {
        assert_eq!(validate_contact_number("9876543210").unwrap(), "9876543210");
        for bad in ["98765", "98765432101", "abcdefghij", "98765-4321"] {
            assert_matches!(
                validate_contact_number(bad),
                Err(CoreError::Validation { field: "number", .. })
            );
        }
    }

    // -- email ----------------------------------------------------------------

    #[test]
    fn email_rules() {
        assert_eq!(validate_email(" a@b.org ").unwrap(), "a@b.org");
        assert_matches!(validate_email(""), Err(CoreError::Validation { field: "email", .. }));
        assert_matches!(validate_email("not-an-email"), Err(_));
    }

    // -- required -------------------------------------------------------------

    #[test]
    fn require_text_trims_and_rejects_blank() {
        assert_eq!(require_text("title", "Title", "  Food ").unwrap(), "Food");
        let err = require_text("title", "Title", "  ").unwrap_err();
        assert_eq!(err.user_message(), "Title is required");
    }

    #[test]
    fn require_category_needs_a_selection() {
        assert_eq!(require_category(Some(3)).unwrap(), 3);
        assert_matches!(require_category(None), Err(CoreError::Validation { field: "category", .. }));
    }

    // -- image ----------------------------------------------------------------

    fn upload() -> ImageUpload {
        ImageUpload::new("a.png", vec![1])
    }

    #[test]
    fn add_mode_requires_new_file() {
        assert_matches!(
            image_for_submit(FormMode::Add, None),
            Err(CoreError::Validation { field: "image", .. })
        );
        let existing = ImageField::Existing("media/a.png".into());
        assert_matches!(image_for_submit(FormMode::Add, Some(&existing)), Err(_));
        let replaced = ImageField::Replacement(upload());
        assert_eq!(
            image_for_submit(FormMode::Add, Some(&replaced)).unwrap(),
            Some(upload())
        );
    }

    #[test]
    fn edit_mode_sends_image_only_when_replaced() {
        assert_eq!(image_for_submit(FormMode::Edit, None).unwrap(), None);
        let existing = ImageField::Existing("media/a.png".into());
        assert_eq!(image_for_submit(FormMode::Edit, Some(&existing)).unwrap(), None);
        let replaced = ImageField::Replacement(upload());
        assert_eq!(
            image_for_submit(FormMode::Edit, Some(&replaced)).unwrap(),
            Some(upload())
        );
    }

    #[test]
    fn view_mode_never_submits() {
        assert_eq!(image_for_submit(FormMode::View, None), Err(CoreError::ReadOnly));
    }

    // -- sanitizers -----------------------------------------------------------

    #[test]
    fn goal_input_capped_at_eight_characters() {
        assert_eq!(sanitize_donation_goal_input("1234", "12345678"), "12345678");
        assert_eq!(sanitize_donation_goal_input("12345678", "123456789"), "12345678");
    }

    #[test]
    fn name_input_capped_at_hundred_characters() {
        let full = "a".repeat(100);
        assert_eq!(sanitize_contact_name_input("", &full), full);
        assert_eq!(sanitize_contact_name_input(&full, &"a".repeat(101)), full);
    }

    #[test]
    fn number_input_strips_non_digits() {
        assert_eq!(sanitize_contact_number_input("", "98-76 54x3210"), "9876543210");
        assert_eq!(sanitize_contact_number_input("987", "98765432101"), "987");
        assert_eq!(sanitize_contact_number_input("", "abc"), "");
    }
}
