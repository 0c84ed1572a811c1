use regex::Regex;
use std::sync::LazyLock;

pub const MESSAGE_FIELD_ID: &str = "message";
/// Counted in UTF-16 code units, like the browser reports input length.
const MIN_MESSAGE_LEN: usize = 10;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s\-+()]+$").expect("Invalid phone regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Message,
}

impl FieldKind {
    /// Classify a form control from its `type` attribute and `id`.
    pub fn from_markup(input_type: &str, id: &str) -> Self {
        if id == MESSAGE_FIELD_ID {
            return FieldKind::Message;
        }
        match input_type {
            "email" => FieldKind::Email,
            "tel" => FieldKind::Phone,
            _ => FieldKind::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn new(id: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            id: id.to_owned(),
            kind,
            required,
        }
    }
}

/// Check `value` against the rules for `spec`, first failing rule wins.
pub fn validate(spec: &FieldSpec, value: &str) -> Result<(), ValidationError> {
    if spec.required && value.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    match spec.kind {
        FieldKind::Email if !value.is_empty() && !EMAIL_RE.is_match(value) => {
            Err(ValidationError::InvalidEmail)
        }
        FieldKind::Phone if !value.is_empty() && !PHONE_RE.is_match(value) => {
            Err(ValidationError::InvalidPhone)
        }
        FieldKind::Message if value.trim().encode_utf16().count() < MIN_MESSAGE_LEN => {
            Err(ValidationError::MessageTooShort)
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(required: bool) -> FieldSpec {
        FieldSpec::new("email", FieldKind::Email, required)
    }

    #[test]
    fn required_wins_over_format_rules() {
        assert_eq!(validate(&email(true), "   "), Err(ValidationError::Required));
        assert_eq!(
            validate(&FieldSpec::new("message", FieldKind::Message, true), ""),
            Err(ValidationError::Required)
        );
    }

    #[test]
    fn email_needs_local_domain_and_tld() {
        let spec = email(true);
        assert_eq!(validate(&spec, "dean@ccs.edu.ph"), Ok(()));
        assert_eq!(validate(&spec, "a@b.c"), Ok(()));
        for bad in ["not-an-email", "a@b", "a b@c.d", "@ccs.edu", "a@@b.c", "a@b."] {
            assert_eq!(validate(&spec, bad), Err(ValidationError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn optional_fields_may_be_left_empty() {
        assert_eq!(validate(&email(false), ""), Ok(()));
        assert_eq!(validate(&FieldSpec::new("phone", FieldKind::Phone, false), ""), Ok(()));
    }

    #[test]
    fn optional_email_with_only_spaces_is_malformed() {
        assert_eq!(validate(&email(false), "  "), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn phone_allows_digits_and_punctuation_only() {
        let spec = FieldSpec::new("phone", FieldKind::Phone, false);
        assert_eq!(validate(&spec, "+63 (912) 345-6789"), Ok(()));
        // No digit is required; kept as the live site behaves.
        assert_eq!(validate(&spec, "---"), Ok(()));
        assert_eq!(validate(&spec, "0912-CALL-NOW"), Err(ValidationError::InvalidPhone));
        assert_eq!(validate(&spec, "٠٩١٢"), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn message_length_counts_trimmed_characters() {
        let spec = FieldSpec::new("message", FieldKind::Message, true);
        assert_eq!(validate(&spec, "  long enough  "), Ok(()));
        assert_eq!(validate(&spec, "  123456789  "), Err(ValidationError::MessageTooShort));
        assert_eq!(validate(&spec, "ñññññññññ"), Err(ValidationError::MessageTooShort));
        assert_eq!(validate(&spec, "ññññññññññ"), Ok(()));
    }

    #[test]
    fn message_length_counts_utf16_units() {
        let spec = FieldSpec::new("message", FieldKind::Message, true);
        assert_eq!(validate(&spec, "😀😀😀😀😀"), Ok(()));
        assert_eq!(validate(&spec, "😀😀😀😀"), Err(ValidationError::MessageTooShort));
    }

    #[test]
    fn kind_follows_markup() {
        assert_eq!(FieldKind::from_markup("email", "email"), FieldKind::Email);
        assert_eq!(FieldKind::from_markup("tel", "phone"), FieldKind::Phone);
        assert_eq!(FieldKind::from_markup("textarea", "message"), FieldKind::Message);
        assert_eq!(FieldKind::from_markup("text", "firstName"), FieldKind::Text);
        assert_eq!(FieldKind::from_markup("select-one", "inquiryType"), FieldKind::Text);
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(ValidationError::Required.to_string(), "This field is required");
        assert_eq!(
            ValidationError::MessageTooShort.to_string(),
            "Message must be at least 10 characters long"
        );
    }
}
