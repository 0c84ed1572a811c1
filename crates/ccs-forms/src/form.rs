use crate::validate::{FieldKind, FieldSpec, ValidationError, validate};
use ccs_storage::{InquiryLog, KeyValueStore};
use ccs_types::Inquiry;
use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Untouched,
    Valid,
    Invalid(ValidationError),
}

impl FieldState {
    fn from_result(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => FieldState::Valid,
            Err(err) => FieldState::Invalid(err),
        }
    }

    pub fn error(&self) -> Option<ValidationError> {
        match self {
            FieldState::Invalid(err) => Some(*err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub error: ValidationError,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(Vec<FieldError>),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[derive(Debug, Clone)]
struct Field {
    spec: FieldSpec,
    value: String,
    state: FieldState,
}

/// Contact form model: field values and validation state in document order.
#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: Vec<Field>,
}

impl ContactForm {
    pub fn new(specs: impl IntoIterator<Item = FieldSpec>) -> Self {
        let fields = specs
            .into_iter()
            .map(|spec| Field {
                spec,
                value: String::new(),
                state: FieldState::Untouched,
            })
            .collect();
        Self { fields }
    }

    /// Layout of the department contact page.
    pub fn standard() -> Self {
        Self::new([
            FieldSpec::new("firstName", FieldKind::Text, true),
            FieldSpec::new("lastName", FieldKind::Text, true),
            FieldSpec::new("email", FieldKind::Email, true),
            FieldSpec::new("phone", FieldKind::Phone, false),
            FieldSpec::new("inquiryType", FieldKind::Text, true),
            FieldSpec::new("message", FieldKind::Message, true),
        ])
    }

    pub fn specs(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().map(|f| &f.spec)
    }

    fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.spec.id == id)
    }

    fn field_mut(&mut self, id: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.spec.id == id)
    }

    pub fn value(&self, id: &str) -> &str {
        self.field(id).map(|f| f.value.as_str()).unwrap_or_default()
    }

    pub fn state(&self, id: &str) -> Option<FieldState> {
        self.field(id).map(|f| f.state)
    }

    /// Record an edit. Any previous verdict is cleared until the next blur or submit.
    ///
    /// Returns the state the field had before the edit, `None` for unknown ids.
    pub fn set_value(&mut self, id: &str, value: &str) -> Option<FieldState> {
        let field = self.field_mut(id)?;
        field.value.clear();
        field.value.push_str(value);
        Some(std::mem::take(&mut field.state))
    }

    /// Validate one field as it loses focus.
    pub fn blur(&mut self, id: &str) -> Option<FieldState> {
        let field = self.field_mut(id)?;
        field.state = FieldState::from_result(validate(&field.spec, &field.value));
        Some(field.state)
    }

    /// Validate every required field and, if all pass, append the inquiry to
    /// the persisted log and clear the form.
    ///
    /// Nothing is written when validation fails. On a storage failure the
    /// entered values are kept so the visitor can retry.
    pub fn submit<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &S,
        submitted_at: DateTime<Utc>,
    ) -> Result<Inquiry, SubmitError> {
        let mut errors = Vec::new();
        for field in self.fields.iter_mut().filter(|f| f.spec.required) {
            field.state = FieldState::from_result(validate(&field.spec, &field.value));
            if let FieldState::Invalid(error) = field.state {
                errors.push(FieldError {
                    field: field.spec.id.clone(),
                    error,
                });
            }
        }
        if !errors.is_empty() {
            debug!(invalid = errors.len(), "contact form rejected");
            return Err(SubmitError::Invalid(errors));
        }

        let inquiry = self.inquiry(submitted_at);
        InquiryLog::new(store).append(inquiry.clone())?;
        self.reset();
        Ok(inquiry)
    }

    fn inquiry(&self, submitted_at: DateTime<Utc>) -> Inquiry {
        Inquiry {
            first_name: self.value("firstName").to_owned(),
            last_name: self.value("lastName").to_owned(),
            email: self.value("email").to_owned(),
            phone: self.value("phone").to_owned(),
            inquiry_type: self.value("inquiryType").to_owned(),
            message: self.value("message").to_owned(),
            timestamp: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.state = FieldState::Untouched;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, anyhow};
    use ccs_storage::MemoryStore;
    use ccs_types::INQUIRIES_KEY;
    use chrono::TimeZone;

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(anyhow!("quota exceeded"))
        }
    }

    fn submitted_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).single().unwrap()
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::standard();
        form.set_value("firstName", "Maria");
        form.set_value("lastName", "Santos");
        form.set_value("email", "maria.santos@example.edu");
        form.set_value("inquiryType", "admissions");
        form.set_value("message", "When does enrollment for BSCS open?");
        form
    }

    #[test]
    fn malformed_email_blocks_submission_without_writing() {
        let store = MemoryStore::new();
        let mut form = filled();
        form.set_value("email", "not-an-email");

        match form.submit(&store, submitted_at()) {
            Err(SubmitError::Invalid(errors)) => assert_eq!(
                errors,
                vec![FieldError {
                    field: "email".to_owned(),
                    error: ValidationError::InvalidEmail,
                }]
            ),
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert_eq!(store.get(INQUIRIES_KEY).unwrap(), None);
        assert_eq!(form.value("email"), "not-an-email");
    }

    #[test]
    fn valid_submission_appends_one_record_and_clears() {
        let store = MemoryStore::new();
        let mut form = filled();
        form.set_value("phone", "(02) 8123 4567");

        let inquiry = form.submit(&store, submitted_at()).unwrap();
        assert_eq!(inquiry.timestamp, "2024-03-01T09:30:00.000Z");
        assert_eq!(inquiry.phone, "(02) 8123 4567");

        let stored = InquiryLog::new(&store).load().unwrap();
        assert_eq!(stored, vec![inquiry]);
        assert!(form.specs().all(|s| form.value(&s.id).is_empty()));
        assert_eq!(form.state("email"), Some(FieldState::Untouched));
    }

    #[test]
    fn stored_record_uses_camel_case_keys() {
        let store = MemoryStore::new();
        filled().submit(&store, submitted_at()).unwrap();

        let raw = store.get(INQUIRIES_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json[0]["firstName"], "Maria");
        assert_eq!(json[0]["inquiryType"], "admissions");
        assert_eq!(json[0]["phone"], "");
    }

    #[test]
    fn every_required_field_reports_on_empty_submit() {
        let mut form = ContactForm::standard();
        let Err(SubmitError::Invalid(errors)) = form.submit(&MemoryStore::new(), submitted_at())
        else {
            panic!("empty form must not submit");
        };
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            ["firstName", "lastName", "email", "inquiryType", "message"]
        );
        assert!(errors.iter().all(|e| e.error == ValidationError::Required));
        assert_eq!(form.state("phone"), Some(FieldState::Untouched));
    }

    #[test]
    fn optional_phone_is_only_checked_on_blur() {
        let store = MemoryStore::new();
        let mut form = filled();
        form.set_value("phone", "call me");
        assert_eq!(
            form.blur("phone"),
            Some(FieldState::Invalid(ValidationError::InvalidPhone))
        );
        assert!(form.submit(&store, submitted_at()).is_ok());
    }

    #[test]
    fn editing_clears_a_previous_error() {
        let mut form = ContactForm::standard();
        form.set_value("message", "short");
        assert_eq!(
            form.blur("message"),
            Some(FieldState::Invalid(ValidationError::MessageTooShort))
        );
        assert_eq!(
            form.set_value("message", "short but"),
            Some(FieldState::Invalid(ValidationError::MessageTooShort))
        );
        assert_eq!(form.state("message"), Some(FieldState::Untouched));
        form.set_value("message", "short but long enough");
        assert_eq!(form.blur("message"), Some(FieldState::Valid));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut form = ContactForm::standard();
        assert_eq!(form.set_value("newsletter", "yes"), None);
        assert_eq!(form.blur("newsletter"), None);
        assert_eq!(form.value("newsletter"), "");
    }

    #[test]
    fn storage_failure_keeps_entered_values() {
        let mut form = filled();
        let err = form.submit(&ReadOnlyStore, submitted_at()).unwrap_err();
        assert!(matches!(err, SubmitError::Storage(_)));
        assert_eq!(err.to_string(), "failed to write inquiry log");
        assert_eq!(form.value("firstName"), "Maria");
    }

    #[test]
    fn unreadable_log_blocks_submission_and_is_left_alone() {
        let store = MemoryStore::new();
        store.set(INQUIRIES_KEY, "{not json").unwrap();
        let mut form = filled();

        let err = form.submit(&store, submitted_at()).unwrap_err();
        assert!(matches!(err, SubmitError::Storage(_)));
        assert_eq!(store.get(INQUIRIES_KEY).unwrap().as_deref(), Some("{not json"));
        assert_eq!(form.value("message"), "When does enrollment for BSCS open?");
    }
}
