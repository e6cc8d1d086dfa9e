use std::collections::BTreeMap;
use std::rc::Rc;

use chrono::NaiveDate;
use serde::Serialize;
use yew::Reducible;

use crate::admission::phone::format_phone_number;
use crate::admission::validation::{validate_field, FieldKind, ValidationError};
use crate::config;

/// The field that gets reformatted on every keystroke.
pub const PHONE_FIELD: &str = "contactNumber";

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
    /// `(value, label)` pairs, only used by `FieldKind::Select`.
    pub options: &'static [(&'static str, &'static str)],
}

const GRADES: &[(&str, &str)] = &[
    ("pre-k", "Pre-Kindergarten"),
    ("kindergarten", "Kindergarten"),
    ("primary", "Grades 1-5"),
    ("middle", "Grades 6-8"),
    ("high", "Grades 9-12"),
];

pub const ADMISSION_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "studentName",
        label: "Student's Full Name",
        kind: FieldKind::Text,
        required: true,
        placeholder: "Enter the student's name",
        options: &[],
    },
    FieldSpec {
        name: "dateOfBirth",
        label: "Date of Birth",
        kind: FieldKind::Date,
        required: true,
        placeholder: "",
        options: &[],
    },
    FieldSpec {
        name: "gradeApplying",
        label: "Grade Applying For",
        kind: FieldKind::Select,
        required: true,
        placeholder: "Select a grade",
        options: GRADES,
    },
    FieldSpec {
        name: "parentName",
        label: "Parent/Guardian Name",
        kind: FieldKind::Text,
        required: true,
        placeholder: "Enter parent or guardian name",
        options: &[],
    },
    FieldSpec {
        name: "email",
        label: "Email Address",
        kind: FieldKind::Email,
        required: true,
        placeholder: "name@example.com",
        options: &[],
    },
    FieldSpec {
        name: PHONE_FIELD,
        label: "Contact Number",
        kind: FieldKind::Tel,
        required: true,
        placeholder: "(555) 123-4567",
        options: &[],
    },
    FieldSpec {
        name: "previousSchool",
        label: "Previous School",
        kind: FieldKind::Text,
        required: false,
        placeholder: "Optional",
        options: &[],
    },
    FieldSpec {
        name: "message",
        label: "Anything else we should know?",
        kind: FieldKind::TextArea,
        required: false,
        placeholder: "Optional",
        options: &[],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    /// Terminal until the page is reloaded.
    Acknowledged,
}

/// Snapshot of the field values taken when a submission starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Application {
    fields: BTreeMap<String, String>,
}

impl Application {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub enum FormAction {
    Input { field: &'static str, value: String },
    Blur { field: &'static str, today: NaiveDate },
    Submit { today: NaiveDate },
    Acknowledge,
}

/// Everything the admission form renders from. Errors are keyed by field, so a field
/// never carries more than one message.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    fields: &'static [FieldSpec],
    values: BTreeMap<&'static str, String>,
    errors: BTreeMap<&'static str, ValidationError>,
    phase: SubmissionPhase,
    celebrations: u32,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(ADMISSION_FIELDS)
    }
}

impl FormState {
    pub fn new(fields: &'static [FieldSpec]) -> Self {
        Self {
            fields,
            values: fields.iter().map(|f| (f.name, String::new())).collect(),
            errors: BTreeMap::new(),
            phase: SubmissionPhase::Idle,
            celebrations: 0,
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, field: &str) -> Option<ValidationError> {
        self.errors.get(field).copied()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_form_visible(&self) -> bool {
        self.phase != SubmissionPhase::Acknowledged
    }

    pub fn is_acknowledgment_visible(&self) -> bool {
        self.phase == SubmissionPhase::Acknowledged
    }

    pub fn submit_disabled(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            SubmissionPhase::Submitting => config::SUBMITTING_LABEL,
            _ => config::SUBMIT_LABEL,
        }
    }

    /// How many times the celebration should have fired for this form instance.
    pub fn celebrations(&self) -> u32 {
        self.celebrations
    }

    pub fn application(&self) -> Application {
        Application {
            fields: self
                .values
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
        }
    }

    /// Applies one action in place. Returns false when the action changed nothing.
    pub fn apply(&mut self, action: FormAction) -> bool {
        match action {
            FormAction::Input { field, value } => self.input(field, value),
            FormAction::Blur { field, today } => self.blur(field, today),
            FormAction::Submit { today } => self.submit(today),
            FormAction::Acknowledge => self.acknowledge(),
        }
    }

    fn spec(&self, field: &str) -> Option<&'static FieldSpec> {
        let fields = self.fields;
        fields.iter().find(|f| f.name == field)
    }

    fn input(&mut self, field: &'static str, value: String) -> bool {
        if self.spec(field).is_none() {
            return false;
        }
        let value = if field == PHONE_FIELD {
            format_phone_number(&value)
        } else {
            value
        };
        self.errors.remove(field);
        self.values.insert(field, value);
        true
    }

    fn blur(&mut self, field: &'static str, today: NaiveDate) -> bool {
        let Some(spec) = self.spec(field) else {
            return false;
        };
        self.check(spec, today);
        true
    }

    fn submit(&mut self, today: NaiveDate) -> bool {
        if self.phase != SubmissionPhase::Idle {
            return false;
        }

        let fields = self.fields;
        let mut all_valid = true;
        for spec in fields.iter().filter(|f| f.required) {
            if !self.check(spec, today) {
                all_valid = false;
            }
        }

        if all_valid {
            self.phase = SubmissionPhase::Submitting;
        }
        true
    }

    fn acknowledge(&mut self) -> bool {
        if self.phase != SubmissionPhase::Submitting {
            return false;
        }
        self.phase = SubmissionPhase::Acknowledged;
        self.celebrations += 1;
        true
    }

    fn check(&mut self, spec: &'static FieldSpec, today: NaiveDate) -> bool {
        let outcome = validate_field(spec.kind, spec.required, self.value(spec.name), today);
        match outcome {
            Ok(()) => {
                self.errors.remove(spec.name);
                true
            }
            Err(err) => {
                self.errors.insert(spec.name, err);
                false
            }
        }
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn input(state: &mut FormState, field: &'static str, value: &str) {
        state.apply(FormAction::Input { field, value: value.to_string() });
    }

    fn filled_form() -> FormState {
        let mut state = FormState::default();
        input(&mut state, "studentName", "Ada Lovelace");
        input(&mut state, "dateOfBirth", "2014-06-15");
        input(&mut state, "gradeApplying", "primary");
        input(&mut state, "parentName", "Anne Lovelace");
        input(&mut state, "email", "anne@example.com");
        input(&mut state, PHONE_FIELD, "5551234567");
        state
    }

    #[test]
    fn starts_idle_with_empty_values() {
        let state = FormState::default();
        assert_eq!(state.phase(), SubmissionPhase::Idle);
        assert_eq!(state.value("studentName"), "");
        assert!(state.is_form_visible());
        assert!(!state.is_acknowledgment_visible());
        assert_eq!(state.submit_label(), "Submit Application");
    }

    #[test]
    fn phone_field_is_formatted_on_input() {
        let mut state = FormState::default();
        input(&mut state, PHONE_FIELD, "555123");
        assert_eq!(state.value(PHONE_FIELD), "(555) 123");
        input(&mut state, "parentName", "555123");
        assert_eq!(state.value("parentName"), "555123");
    }

    #[test]
    fn blur_reports_and_input_clears() {
        let mut state = FormState::default();
        input(&mut state, "email", "bad@");
        state.apply(FormAction::Blur { field: "email", today: today() });
        assert_eq!(state.error("email"), Some(ValidationError::InvalidEmail));

        input(&mut state, "email", "bad@x");
        assert_eq!(state.error("email"), None);

        state.apply(FormAction::Blur { field: "email", today: today() });
        assert_eq!(state.error("email"), Some(ValidationError::InvalidEmail));
        input(&mut state, "email", "good@x.org");
        state.apply(FormAction::Blur { field: "email", today: today() });
        assert_eq!(state.error("email"), None);
    }

    #[test]
    fn repeated_blur_keeps_a_single_message() {
        let mut state = FormState::default();
        state.apply(FormAction::Blur { field: "studentName", today: today() });
        state.apply(FormAction::Blur { field: "studentName", today: today() });
        assert_eq!(state.error_count(), 1);
        assert_eq!(state.error("studentName"), Some(ValidationError::Required));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut state = FormState::default();
        assert!(!state.apply(FormAction::Input { field: "nope", value: "x".into() }));
        assert!(!state.apply(FormAction::Blur { field: "nope", today: today() }));
    }

    #[test]
    fn submit_with_one_empty_required_field_stays_idle() {
        let mut state = filled_form();
        input(&mut state, "parentName", "");
        state.apply(FormAction::Submit { today: today() });

        assert_eq!(state.phase(), SubmissionPhase::Idle);
        assert!(state.is_form_visible());
        assert_eq!(state.error_count(), 1);
        assert_eq!(state.error("parentName"), Some(ValidationError::Required));
    }

    #[test]
    fn submit_skips_optional_fields() {
        let mut state = filled_form();
        state.apply(FormAction::Submit { today: today() });
        assert_eq!(state.phase(), SubmissionPhase::Submitting);
        assert_eq!(state.error("previousSchool"), None);
    }

    #[test]
    fn valid_submit_goes_busy_then_acknowledged_once() {
        let mut state = filled_form();
        state.apply(FormAction::Submit { today: today() });
        assert!(state.submit_disabled());
        assert_eq!(state.submit_label(), "Submitting...");
        assert!(state.is_form_visible());

        assert!(!state.apply(FormAction::Submit { today: today() }));

        assert!(state.apply(FormAction::Acknowledge));
        assert!(!state.is_form_visible());
        assert!(state.is_acknowledgment_visible());
        assert!(!state.submit_disabled());
        assert_eq!(state.submit_label(), "Submit Application");
        assert_eq!(state.celebrations(), 1);

        assert!(!state.apply(FormAction::Acknowledge));
        assert!(!state.apply(FormAction::Submit { today: today() }));
        assert_eq!(state.celebrations(), 1);
        assert_eq!(state.phase(), SubmissionPhase::Acknowledged);
    }

    #[test]
    fn acknowledge_without_submit_is_ignored() {
        let mut state = FormState::default();
        assert!(!state.apply(FormAction::Acknowledge));
        assert_eq!(state.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn application_snapshot_is_a_flat_mapping() {
        let state = filled_form();
        let application = state.application();
        assert_eq!(application.get(PHONE_FIELD), Some("(555) 123-4567"));

        let json: serde_json::Value = serde_json::from_str(&application.to_json()).unwrap();
        assert_eq!(json["studentName"], "Ada Lovelace");
        assert_eq!(json["message"], "");
    }

    #[test]
    fn reducer_keeps_the_same_state_for_no_ops() {
        let state = Rc::new(FormState::default());
        let next = state.clone().reduce(FormAction::Acknowledge);
        assert!(Rc::ptr_eq(&state, &next));

        let next = state.clone().reduce(FormAction::Submit { today: today() });
        assert!(!Rc::ptr_eq(&state, &next));
        assert_eq!(next.error_count(), 6);
    }
}
