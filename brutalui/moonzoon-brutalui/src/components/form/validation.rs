use email_address::EmailAddress;
use indexmap::IndexMap;

/// Field values by name, in declaration order.
pub type FormValues = IndexMap<String, String>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rule {
    Required,
    /// Empty values pass, pair with `Required` to reject them.
    Email,
    MinLength(usize),
}

impl Rule {
    pub fn check(&self, value: &str) -> Result<(), String> {
        let trimmed = value.trim();
        match self {
            Rule::Required if trimmed.is_empty() => Err("This field is required".to_owned()),
            Rule::Email if !trimmed.is_empty() && !EmailAddress::is_valid(trimmed) => {
                Err("Enter a valid email address".to_owned())
            }
            Rule::MinLength(min) if !value.is_empty() && value.chars().count() < *min => {
                Err(format!("Must be at least {min} characters"))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("form is already submitting")]
    AlreadySubmitting,
    #[error("invalid fields: {}", .0.join(", "))]
    Invalid(Vec<String>),
    #[error("unknown field '{0}'")]
    UnknownField(String),
}

#[derive(Clone, Debug, PartialEq)]
struct FieldState {
    value: String,
    default: String,
    rules: Vec<Rule>,
    touched: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    fields: IndexMap<String, FieldState>,
    submitting: bool,
    submit_count: u32,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a field. Registering a name again replaces it.
    pub fn field(mut self, name: impl Into<String>, default: impl Into<String>, rules: impl IntoIterator<Item = Rule>) -> Self {
        let default = default.into();
        self.fields.insert(
            name.into(),
            FieldState {
                value: default.clone(),
                default,
                rules: rules.into_iter().collect(),
                touched: false,
            },
        );
        self
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|field| field.value.as_str())
    }

    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field = self
            .fields
            .get_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_owned()))?;
        field.value = value.into();
        field.touched = true;
        Ok(())
    }

    pub fn touch(&mut self, name: &str) {
        if let Some(field) = self.fields.get_mut(name) {
            field.touched = true;
        }
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.fields
            .get(name)
            .is_some_and(|field| field.rules.contains(&Rule::Required))
    }

    /// First failing rule of the field.
    pub fn error(&self, name: &str) -> Option<String> {
        let field = self.fields.get(name)?;
        field.rules.iter().find_map(|rule| rule.check(&field.value).err())
    }

    /// Like [`Self::error`], but silent until the field was touched.
    pub fn visible_error(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .filter(|field| field.touched)
            .and_then(|_| self.error(name))
    }

    pub fn invalid_fields(&self) -> Vec<String> {
        self.fields
            .keys()
            .filter(|name| self.error(name).is_some())
            .cloned()
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.fields.keys().all(|name| self.error(name).is_none())
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && self.is_valid()
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    pub fn values(&self) -> FormValues {
        self.fields
            .iter()
            .map(|(name, field)| (name.clone(), field.value.clone()))
            .collect()
    }

    /// Touches every field, then enters the submitting phase if all rules pass.
    pub fn begin_submit(&mut self) -> Result<FormValues, FormError> {
        if self.submitting {
            return Err(FormError::AlreadySubmitting);
        }
        for field in self.fields.values_mut() {
            field.touched = true;
        }
        let invalid = self.invalid_fields();
        if !invalid.is_empty() {
            return Err(FormError::Invalid(invalid));
        }
        self.submitting = true;
        Ok(self.values())
    }

    pub fn finish_submit(&mut self) {
        if self.submitting {
            self.submitting = false;
            self.submit_count += 1;
        }
    }

    /// Back to defaults, untouched.
    pub fn reset(&mut self) {
        for field in self.fields.values_mut() {
            field.value = field.default.clone();
            field.touched = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_form() -> FormState {
        FormState::new()
            .field("email", "", [Rule::Required, Rule::Email])
            .field("password", "", [Rule::Required])
            .field("role", "user", [])
    }

    #[test]
    fn required_rejects_blank_values() {
        assert_eq!(Rule::Required.check("  "), Err("This field is required".to_owned()));
        assert_eq!(Rule::Required.check("x"), Ok(()));
    }

    #[test]
    fn email_passes_empty_and_rejects_malformed() {
        assert_eq!(Rule::Email.check(""), Ok(()));
        assert_eq!(Rule::Email.check("alex@minimax.io"), Ok(()));
        assert!(Rule::Email.check("not-an-email").is_err());
    }

    #[test]
    fn min_length_counts_characters() {
        assert!(Rule::MinLength(8).check("short").is_err());
        assert_eq!(Rule::MinLength(8).check("long enough"), Ok(()));
        assert_eq!(Rule::MinLength(8).check(""), Ok(()));
    }

    #[test]
    fn first_failing_rule_is_reported() {
        let mut form = contact_form();
        assert_eq!(form.error("email"), Some("This field is required".to_owned()));

        form.set_value("email", "nope").unwrap();
        assert_eq!(form.error("email"), Some("Enter a valid email address".to_owned()));
    }

    #[test]
    fn errors_stay_hidden_until_touched() {
        let mut form = contact_form();
        assert_eq!(form.visible_error("password"), None);
        form.touch("password");
        assert_eq!(form.visible_error("password"), Some("This field is required".to_owned()));
    }

    #[test]
    fn defaults_are_initial_values() {
        let form = contact_form();
        assert_eq!(form.value("role"), Some("user"));
        assert!(form.is_required("email"));
        assert!(!form.is_required("role"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let mut form = contact_form();
        assert_eq!(
            form.set_value("phone", "1"),
            Err(FormError::UnknownField("phone".to_owned()))
        );
    }

    #[test]
    fn invalid_submit_touches_everything_and_lists_fields() {
        let mut form = contact_form();
        let error = form.begin_submit().unwrap_err();
        assert_eq!(error, FormError::Invalid(vec!["email".to_owned(), "password".to_owned()]));
        assert!(!form.is_submitting());
        assert!(form.visible_error("email").is_some());
    }

    #[test]
    fn submit_lifecycle_blocks_double_submission() {
        let mut form = contact_form();
        form.set_value("email", "alex@minimax.io").unwrap();
        form.set_value("password", "hunter22").unwrap();
        assert!(form.can_submit());

        let values = form.begin_submit().unwrap();
        assert_eq!(values.get("role").map(String::as_str), Some("user"));
        assert!(form.is_submitting());
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(), Err(FormError::AlreadySubmitting));

        form.finish_submit();
        assert!(form.can_submit());
        assert_eq!(form.submit_count(), 1);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = contact_form();
        form.set_value("role", "admin").unwrap();
        form.reset();
        assert_eq!(form.value("role"), Some("user"));
        assert_eq!(form.visible_error("email"), None);
    }
}
