//! Contact form validation
//!
//! Every field has a minimum length; the email must look like an address.
//! A form is only handed to the submit handler once all fields pass.

/// Fields of the contact form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    CompanyName,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 6] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::CompanyName,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::FirstName => "First name",
            ContactField::LastName => "Last name",
            ContactField::Email => "Email",
            ContactField::CompanyName => "Company name",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    /// Minimum number of characters, for length-checked fields
    pub fn min_length(&self) -> Option<usize> {
        match self {
            ContactField::FirstName | ContactField::LastName | ContactField::CompanyName => {
                Some(2)
            }
            ContactField::Subject => Some(5),
            ContactField::Message => Some(20),
            ContactField::Email => None,
        }
    }
}

/// Validation error of one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// Value shorter than the field's minimum
    TooShort { field: ContactField, min: usize },
    /// Email address is malformed
    InvalidEmail,
}

impl ContactError {
    pub fn field(&self) -> ContactField {
        match self {
            ContactError::TooShort { field, .. } => *field,
            ContactError::InvalidEmail => ContactField::Email,
        }
    }
}

impl std::fmt::Display for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactError::TooShort { field, min } => {
                write!(f, "{} must be at least {} characters", field.label(), min)
            }
            ContactError::InvalidEmail => write!(f, "Please enter a valid email address"),
        }
    }
}

impl std::error::Error for ContactError {}

/// Contents of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company_name: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::CompanyName => &self.company_name,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Email => &mut self.email,
            ContactField::CompanyName => &mut self.company_name,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Validate a single field
    pub fn validate_field(&self, field: ContactField) -> Result<(), ContactError> {
        let value = self.value(field);
        match field.min_length() {
            Some(min) if value.chars().count() < min => Err(ContactError::TooShort { field, min }),
            Some(_) => Ok(()),
            None if is_valid_email(value) => Ok(()),
            None => Err(ContactError::InvalidEmail),
        }
    }

    /// Validate every field, collecting all errors in field order
    pub fn validate(&self) -> Result<(), Vec<ContactError>> {
        let errors: Vec<ContactError> = ContactField::ALL
            .iter()
            .filter_map(|field| self.validate_field(*field).err())
            .collect();

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Run `handler` with the form if it is valid; otherwise return the errors
    /// without calling it.
    pub fn submit<F>(self, handler: F) -> Result<(), Vec<ContactError>>
    where
        F: FnOnce(ContactForm),
    {
        self.validate()?;
        handler(self);
        Ok(())
    }
}

/// Structural email check: `local@domain.tld`, no whitespace, one `@`.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() || local.starts_with('.') || local.ends_with('.') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_alphanumeric() || c == '-')
    });

    let tld_ok = labels
        .last()
        .is_some_and(|tld| tld.chars().count() >= 2 && tld.chars().all(char::is_alphabetic));

    labels_ok && tld_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            first_name: "Ana".to_string(),
            last_name: "Silva".to_string(),
            email: "ana.silva@example.com".to_string(),
            company_name: "Studio Lumen".to_string(),
            subject: "Demo request".to_string(),
            message: "I'd like to see the CRM for my salon.".to_string(),
        }
    }

    #[test]
    fn test_valid_form_is_submitted() {
        let mut submitted = None;
        let result = valid_form().submit(|form| submitted = Some(form));
        assert!(result.is_ok());
        assert_eq!(submitted, Some(valid_form()));
    }

    #[test]
    fn test_short_message_blocks_submission() {
        let mut form = valid_form();
        form.message = "Too short message".to_string();

        let mut called = false;
        let errors = form.submit(|_| called = true).unwrap_err();

        assert!(!called);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field(), ContactField::Message);
        assert_eq!(errors[0].to_string(), "Message must be at least 20 characters");
    }

    #[test]
    fn test_all_errors_reported_in_order() {
        let errors = ContactForm::default().validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(ContactError::field).collect();
        assert_eq!(fields, ContactField::ALL.to_vec());
    }

    #[test]
    fn test_error_messages() {
        let form = ContactForm::default();
        let messages: Vec<String> = ContactField::ALL
            .iter()
            .map(|f| form.validate_field(*f).unwrap_err().to_string())
            .collect();
        assert_eq!(
            messages,
            vec![
                "First name must be at least 2 characters",
                "Last name must be at least 2 characters",
                "Please enter a valid email address",
                "Company name must be at least 2 characters",
                "Subject must be at least 5 characters",
                "Message must be at least 20 characters",
            ]
        );
    }

    #[test]
    fn test_length_counts_characters() {
        let mut form = valid_form();
        form.first_name = "É".to_string();
        assert!(form.validate_field(ContactField::FirstName).is_err());
        form.first_name = "Éa".to_string();
        assert!(form.validate_field(ContactField::FirstName).is_ok());
    }

    #[test]
    fn test_set_and_value() {
        let mut form = ContactForm::default();
        for field in ContactField::ALL {
            form.set(field, field.label().to_string());
            assert_eq!(form.value(field), field.label());
        }
    }

    #[test]
    fn test_email_validation() {
        for ok in ["a@b.co", "first.last@sub.example.org", "x+tag@my-domain.ch"] {
            assert!(is_valid_email(ok), "{} should be valid", ok);
        }
        for bad in [
            "",
            "plain",
            "@example.com",
            "a@",
            "a@b",
            "a@b.c",
            "a@@b.com",
            "a b@c.com",
            "a@-b.com",
            "a@b..com",
            ".a@b.com",
            "a@b.c0m",
        ] {
            assert!(!is_valid_email(bad), "{} should be invalid", bad);
        }
    }
}
