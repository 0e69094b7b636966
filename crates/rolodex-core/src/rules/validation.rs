use std::fmt;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const PHONE_REQUIRED: &str = "Phone is required";

/// Per-field messages from a failed contact form validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub phone: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }

    pub fn messages(&self) -> impl Iterator<Item = &'static str> + '_ {
        [self.name, self.email, self.phone].into_iter().flatten()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.messages().collect();
        write!(f, "{}", messages.join(", "))
    }
}

impl std::error::Error for FieldErrors {}

/// Checks the required add/edit form fields. Every field is checked so the
/// caller can show all errors at once.
pub fn validate_contact_form(
    name: &str,
    email: &str,
    local_number: &str,
) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    if name.trim().is_empty() {
        errors.name = Some(NAME_REQUIRED);
    }
    if email.trim().is_empty() {
        errors.email = Some(EMAIL_REQUIRED);
    }
    if local_number.trim().is_empty() {
        errors.phone = Some(PHONE_REQUIRED);
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::{validate_contact_form, EMAIL_REQUIRED, NAME_REQUIRED, PHONE_REQUIRED};

    #[test]
    fn accepts_complete_form() {
        assert!(validate_contact_form("Ada", "ada@example.com", "555 0100").is_ok());
    }

    #[test]
    fn reports_every_missing_field() {
        let errors = validate_contact_form(" ", "", "").unwrap_err();
        assert_eq!(errors.name, Some(NAME_REQUIRED));
        assert_eq!(errors.email, Some(EMAIL_REQUIRED));
        assert_eq!(errors.phone, Some(PHONE_REQUIRED));
        assert_eq!(
            errors.to_string(),
            "Name is required, Email is required, Phone is required"
        );
    }

    #[test]
    fn reports_only_missing_phone() {
        let errors = validate_contact_form("Ada", "ada@example.com", "").unwrap_err();
        assert!(errors.name.is_none());
        assert!(errors.email.is_none());
        assert_eq!(errors.phone, Some(PHONE_REQUIRED));
    }
}
