use core::str::FromStr;

use serde::{Deserialize, Serialize};

use ecosprout_core::{DomainError, DomainResult};

/// Kind of inquiry selected on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryType {
    #[default]
    General,
    Quote,
    Partnership,
    Support,
}

impl InquiryType {
    pub const ALL: [InquiryType; 4] = [
        InquiryType::General,
        InquiryType::Quote,
        InquiryType::Partnership,
        InquiryType::Support,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryType::General => "general",
            InquiryType::Quote => "quote",
            InquiryType::Partnership => "partnership",
            InquiryType::Support => "support",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InquiryType::General => "General Inquiry",
            InquiryType::Quote => "Request Quote",
            InquiryType::Partnership => "Partnership",
            InquiryType::Support => "Customer Support",
        }
    }
}

impl FromStr for InquiryType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "general" => Ok(InquiryType::General),
            "quote" => Ok(InquiryType::Quote),
            "partnership" => Ok(InquiryType::Partnership),
            "support" => Ok(InquiryType::Support),
            other => Err(DomainError::validation(format!(
                "inquiry type must be one of: general, quote, partnership, support (got '{other}')"
            ))),
        }
    }
}

/// Raw contact form contents as entered by the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub inquiry_type: InquiryType,
}

impl ContactSubmission {
    /// Names of required fields that are blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Validate the submission.
    ///
    /// Fails with `DomainError::Validation` when a required field is blank or
    /// the email address has no `local@domain` shape.
    pub fn validate(self) -> DomainResult<ValidatedSubmission> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(DomainError::validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }

        if !looks_like_email(self.email.trim()) {
            return Err(DomainError::validation(format!(
                "'{}' is not a valid email address",
                self.email.trim()
            )));
        }

        Ok(ValidatedSubmission(self))
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// A submission that passed [`ContactSubmission::validate`].
///
/// Only validated submissions can be sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidatedSubmission(ContactSubmission);

impl ValidatedSubmission {
    pub fn get(&self) -> &ContactSubmission {
        &self.0
    }

    pub fn into_inner(self) -> ContactSubmission {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ContactSubmission {
        ContactSubmission {
            name: "Alex Chen".to_string(),
            email: "alex@greentech.example".to_string(),
            company: Some("GreenTech Solutions".to_string()),
            subject: "Bulk order".to_string(),
            message: "We need 10k boxes.".to_string(),
            inquiry_type: InquiryType::Quote,
        }
    }

    #[test]
    fn complete_submission_validates() {
        let validated = complete().validate().unwrap();
        assert_eq!(validated.get().inquiry_type, InquiryType::Quote);
    }

    #[test]
    fn empty_message_is_rejected() {
        let mut form = complete();
        form.message = String::new();

        let err = form.validate().unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("message")),
            _ => panic!("Expected Validation error for empty message"),
        }
    }

    #[test]
    fn whitespace_only_fields_count_as_missing() {
        let form = ContactSubmission {
            name: "  ".to_string(),
            subject: "\t".to_string(),
            ..complete()
        };
        assert_eq!(form.missing_fields(), vec!["name", "subject"]);
    }

    #[test]
    fn company_is_optional() {
        let form = ContactSubmission {
            company: None,
            ..complete()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["no-at-sign", "@example.com", "alex@", "a b@example.com", "a@b@c"] {
            let form = ContactSubmission {
                email: email.to_string(),
                ..complete()
            };
            assert!(form.validate().is_err(), "expected '{email}' to be rejected");
        }
    }

    #[test]
    fn inquiry_type_defaults_to_general_on_the_wire() {
        let json = serde_json::json!({
            "name": "n", "email": "e@x.io", "subject": "s", "message": "m"
        });
        let form: ContactSubmission = serde_json::from_value(json).unwrap();
        assert_eq!(form.inquiry_type, InquiryType::General);
        assert_eq!(form.company, None);
    }

    #[test]
    fn validated_submission_serializes_like_the_form() {
        let validated = complete().validate().unwrap();
        let json = serde_json::to_value(&validated).unwrap();
        assert_eq!(json["inquiryType"], "quote");
        assert_eq!(json["company"], "GreenTech Solutions");
    }
}
