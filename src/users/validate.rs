use lazy_static::lazy_static;
use regex::Regex;

use super::dto::{CreateUserRequest, UpdateUserRequest};
use super::error::{DirectoryError, DirectoryResult};
use super::model::{NewUser, UserChanges};

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

impl CreateUserRequest {
    pub fn validate(self) -> DirectoryResult<NewUser> {
        if !is_valid_email(&self.email) {
            return Err(DirectoryError::Validation("Invalid email".into()));
        }
        if self.password.is_empty() {
            return Err(DirectoryError::Validation("Password is required".into()));
        }
        Ok(NewUser {
            name: self.name,
            email: self.email,
            password: self.password,
        })
    }
}

impl UpdateUserRequest {
    pub fn validate(self) -> DirectoryResult<UserChanges> {
        let email = self.email.unwrap_or_default();
        if !email.is_empty() && !is_valid_email(&email) {
            return Err(DirectoryError::Validation("Invalid email".into()));
        }
        Ok(UserChanges {
            name: self.name.unwrap_or_default(),
            email,
            password: self.password.filter(|p| !p.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("a@x"));
        assert!(!is_valid_email("no-at.example.com"));
        assert!(!is_valid_email("a b@x.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn create_requires_password_and_email() {
        let ok = CreateUserRequest {
            name: "Alice".into(),
            email: "a@x.com".into(),
            password: "secret1".into(),
        }
        .validate()
        .unwrap();
        assert_eq!(ok.name, "Alice");
        assert_eq!(ok.password, "secret1");

        let err = CreateUserRequest {
            name: "Alice".into(),
            email: "a@x.com".into(),
            password: String::new(),
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, DirectoryError::Validation(_)));

        let err = CreateUserRequest {
            name: "Alice".into(),
            email: "alice".into(),
            password: "secret1".into(),
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, DirectoryError::Validation(_)));
    }

    #[test]
    fn update_defaults_missing_fields() {
        let req: UpdateUserRequest = serde_json::from_str("{}").unwrap();
        let changes = req.validate().unwrap();
        assert_eq!(changes.name, "");
        assert_eq!(changes.email, "");
        assert!(changes.password.is_none());
    }

    #[test]
    fn update_drops_empty_password() {
        let req: UpdateUserRequest =
            serde_json::from_str(r#"{"name":"Bob","email":"b@x.com","password":""}"#).unwrap();
        let changes = req.validate().unwrap();
        assert_eq!(changes.name, "Bob");
        assert!(changes.password.is_none());
    }

    #[test]
    fn update_rejects_malformed_email() {
        let req: UpdateUserRequest = serde_json::from_str(r#"{"email":"bob"}"#).unwrap();
        assert!(matches!(
            req.validate().unwrap_err(),
            DirectoryError::Validation(_)
        ));
    }
}
