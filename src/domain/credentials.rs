use secrecy::Secret;

/// Email/password pair sent to `POST /api/AuthAccount/Login`.
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub email: String,
    pub password: Secret<String>,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Secret::new(password.into()),
        }
    }
}
