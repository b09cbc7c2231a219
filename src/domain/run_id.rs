use chrono::{DateTime, Local, TimeZone};

/// Timestamp-derived identifier that keeps tourist names and emails
/// unique across repeated runs of the suite.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RunId(String);

impl RunId {
    const FORMAT: &'static str = "%Y%m%d%H%M%S";

    /// Compute the identifier for this process from the local clock.
    pub fn generate() -> Self {
        Self::from_timestamp(Local::now())
    }

    pub fn from_timestamp<Tz>(timestamp: DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self(timestamp.format(Self::FORMAT).to_string())
    }

    pub fn tourist_name(&self) -> String {
        format!("user{}", self.0)
    }

    pub fn tourist_email(&self) -> String {
        format!("email{}@email.com", self.0)
    }
}

impl AsRef<str> for RunId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
