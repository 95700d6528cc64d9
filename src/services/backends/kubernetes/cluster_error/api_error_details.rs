use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorDetails {
    pub code: u16,
    pub message: String,
    pub reason: String,
}

impl ApiErrorDetails {
    pub fn new(code: u16, message: String, reason: String) -> Self {
        ApiErrorDetails { code, message, reason }
    }
}

impl Display for ApiErrorDetails {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (self.reason.is_empty(), self.message.is_empty()) {
            (false, false) => write!(f, "status {} ({}): {}", self.code, self.reason, self.message),
            (false, true) => write!(f, "status {} ({})", self.code, self.reason),
            (true, false) => write!(f, "status {}: {}", self.code, self.message),
            (true, true) => write!(f, "status {}", self.code),
        }
    }
}
