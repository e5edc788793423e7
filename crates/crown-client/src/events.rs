use serde::Serialize;

pub const TITLE_SUCCESS: &str = "Success";
pub const TITLE_CONGRATS: &str = "Congrats!";
pub const TITLE_CORRECT: &str = "Correct!";
pub const TITLE_INCORRECT: &str = "Incorrect";

/// A one-shot acknowledgement the host shows as an alert or toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: &'static str,
    pub message: String,
}

impl Notice {
    pub fn new(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            title,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(TITLE_SUCCESS, message)
    }
}
