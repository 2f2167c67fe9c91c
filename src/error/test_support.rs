use super::{ConfigError, RunError};

impl From<&'static str> for ConfigError {
    fn from(message: &'static str) -> Self {
        ConfigError::TestExpectation { message }
    }
}

impl From<String> for ConfigError {
    fn from(value: String) -> Self {
        ConfigError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for RunError {
    fn from(message: &'static str) -> Self {
        RunError::TestExpectation { message }
    }
}

impl From<String> for RunError {
    fn from(value: String) -> Self {
        RunError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}
