use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("A worker exited without reporting its results.")]
    MissingWorkerResult,
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
