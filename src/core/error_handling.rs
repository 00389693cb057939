//! Generic error handling utilities
//!
//! Provides unified fatal-error reporting that works across the crate's error types.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// # Implementation Consistency
/// When `is_user_actionable()` returns `true`, `user_message()` should return
/// `Some(message)` with a helpful, actionable message. When it returns `false`,
/// `user_message()` should return `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if this error carries a message that should be shown to the user as-is
    ///
    /// Examples of user-actionable errors:
    /// - Malformed manifest or target version
    /// - Configuration errors with clear fixes
    ///
    /// Examples of system errors:
    /// - IO failures
    fn is_user_actionable(&self) -> bool;

    /// Returns the specific user message if this is a user-actionable error
    fn user_message(&self) -> Option<String>;
}

/// Log a fatal error with a detail level based on error specificity
///
/// User-actionable errors log their own message. System errors log the operation
/// context followed by the error. The debug representation is always logged at
/// debug level.
///
/// # Examples
/// ```rust,no_run
/// # use appversion::core::error_handling::log_error_with_context;
/// # use appversion::bumper::api::BumpError;
/// let err = BumpError::InputFormat { input: "latest".to_string() };
/// log_error_with_context(&err, "Bumping version in pubspec.yaml");
/// // Logs: "FATAL: Invalid target version 'latest': expected MAJOR.MINOR.PATCH"
/// ```
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    log::error!("FATAL: {}", fatal_message(error, operation_context));
    log::debug!("DEBUG_DETAILS: {:?}", error);
}

/// Primary line used by [`log_error_with_context`], without the `FATAL:` prefix
pub fn fatal_message<E: ContextualError + std::fmt::Display>(
    error: &E,
    operation_context: &str,
) -> String {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => user_msg,
        _ => format!("{}: {}", operation_context, error),
    }
}
