use std::error::Error;

/// Format the message logged by [`report_error`].
pub fn error_message(location: &str, err: &dyn Error) -> String {
    format!("Location: {location} ~ Error: {err}")
}

/// Log `err` at error level, tagged with where it happened.
pub fn report_error(location: &str, err: &dyn Error) {
    tracing::error!("{}", error_message(location, err));
}
