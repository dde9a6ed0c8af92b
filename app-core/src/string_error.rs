use std::fmt::Display;

/// Convert any displayable error into a `String` error with some context.
pub trait ErrorStringExt<T> {
    fn err_to_string(self, context: &str) -> Result<T, String>;
}

impl<T, E: Display> ErrorStringExt<T> for Result<T, E> {
    fn err_to_string(self, context: &str) -> Result<T, String> {
        self.map_err(|err| format!("{context}: {err}"))
    }
}

impl<T> ErrorStringExt<T> for Option<T> {
    fn err_to_string(self, context: &str) -> Result<T, String> {
        self.ok_or_else(|| context.to_string())
    }
}
