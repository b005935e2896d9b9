//! Update outcome conversion.

use crate::error::BoxError;

/// Trait for converting an observer callback's return value into an update
/// outcome.
///
/// # Default Implementations
///
/// - `()` → success
/// - `Result<T, E>` → delegates to inner `T`, or boxes `E`
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `IntoUpdate`",
    label = "observer callbacks must return `()` or `Result<_, E>`",
    note = "IntoUpdate must implement the `into_update` method."
)]
pub trait IntoUpdate {
    /// Convert the value into success or an opaque error.
    fn into_update(self) -> Result<(), BoxError>;
}

impl IntoUpdate for () {
    fn into_update(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<T, E> IntoUpdate for Result<T, E>
where
    T: IntoUpdate,
    E: Into<BoxError>,
{
    fn into_update(self) -> Result<(), BoxError> {
        match self {
            Ok(t) => t.into_update(),
            Err(e) => Err(e.into()),
        }
    }
}
