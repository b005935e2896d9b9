//! Message trait for contexts and subject states.

/// A marker trait for values that flow through strategies and observers.
///
/// Strategy contexts and published states must be `Send + Sync + 'static` so
/// that dispatchers and hubs can be moved between threads.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone, Debug)]
/// struct Category(String);
///
/// impl Message for Category {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Message",
    label = "must be `Send + Sync + 'static`",
    note = "Strategy contexts and subject states must be thread-safe and static."
)]
pub trait Message: Send + Sync + 'static {}

impl Message for () {}
impl Message for bool {}
impl Message for u32 {}
impl Message for u64 {}
impl Message for i32 {}
impl Message for i64 {}
impl Message for String {}
impl Message for &'static str {}
impl<T: Message> Message for Box<T> {}
impl<T: Message> Message for std::sync::Arc<T> {}
impl<T: Message> Message for Vec<T> {}
impl<T: Message> Message for Option<T> {}
impl<T: Message, E: Message> Message for Result<T, E> {}
