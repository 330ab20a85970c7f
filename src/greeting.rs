//! Greeting formatter.
//!
//! `hello` is the only entry point. It substitutes the name into a fixed
//! template verbatim: no trimming, escaping or validation, so the empty string
//! is a valid name.

/// Return a greeting for `name`.
///
/// ```
/// assert_eq!(
///     greetings_lib::greeting::hello("World"),
///     "Hello, World. Nice to meet you!"
/// );
/// ```
pub fn hello(name: &str) -> String {
    format!("Hello, {}. Nice to meet you!", name)
}
