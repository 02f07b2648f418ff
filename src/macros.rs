/// Compile a regular expression once and hand out a `&'static Regex`.
///
/// Every date grammar pattern goes through this so that matching a slot value
/// never recompiles anything.
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}
