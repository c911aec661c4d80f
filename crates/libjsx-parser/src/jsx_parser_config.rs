/// Tunables for [`JsxParser`](crate::JsxParser).
///
/// Deserializable so that tools embedding the parser can read it from
/// their own configuration files; missing fields take their defaults.
///
/// ```rust
/// use libjsx_parser::JsxParserConfig;
///
/// let config = JsxParserConfig {
///     max_recursion_depth: 16,
///     ..JsxParserConfig::default()
/// };
/// assert!(config.jsx);
/// ```
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct JsxParserConfig {
    /// Maximum nesting depth for recursive rules (JSX elements and
    /// fragments, parenthesized, unary, computed-member and call
    /// expressions).
    ///
    /// Prevents stack overflow from adversarial inputs like `<a><a><a>...`
    /// or `((((...`. Exceeding it is a `RecursionLimitExceeded` error.
    pub max_recursion_depth: usize,

    /// Whether JSX fragments and elements are accepted as primary
    /// expressions.
    pub jsx: bool,
}

impl JsxParserConfig {
    pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 64;
}

impl Default for JsxParserConfig {
    fn default() -> Self {
        Self {
            max_recursion_depth: Self::DEFAULT_MAX_RECURSION_DEPTH,
            jsx: true,
        }
    }
}
