//! This module provides the core token types produced by JSX scanners and
//! consumed by the parser.

mod jsx_token;
mod jsx_token_kind;
mod jsx_trivia_token;

pub use jsx_token::JsxToken;
pub use jsx_token::JsxTriviaTokenVec;
pub use jsx_token_kind::JsxTokenKind;
pub use jsx_trivia_token::JsxTriviaToken;
