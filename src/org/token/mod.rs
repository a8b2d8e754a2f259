//! Token types produced by the line classifier
//!
//!     Org syntax is line oriented: every structural element can be recognized from a single
//!     physical line, its indentation and the lines around it. The lexer therefore produces
//!     exactly one [LineToken] per source line and the parser works on those tokens only.

mod line;

pub use line::{
    Bullet, Checkbox, HeaderLine, LineDetail, LineToken, LineType, ListItemLine, TodoLine,
};
