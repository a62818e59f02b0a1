//! Quote strings the way a POSIX shell would read them back, and undo that quoting.
//!
//! [`encode`] never fails: it leaves plain words alone, wraps text in single quotes when
//! that is enough, and otherwise falls back to double quotes with backslash escapes.
//! [`decode`] reverses it, reporting malformed escapes by code point offset.

mod decode;
mod encode;
mod error;
mod escape;
mod unicode;

pub use decode::decode;
pub use encode::encode;
pub use encode::encode_to;
pub use encode::quote_style;
pub use encode::QuoteStyle;
pub use error::DecodeError;
pub use error::ErrorKind;
pub use escape::escape_char;
