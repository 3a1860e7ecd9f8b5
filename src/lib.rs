pub mod error;
pub mod parser;
pub mod sequence;
pub mod types;
pub mod value;

pub use error::{Error, Result};
pub use parser::parse_format_spec;
pub use sequence::{Range, ensure_iterable, range};
pub use types::*;
pub use value::{Formattable, format_value};
