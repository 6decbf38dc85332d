//! Template substitution and tokenizing.

mod clean;
mod error;
mod extract;
mod insert;
mod tokenize;
mod value;

pub use clean::{CleanMethod, CleanOptions, clean};
pub use error::TextError;
pub use extract::extract;
pub use insert::{Format, InsertOptions, insert};
pub use tokenize::{TokenizeOptions, tokenize};
pub use value::{Data, Value};
