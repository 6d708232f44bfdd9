//! Command facade: tokenizer and dispatch.

pub mod session;
pub mod stream;

pub use session::{Session, run_script};
pub use stream::TokenStream;
