mod error;
mod quote;
mod scanner;
mod split;

pub use error::SplitError;
pub use quote::{join_args, quote_arg};
pub use scanner::Token;
pub use split::{command_tail, tokenize, tokens, CommandLine};
