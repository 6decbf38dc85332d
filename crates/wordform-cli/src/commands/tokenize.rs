//! Implementation of the `wordform tokenize` command.

use clap::Args;
use wordform::{tokenize, TokenizeOptions};

use super::print_json;

/// Arguments for the tokenize command.
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// Text to split
    pub input: String,

    /// Token separator
    #[arg(long, default_value = ",")]
    pub separator: String,

    /// Marker opening a bounded group
    #[arg(long, default_value = "(")]
    pub left: String,

    /// Marker closing a bounded group
    #[arg(long, default_value = ")")]
    pub right: String,

    /// Output as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Run the tokenize command.
pub fn run_tokenize(args: TokenizeArgs) -> miette::Result<i32> {
    let options = TokenizeOptions::builder()
        .separator(args.separator)
        .left_bound(args.left)
        .right_bound(args.right)
        .build();
    let tokens = tokenize(&args.input, &options);

    if args.json {
        print_json(&tokens);
    } else {
        for token in &tokens {
            println!("{}", token);
        }
    }
    Ok(exitcode::OK)
}
