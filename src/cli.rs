//! Command-line flags, in the shape of the teacher's own `cli.rs`: a
//! `structopt`-derived `Opt` struct whose fields seed `config.rs` before
//! the REPL starts.

use std::path::PathBuf;

use structopt::StructOpt;

use crate::config::Config;

#[derive(Debug, StructOpt)]
#[structopt(name = "lc", about = "An interactive untyped lambda-calculus interpreter")]
pub struct Opt {
    /// Print the substitution performed at every reduction step.
    #[structopt(long = "trace")]
    pub trace_eval: bool,

    /// Pause for input after every reduction step.
    #[structopt(long = "step")]
    pub single_step: bool,

    /// Disable eta reduction (enabled by default).
    #[structopt(long = "no-eta")]
    pub no_eta: bool,

    /// Character used for abstraction ("lambda").
    #[structopt(long = "lambda-char", default_value = "%")]
    pub lambda_character: char,

    /// Character used to separate an abstraction's bound variable from
    /// its body.
    #[structopt(long = "delim-char", default_value = ".")]
    pub abstraction_delimiter: char,

    /// A file of definitions (`let name = expr` lines) to load before
    /// starting the REPL.
    #[structopt(long = "load", parse(from_os_str))]
    pub load: Option<PathBuf>,
}

impl Opt {
    pub fn to_config(&self) -> Config {
        Config {
            trace_eval: self.trace_eval,
            single_step: self.single_step,
            eta_reduction: !self.no_eta,
            lambda_character: self.lambda_character,
            abstraction_delimiter: self.abstraction_delimiter,
        }
    }
}
