#![forbid(unsafe_code)]

pub mod abbrev;
pub mod analysis;
pub mod atom;
pub mod cli;
pub mod config;
pub mod errors;
pub mod expr;
pub mod interrupt;
pub mod lexer;
pub mod parser;
pub mod pretty;
pub mod reduction;
pub mod repl;
pub mod subst;
pub mod transforms;
pub mod varset;

use std::fs;
use std::path::Path;

use crate::parser::Line;

/// Load `let`-definitions from a file into the abbreviation table, used
/// by both the CLI's `--load` flag and anything that wants to seed a
/// session programmatically (tests, an embedder).
pub fn load_definitions(path: &Path) {
    let contents = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("could not read {}: {}", path.display(), e);
            return;
        }
    };

    for (lineno, line) in contents.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match parser::parse_line(trimmed) {
            Ok(Line::Definition(name, expr)) => {
                let expanded = abbrev::expand(&expr);
                abbrev::insert(name, expanded);
            }
            Ok(Line::Expression(_)) => {
                eprintln!("{}:{}: only 'let' definitions are loaded from a file", path.display(), lineno + 1);
            }
            Err(e) => {
                eprintln!("{}:{}: {}", path.display(), lineno + 1, e);
            }
        }
    }
}
