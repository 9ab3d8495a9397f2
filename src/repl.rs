//! The interactive loop: read a line, parse it, expand abbreviations,
//! reduce, print. Line editing and history are handled by `reedline`,
//! grounded on the same crate's use in `dhilipsiva-lojban-NeSy`'s own
//! REPL-shaped runner - the teacher itself has no interactive frontend to
//! draw from, since it's a batch type-checker.

use reedline::{DefaultPrompt, Reedline, Signal};

use crate::abbrev;
use crate::analysis::{alpha_equivalent_graphs, bound_vars, equivalent_graphs, free_vars};
use crate::atom::intern;
use crate::config;
use crate::errors::LambdaError;
use crate::interrupt;
use crate::parser::{parse_line, Line};
use crate::pretty::print_expression;
use crate::reduction::normal_order_reduction;
use crate::transforms::{deparameterize, goedelize};

pub fn run() {
    interrupt::install();
    let mut editor = Reedline::create();
    let prompt = DefaultPrompt::default();

    loop {
        match editor.read_line(&prompt) {
            Ok(Signal::Success(line)) => handle_line(&line),
            Ok(Signal::CtrlC) | Ok(Signal::CtrlD) => break,
            Err(e) => {
                eprintln!("input error: {}", e);
                break;
            }
        }
    }
}

fn handle_line(line: &str) {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return;
    }
    if let Some(directive) = trimmed.strip_prefix(':') {
        return handle_directive(directive);
    }

    match parse_line(trimmed) {
        Ok(Line::Definition(name, expr)) => {
            let expanded = abbrev::expand(&expr);
            abbrev::insert(name, expanded);
            println!("{} defined", name);
        }
        Ok(Line::Expression(expr)) => {
            let expanded = abbrev::expand(&expr);
            interrupt::reset();
            let reduced = normal_order_reduction(expanded, config::eta_reduction());
            println!("{}", print_expression(&reduced));
        }
        Err(e) => report_error(&e),
    }
}

fn handle_directive(directive: &str) {
    let mut parts = directive.split_whitespace();
    match parts.next() {
        Some("trace") => toggle(parts.next(), config::set_trace_eval),
        Some("step") => toggle(parts.next(), config::set_single_step),
        Some("eta") => toggle(parts.next(), config::set_eta_reduction),
        Some("free") => report_vars(parts.collect::<Vec<_>>().join(" "), free_vars),
        Some("bound") => report_vars(parts.collect::<Vec<_>>().join(" "), bound_vars),
        Some("eq") => report_binary(parts.collect::<Vec<_>>().join(" "), equivalent_graphs),
        Some("alpha") => report_binary(parts.collect::<Vec<_>>().join(" "), alpha_equivalent_graphs),
        Some("goedel") => report_unary(parts.collect::<Vec<_>>().join(" "), |e| goedelize(e)),
        Some("deparam") => handle_deparam(parts),
        Some("show") => handle_show(parts),
        Some(other) => println!("unknown directive ':{}'", other),
        None => {}
    }
}

fn toggle(arg: Option<&str>, set: fn(bool)) {
    match arg {
        Some("on") => set(true),
        Some("off") => set(false),
        _ => println!("expected 'on' or 'off'"),
    }
}

fn report_vars(source: String, f: fn(&crate::expr::Expr) -> crate::varset::VarSet) {
    match crate::parser::parse_expr(&source) {
        Ok(e) => {
            let vars: Vec<String> = f(&e).iter().map(|v| v.to_string()).collect();
            println!("{}", vars.join(" "));
        }
        Err(err) => report_error(&err),
    }
}

fn report_unary(source: String, f: fn(&crate::expr::Expr) -> crate::expr::Expr) {
    match crate::parser::parse_expr(&source) {
        Ok(e) => println!("{}", print_expression(&f(&e))),
        Err(err) => report_error(&err),
    }
}

fn report_binary(source: String, f: fn(&crate::expr::Expr, &crate::expr::Expr) -> bool) {
    let mut halves = source.splitn(2, '|');
    let (lhs, rhs) = match (halves.next(), halves.next()) {
        (Some(l), Some(r)) => (l, r),
        _ => {
            println!("expected 'lhs | rhs'");
            return;
        }
    };
    match (crate::parser::parse_expr(lhs.trim()), crate::parser::parse_expr(rhs.trim())) {
        (Ok(l), Ok(r)) => println!("{}", f(&l, &r)),
        (Err(err), _) | (_, Err(err)) => report_error(&err),
    }
}

fn handle_deparam<'a>(parts: impl Iterator<Item = &'a str>) {
    let rest: String = parts.collect::<Vec<_>>().join(" ");
    match crate::parser::parse_deparam(&rest) {
        Ok((count, e)) => println!("{}", print_expression(&deparameterize(e, count))),
        Err(err) => report_error(&err),
    }
}

fn handle_show<'a>(mut parts: impl Iterator<Item = &'a str>) {
    let name = match parts.next() {
        Some(n) => n,
        None => {
            println!("expected an abbreviation name");
            return;
        }
    };
    match abbrev::require(intern(name)) {
        Ok(e) => println!("{}", print_expression(&e)),
        Err(err) => report_error(&err),
    }
}

fn report_error(e: &LambdaError) {
    eprintln!("error: {}", e);
}
