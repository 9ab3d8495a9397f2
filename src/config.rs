//! Process-wide REPL configuration: the handful of toggles named in
//! the external interfaces (trace_eval, single_step, eta_reduction,
//! lambda_character, abstraction_delimiter). Guarded the way the teacher
//! guards its own shared, rarely-written state (`once_cell::sync::Lazy`
//! behind a `parking_lot::RwLock`), rather than threading a config value
//! through every call in the core.

use once_cell::sync::Lazy;
use parking_lot::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub trace_eval: bool,
    pub single_step: bool,
    pub eta_reduction: bool,
    pub lambda_character: char,
    pub abstraction_delimiter: char,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            trace_eval: false,
            single_step: false,
            eta_reduction: true,
            lambda_character: '%',
            abstraction_delimiter: '.',
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

pub fn get() -> Config {
    *CONFIG.read()
}

pub fn set(new: Config) {
    *CONFIG.write() = new;
}

pub fn trace_eval() -> bool {
    CONFIG.read().trace_eval
}

pub fn single_step() -> bool {
    CONFIG.read().single_step
}

pub fn eta_reduction() -> bool {
    CONFIG.read().eta_reduction
}

pub fn lambda_character() -> char {
    CONFIG.read().lambda_character
}

pub fn abstraction_delimiter() -> char {
    CONFIG.read().abstraction_delimiter
}

pub fn set_trace_eval(val: bool) {
    CONFIG.write().trace_eval = val;
}

pub fn set_single_step(val: bool) {
    CONFIG.write().single_step = val;
}

pub fn set_eta_reduction(val: bool) {
    CONFIG.write().eta_reduction = val;
}
