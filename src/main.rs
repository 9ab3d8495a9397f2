#[cfg(feature = "mimalloc")]
use mimallocator::Mimalloc;

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: Mimalloc = Mimalloc;

use structopt::StructOpt;

use lc::{cli, config, load_definitions, repl};

fn main() {
    let opt = cli::Opt::from_args();
    config::set(opt.to_config());

    if let Some(path) = &opt.load {
        load_definitions(path);
    }

    repl::run();
}
