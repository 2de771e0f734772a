use std::io;
use std::path::PathBuf;
use std::process;

use alian_syntax::config::{self, Config};
use alian_syntax::repl::{self, Mode};
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(name = "alian")]
struct Opt {
    /// `tokens` echoes every token of a line, `ast` parses it
    #[structopt(short, long, default_value = "tokens")]
    mode: Mode,

    /// Parser config file, defaults to `.alian.yml` in the current or home directory
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,
}

fn load_config(opt: &Opt) -> Config {
    match &opt.config {
        Some(path) => config::load_from(path).unwrap_or_else(|err| {
            eprintln!("{}: {}", path.display(), err);
            process::exit(1);
        }),
        None => config::load_config(std::env::current_dir().ok().as_deref()).unwrap_or_else(
            |err| {
                eprintln!("{}", err);
                process::exit(1);
            },
        ),
    }
}

fn main() {
    let opt = Opt::from_args();
    let config = load_config(&opt);
    println!("Welcome to the 👽 programming language in {}!\n", opt.mode);

    let stdin = io::stdin();
    if let Err(err) = repl::start(stdin.lock(), io::stdout(), opt.mode, &config.parser) {
        eprintln!("{}", err);
        process::exit(1);
    }
}
