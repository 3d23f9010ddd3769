#![forbid(unsafe_code)]
mod cli;

fn main() {
    cli::Entry::main();
}
