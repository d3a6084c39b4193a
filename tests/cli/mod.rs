//! The binary, driven through its command line.
use std::process::{Command, Output};

mod test;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tableau-simplex"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}
