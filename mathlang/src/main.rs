use std::process::ExitCode;

use mathlang_driver::{Argument, Parser};

fn main() -> ExitCode { mathlang_driver::run(Argument::parse()) }
