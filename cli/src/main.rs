use clap::Parser;
use crate::args::Args;
use crate::commands::simulate;

mod args;
mod commands;


fn main() {
    env_logger::init();
    let args = Args::parse();
    simulate(&args.input_file, &args.output_file);
}
