//! RV32I simulator CLI: run a bare-metal image and exit with the code it halts with.

use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use rv32i_core::{loader, Board, Config};

#[derive(Parser, Debug)]
#[command(name = "rv32i", author, version, about = "RV32I functional simulator")]
struct Cli {
    /// Bare-metal RV32I image to load at the reset address and execute.
    image: PathBuf,

    /// Dump PC and registers to stdout after every step.
    #[arg(long)]
    trace: bool,
}

fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    let image = loader::load_binary(&cli.image.to_string_lossy());

    let config = Config {
        trace_instructions: cli.trace,
        ..Config::default()
    };
    let mut board = Board::new(&config, &image);

    let code = if config.trace_instructions {
        let cpu = board.cpu_mut();
        while !cpu.halted() {
            cpu.step();
            cpu.dump_state();
        }
        cpu.csr(rv32i_core::csr::HALT)
    } else {
        board.run()
    };

    std::io::stdout().flush().ok();
    process::exit(code as i32);
}
