//! Send a command to a PN532 behind an SPIDriver.
//!
//! Usage:
//!   cargo run -p pn532 --features spidriver --bin pn532-probe -- /dev/ttyUSB0
//!   RUST_LOG=debug cargo run -p pn532 --features spidriver --bin pn532-probe -- \
//!       /dev/ttyUSB0 --opcode 14 --data "01 14 01"

use anyhow::{Context, Result, bail};
use clap::Parser;

use pn532::prelude::*;
use pn532::transport::SpiDriver;

#[derive(Parser)]
#[command(name = "pn532-probe")]
#[command(about = "Write a PN532 host command frame over an SPIDriver", long_about = None)]
struct Cli {
    /// Serial port the SPIDriver is attached to
    port: String,

    /// Command code in hex (default: GetFirmwareVersion)
    #[arg(long)]
    opcode: Option<String>,

    /// Command parameters as hex bytes, whitespace allowed
    #[arg(long, default_value = "")]
    data: String,
}

fn parse_opcode(s: &str) -> Result<u8> {
    match parse_hex(s).map_err(anyhow::Error::msg)?.as_slice() {
        [op] => Ok(*op),
        other => bail!("opcode must be exactly one byte, got {}", other.len()),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let args = parse_hex(&cli.data)
        .map_err(anyhow::Error::msg)
        .context("invalid --data")?;
    let cmd = match &cli.opcode {
        Some(op) => Command::new(parse_opcode(op).context("invalid --opcode")?, args),
        None if args.is_empty() => Command::get_firmware_version(),
        None => bail!("--data requires --opcode"),
    };

    let frame = encode_command_frame(&cmd)?;
    match cmd.code() {
        Some(code) => println!("{}: {}", code, HexBytes(&frame)),
        None => println!("command {:#04x}: {}", cmd.opcode(), HexBytes(&frame)),
    }

    let bus = SpiDriver::open(&cli.port)
        .with_context(|| format!("failed to open SPIDriver on {}", cli.port))?;
    let mut pn532 = Pn532::new(bus);
    pn532.send_command(&cmd)?;

    println!("frame written; response reading is not implemented");
    Ok(())
}
