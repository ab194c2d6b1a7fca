// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # rawtx
//!
//! Entry point for the `rawtx` binary. Parses CLI arguments, initializes
//! logging and runs one command against `rawtx-core`.
//!
//! The binary supports three subcommands:
//!
//! - `build`   print the raw hex of an unsigned transaction
//! - `decode`  show what an address decodes to
//! - `version` print build version information
//!
//! On any failure the process exits non-zero and prints no transaction.

mod cli;
mod logging;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::Serialize;

use rawtx_core::address::decode_address;
use rawtx_core::config::{Network, TX_VERSION};
use rawtx_core::encoding::ChecksumVariant;
use rawtx_core::transaction::{build_unsigned_transaction, BuildParams};

use cli::{Commands, RawtxCli};
use logging::LogFormat;

fn main() -> Result<()> {
    let cli = RawtxCli::parse();

    logging::init_logging(
        logging::DEFAULT_FILTER,
        LogFormat::from_str_lossy(&cli.log_format),
    );

    match cli.command {
        Commands::Build(args) => build(args),
        Commands::Decode(args) => decode(args),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Builds the transaction, prints the raw hex on stdout and the metadata
/// as JSON on stderr.
fn build(args: cli::BuildArgs) -> Result<()> {
    let mut params = BuildParams::new(
        args.prev_txid,
        args.vout,
        args.input_sats,
        args.address,
        args.fee_rate,
    );
    if let Some(name) = args.network.as_deref() {
        params = params.network(parse_network(name)?);
    }

    tracing::info!(
        prev_txid = %params.prev_txid,
        vout = params.vout,
        input_sats = params.input_sats,
        destination = %params.destination,
        fee_rate = params.fee_rate,
        "building unsigned transaction"
    );

    let built = build_unsigned_transaction(&params).with_context(|| {
        format!(
            "failed to build transaction to {}",
            params.destination
        )
    })?;

    tracing::info!(
        txid = %built.txid,
        vbytes = built.info.vbytes,
        fee = built.info.fee,
        output_sats = built.info.output_sats,
        "transaction built"
    );

    let info = serde_json::to_string_pretty(&built.info).context("failed to encode info")?;
    eprintln!("{}", info);
    println!("{}", built.raw_hex);
    Ok(())
}

/// What `rawtx decode` prints.
#[derive(Debug, Serialize)]
struct DecodeReport {
    address: String,
    family: String,
    network: Network,
    payload_hex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    checksum: Option<ChecksumVariant>,
    script_pubkey_hex: String,
}

fn decode(args: cli::DecodeArgs) -> Result<()> {
    let decoded = decode_address(&args.address)
        .with_context(|| format!("failed to decode {}", args.address))?;

    let report = DecodeReport {
        family: decoded.family().to_string(),
        network: decoded.network(),
        payload_hex: hex::encode(decoded.payload()),
        checksum: decoded.checksum(),
        script_pubkey_hex: decoded.script_pubkey().to_hex(),
        address: args.address,
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("failed to encode report")?
    );
    Ok(())
}

fn parse_network(name: &str) -> Result<Network> {
    Network::from_name(name)
        .ok_or_else(|| anyhow!("unknown network '{}' (expected mainnet, testnet or regtest)", name))
}

fn print_version() {
    println!("rawtx      {}", env!("CARGO_PKG_VERSION"));
    println!("tx version {}", TX_VERSION);
}
