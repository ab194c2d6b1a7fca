//! # CLI Interface
//!
//! Defines the command-line argument structure for `rawtx` using `clap`
//! derive. Supports three subcommands: `build`, `decode` and `version`.
//! Every build parameter can also come from a `RAWTX_*` environment
//! variable.

use clap::{Parser, Subcommand};

/// Unsigned raw transaction builder.
///
/// Spends one previous output to one destination address and prints the
/// raw transaction hex. Nothing is signed or broadcast.
#[derive(Parser, Debug)]
#[command(
    name = "rawtx",
    about = "Unsigned raw transaction builder",
    version,
    propagate_version = true
)]
pub struct RawtxCli {
    /// Log output format: `pretty` or `json`. Logs always go to stderr.
    #[arg(long, global = true, env = "RAWTX_LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build an unsigned transaction and print its raw hex.
    Build(BuildArgs),
    /// Decode an address and print its family, network and locking script.
    Decode(DecodeArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for the `build` subcommand.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Previous transaction id, 64 hex characters in display order.
    #[arg(long, env = "RAWTX_PREV_TXID")]
    pub prev_txid: String,

    /// Index of the output being spent.
    #[arg(long, env = "RAWTX_VOUT", default_value_t = 0)]
    pub vout: u32,

    /// Value of the output being spent, in sats.
    #[arg(long, env = "RAWTX_INPUT_SATS")]
    pub input_sats: u64,

    /// Destination address (P2PKH, P2SH or witness).
    #[arg(long, env = "RAWTX_ADDRESS")]
    pub address: String,

    /// Fee rate in sats per vbyte.
    #[arg(long, env = "RAWTX_FEE_RATE")]
    pub fee_rate: u64,

    /// Reject destinations outside this network: mainnet, testnet or regtest.
    #[arg(long, env = "RAWTX_NETWORK")]
    pub network: Option<String>,
}

/// Arguments for the `decode` subcommand.
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// Address to decode.
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        // Ensures the derive macros produce a valid CLI definition.
        RawtxCli::command().debug_assert();
    }

    #[test]
    fn parses_build_flags() {
        let cli = RawtxCli::try_parse_from([
            "rawtx",
            "build",
            "--prev-txid",
            "c30b486d2c65299a1df82d851adac158a0ec5c40aad20d9d7905c1c3aed44f49",
            "--input-sats",
            "20000",
            "--address",
            "39C7fxSzEACPjM78Z7xdPxhf7mKxJwvfMJ",
            "--fee-rate",
            "20",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.log_format, "json");
        match cli.command {
            Commands::Build(args) => {
                assert_eq!(args.vout, 0);
                assert_eq!(args.input_sats, 20_000);
                assert_eq!(args.fee_rate, 20);
                assert!(args.network.is_none());
            }
            other => panic!("expected build, got {other:?}"),
        }
    }

    #[test]
    fn build_requires_amounts() {
        let result = RawtxCli::try_parse_from([
            "rawtx",
            "build",
            "--prev-txid",
            "00",
            "--address",
            "1abc",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn decode_takes_positional_address() {
        let cli = RawtxCli::try_parse_from(["rawtx", "decode", "bc1p40xsd3p3kd"]).unwrap();
        match cli.command {
            Commands::Decode(args) => assert_eq!(args.address, "bc1p40xsd3p3kd"),
            other => panic!("expected decode, got {other:?}"),
        }
    }
}
