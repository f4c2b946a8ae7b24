use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use xid::Xid;

/// Largest batch `xid new` will produce in one run.
pub const MAX_COUNT: usize = 1_000_000;

/// Command-line arguments for the `xid` binary.
///
/// Options of `new` fall back to environment variables (and a `.env` file in
/// the working directory) when not given on the command line.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "xid",
    version,
    about = "Generate, inspect and convert globally unique, sortable XIDs"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate new IDs from a single process-wide generator.
    New(NewArgs),
    /// Decode IDs and print every field.
    Inspect(InspectArgs),
    /// Convert 24 hex digits (12 raw bytes) into the text form.
    Encode {
        /// The raw ID as hex, with or without a `0x` prefix.
        hex: String,
    },
    /// Convert the text form into 24 hex digits.
    Decode {
        /// A 20-character ID.
        id: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct NewArgs {
    /// Number of IDs to generate.
    ///
    /// Environment variable: `XID_COUNT`
    #[arg(short = 'n', long, env = "XID_COUNT", default_value_t = 1)]
    pub count: usize,

    /// Output format.
    ///
    /// Environment variable: `XID_FORMAT`
    #[arg(short, long, env = "XID_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Clock backing the generator.
    ///
    /// `monotonic` never steps backward within the run; `system` follows the
    /// wall clock on every call.
    ///
    /// Environment variable: `XID_CLOCK`
    #[arg(long, env = "XID_CLOCK", value_enum, default_value_t = ClockKind::Monotonic)]
    pub clock: ClockKind,
}

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// IDs to inspect.
    #[arg(required = true)]
    pub ids: Vec<String>,

    /// Print one JSON object per ID instead of a text table.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One 20-character ID per line.
    Text,
    /// One 24-digit hex string per line.
    Hex,
    /// A JSON array of IDs.
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockKind {
    System,
    Monotonic,
}

/// Validated form of [`CliArgs`]. Every ID the user passed has already been
/// parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliConfig {
    New {
        count: usize,
        format: OutputFormat,
        clock: ClockKind,
    },
    Inspect {
        ids: Vec<Xid>,
        json: bool,
    },
    Encode {
        id: Xid,
    },
    Decode {
        id: Xid,
    },
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        match args.command {
            Command::New(new) => {
                if new.count == 0 {
                    bail!("XID_COUNT must be greater than 0");
                }
                if new.count > MAX_COUNT {
                    bail!(
                        "XID_COUNT ({}) exceeds the maximum of {MAX_COUNT}",
                        new.count
                    );
                }
                Ok(Self::New {
                    count: new.count,
                    format: new.format,
                    clock: new.clock,
                })
            }
            Command::Inspect(inspect) => {
                let ids = inspect
                    .ids
                    .iter()
                    .map(|s| Xid::decode(s).with_context(|| format!("cannot decode `{s}`")))
                    .collect::<anyhow::Result<_>>()?;
                Ok(Self::Inspect {
                    ids,
                    json: inspect.json,
                })
            }
            Command::Encode { hex } => {
                let bytes =
                    parse_hex(&hex).with_context(|| format!("cannot parse `{hex}` as hex"))?;
                let id = Xid::from_slice(&bytes)?;
                Ok(Self::Encode { id })
            }
            Command::Decode { id } => {
                let parsed = Xid::decode(&id).with_context(|| format!("cannot decode `{id}`"))?;
                Ok(Self::Decode { id: parsed })
            }
        }
    }
}

/// Parses an even number of hex digits, with an optional `0x` prefix.
///
/// The length is not checked against [`xid::RAW_LEN`] here so that a
/// wrong-length input surfaces as the library's own raw-length error.
pub fn parse_hex(input: &str) -> anyhow::Result<Vec<u8>> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    hex::decode(digits).context("expected hex digits")
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Mutex, MutexGuard, PoisonError};

    // `new` reads `XID_*` from the process environment, so every parse holds
    // this lock to keep the env tests from leaking into the others.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn parse_unlocked(argv: &[&str]) -> anyhow::Result<CliConfig> {
        let args = CliArgs::try_parse_from(argv)?;
        CliConfig::try_from(args)
    }

    fn parse(argv: &[&str]) -> anyhow::Result<CliConfig> {
        let _guard = env_lock();
        parse_unlocked(argv)
    }

    fn parse_with_env(vars: &[(&str, &str)], argv: &[&str]) -> anyhow::Result<CliConfig> {
        let _guard = env_lock();
        for (key, value) in vars {
            // SAFETY: ENV_LOCK serializes every test that touches the environment.
            unsafe { std::env::set_var(key, value) };
        }
        let result = parse_unlocked(argv);
        for (key, _) in vars {
            // SAFETY: as above.
            unsafe { std::env::remove_var(key) };
        }
        result
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }

    #[test]
    fn parse_hex_accepts_prefix_and_case() {
        assert_eq!(parse_hex("0x00ff").unwrap(), vec![0x00, 0xff]);
        assert_eq!(parse_hex("ABcd").unwrap(), vec![0xab, 0xcd]);
        assert!(parse_hex("").unwrap().is_empty());
    }

    #[test]
    fn parse_hex_rejects_garbage() {
        let hex_error = |input: &str| {
            parse_hex(input)
                .unwrap_err()
                .downcast::<hex::FromHexError>()
                .unwrap()
        };
        assert_eq!(hex_error("abc"), hex::FromHexError::OddLength);
        assert_eq!(
            hex_error("zz"),
            hex::FromHexError::InvalidHexCharacter { c: 'z', index: 0 }
        );
        assert!(matches!(
            hex_error("+1"),
            hex::FromHexError::InvalidHexCharacter { c: '+', .. }
        ));
        assert!(parse_hex("é0").is_err());
        assert!(parse_hex("0x0x00").is_err());
    }

    #[test]
    fn new_uses_defaults() {
        let config = parse(&["xid", "new"]).unwrap();
        assert_eq!(
            config,
            CliConfig::New {
                count: 1,
                format: OutputFormat::Text,
                clock: ClockKind::Monotonic,
            }
        );
    }

    #[test]
    fn new_validates_count() {
        assert!(parse(&["xid", "new", "-n", "0"]).is_err());
        assert!(parse(&["xid", "new", "-n", "1000001"]).is_err());
        assert!(parse(&["xid", "new", "-n", "-3"]).is_err());

        let config = parse(&["xid", "new", "-n", "1000000", "--format", "json"]).unwrap();
        assert_eq!(
            config,
            CliConfig::New {
                count: MAX_COUNT,
                format: OutputFormat::Json,
                clock: ClockKind::Monotonic,
            }
        );
    }

    #[test]
    fn new_falls_back_to_env() {
        let config = parse_with_env(
            &[("XID_COUNT", "7"), ("XID_FORMAT", "hex"), ("XID_CLOCK", "system")],
            &["xid", "new"],
        )
        .unwrap();
        assert_eq!(
            config,
            CliConfig::New {
                count: 7,
                format: OutputFormat::Hex,
                clock: ClockKind::System,
            }
        );
    }

    #[test]
    fn flags_override_env() {
        let config = parse_with_env(
            &[("XID_COUNT", "7"), ("XID_FORMAT", "hex")],
            &["xid", "new", "-n", "3", "--format", "json"],
        )
        .unwrap();
        assert_eq!(
            config,
            CliConfig::New {
                count: 3,
                format: OutputFormat::Json,
                clock: ClockKind::Monotonic,
            }
        );
    }

    #[test]
    fn env_values_are_validated() {
        let err = parse_with_env(&[("XID_COUNT", "0")], &["xid", "new"]).unwrap_err();
        assert!(err.to_string().contains("XID_COUNT"), "{err:#}");
        assert!(parse_with_env(&[("XID_FORMAT", "yaml")], &["xid", "new"]).is_err());
        assert!(parse_with_env(&[("XID_CLOCK", "lunar")], &["xid", "new"]).is_err());
    }

    #[test]
    fn new_rejects_unknown_format() {
        assert!(parse(&["xid", "new", "--format", "yaml"]).is_err());
        assert!(parse(&["xid", "new", "--clock", "lunar"]).is_err());
    }

    #[test]
    fn encode_parses_raw_bytes() {
        let config = parse(&["xid", "encode", "000000014d88e1e42ea18c6e"]).unwrap();
        assert_eq!(
            config,
            CliConfig::Encode {
                id: Xid::decode("000000adh3gu8bl1hhn0").unwrap()
            }
        );
    }

    #[test]
    fn encode_rejects_wrong_length() {
        let err = parse(&["xid", "encode", "0000000014d88e1e42ea18c"]).unwrap_err();
        assert!(err.to_string().contains("hex"), "{err:#}");

        let err = parse(&["xid", "encode", "00000000014d88e1e42ea18c6e"]).unwrap_err();
        assert!(err.to_string().contains("xid: invalid ID"), "{err:#}");
    }

    #[test]
    fn decode_and_inspect_reject_invalid_ids() {
        assert!(parse(&["xid", "decode", "000000ADH3GU8BL1HHN0"]).is_err());
        assert!(parse(&["xid", "inspect", "000000adh3gu8bl1hhn0", "nope"]).is_err());
        assert!(parse(&["xid", "inspect"]).is_err());
    }

    #[test]
    fn inspect_collects_every_id() {
        let config = parse(&[
            "xid",
            "inspect",
            "--json",
            "000000adh3gu8bl1hhn0",
            "9m4e2mr0ui3e8a215n4g",
        ])
        .unwrap();
        let CliConfig::Inspect { ids, json } = config else {
            panic!("expected inspect, got {config:?}");
        };
        assert!(json);
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[0].timestamp(), 1);
    }
}
