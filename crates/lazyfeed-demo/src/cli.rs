#![forbid(unsafe_code)]

//! Command-line argument parsing for the feed demo.
//!
//! Parses args by hand and supports environment overrides via the
//! `LAZYFEED_DEMO_*` prefix. Flags win over environment values.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
lazyfeed demo: scroll reveal and infinite pagination on a card feed

USAGE:
    lazyfeed-demo [OPTIONS]

OPTIONS:
    --config=PATH        Load feed config from a .toml or .json file
    --steps=N            Number of scripted scroll steps (default: 6)
    --step-rows=N        Rows scrolled per step; 0 jumps to the bottom (default: 12)
    --viewport=WxH       Override the viewport size (e.g., 40x24)
    --batch-size=N       Override cards generated per batch
    --show-ids           Prefix card text with its element id
    --quiet              Skip frame output, print only the summary
    --log-json           Emit logs and the summary as JSON lines
    --help, -h           Show this help message
    --version, -V        Show version

ENVIRONMENT VARIABLES:
    LAZYFEED_DEMO_CONFIG      Override --config
    LAZYFEED_DEMO_STEPS       Override --steps
    LAZYFEED_DEMO_STEP_ROWS   Override --step-rows
    LAZYFEED_DEMO_VIEWPORT    Override --viewport
    LAZYFEED_DEMO_BATCH_SIZE  Override --batch-size
    LAZYFEED_DEMO_SHOW_IDS    Enable --show-ids (1/true)
    LAZYFEED_DEMO_QUIET       Enable --quiet (1/true)
    LAZYFEED_DEMO_LOG_JSON    Enable --log-json (1/true)
    RUST_LOG                  Log filter (default: warn)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Config file path; built-in defaults when absent.
    pub config: Option<String>,
    /// Scripted scroll steps after the initial settle.
    pub steps: u32,
    /// Rows per step; zero means jump to the bottom.
    pub step_rows: u32,
    /// Viewport override as (width, height).
    pub viewport: Option<(u32, u32)>,
    /// Batch size override.
    pub batch_size: Option<usize>,
    pub show_ids: bool,
    pub quiet: bool,
    pub log_json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseError {
    Help,
    Version,
    InvalidValue { flag: &'static str, value: String },
    UnknownArg(String),
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            config: None,
            steps: 6,
            step_rows: 12,
            viewport: None,
            batch_size: None,
            show_ids: false,
            quiet: false,
            log_json: false,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn parse() -> Self {
        match Self::parse_from_env_and_args(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(opts) => opts,
            Err(ParseError::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Err(ParseError::Version) => {
                println!("lazyfeed-demo {VERSION}");
                process::exit(0);
            }
            Err(ParseError::InvalidValue { flag, value }) => {
                eprintln!("Invalid {flag} value: {value}");
                process::exit(1);
            }
            Err(ParseError::UnknownArg(arg)) => {
                eprintln!("Unknown argument: {arg}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    fn parse_from_env_and_args<I, S, F>(args: I, get_env: F) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(val) = get_env("LAZYFEED_DEMO_CONFIG")
            && !val.trim().is_empty()
        {
            opts.config = Some(val);
        }
        if let Some(val) = get_env("LAZYFEED_DEMO_STEPS")
            && let Ok(n) = val.parse()
        {
            opts.steps = n;
        }
        if let Some(val) = get_env("LAZYFEED_DEMO_STEP_ROWS")
            && let Ok(n) = val.parse()
        {
            opts.step_rows = n;
        }
        if let Some(val) = get_env("LAZYFEED_DEMO_VIEWPORT")
            && let Some(size) = parse_size(&val)
        {
            opts.viewport = Some(size);
        }
        if let Some(val) = get_env("LAZYFEED_DEMO_BATCH_SIZE")
            && let Ok(n) = val.parse()
        {
            opts.batch_size = Some(n);
        }
        if let Some(val) = get_env("LAZYFEED_DEMO_SHOW_IDS") {
            opts.show_ids = is_enabled(&val);
        }
        if let Some(val) = get_env("LAZYFEED_DEMO_QUIET") {
            opts.quiet = is_enabled(&val);
        }
        if let Some(val) = get_env("LAZYFEED_DEMO_LOG_JSON") {
            opts.log_json = is_enabled(&val);
        }

        for arg in args {
            match arg.as_ref() {
                "--help" | "-h" => return Err(ParseError::Help),
                "--version" | "-V" => return Err(ParseError::Version),
                "--show-ids" => opts.show_ids = true,
                "--quiet" => opts.quiet = true,
                "--log-json" => opts.log_json = true,
                other => {
                    if let Some(val) = other.strip_prefix("--config=") {
                        if val.is_empty() {
                            return Err(ParseError::InvalidValue {
                                flag: "--config",
                                value: val.to_string(),
                            });
                        }
                        opts.config = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--steps=") {
                        opts.steps = parse_value("--steps", val)?;
                    } else if let Some(val) = other.strip_prefix("--step-rows=") {
                        opts.step_rows = parse_value("--step-rows", val)?;
                    } else if let Some(val) = other.strip_prefix("--batch-size=") {
                        opts.batch_size = Some(parse_value("--batch-size", val)?);
                    } else if let Some(val) = other.strip_prefix("--viewport=") {
                        match parse_size(val) {
                            Some(size) => opts.viewport = Some(size),
                            None => {
                                return Err(ParseError::InvalidValue {
                                    flag: "--viewport",
                                    value: val.to_string(),
                                });
                            }
                        }
                    } else {
                        return Err(ParseError::UnknownArg(other.to_string()));
                    }
                }
            }
        }

        Ok(opts)
    }
}

fn parse_value<T: std::str::FromStr>(flag: &'static str, val: &str) -> Result<T, ParseError> {
    val.parse().map_err(|_| ParseError::InvalidValue {
        flag,
        value: val.to_string(),
    })
}

fn is_enabled(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

fn parse_size(raw: &str) -> Option<(u32, u32)> {
    let mut parts = raw.trim().split(['x', 'X']);
    let width: u32 = parts.next()?.parse().ok()?;
    let height: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((width, height))
}
