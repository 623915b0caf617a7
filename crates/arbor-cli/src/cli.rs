//! Command-line argument parsing.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.

use std::env;
use std::process;

use arbor_core::LabelStyle;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
arbor: render an AVL tree of integer keys as an SVG image

USAGE:
    arbor [OPTIONS] [KEY]...

ARGS:
    KEY...           Integer keys, inserted in the given order
                     (duplicate keys are ignored)

OPTIONS:
    --labels=STYLE   Node labels: 'plain' (default) or 'position'
    --output=SINK    'stdout' (default) or 'serve' (one-shot HTTP response)
    --port=N         Port for --output=serve (default: 8000)
    --canvas=WxH     Canvas size in pixels (default: 800x600)
    --format=FORMAT  'svg' (default) or 'json' (positioned-layout dump)
    --help, -h       Show this help message
    --version, -V    Show version

Only tokens starting with '--' are treated as options, so negative keys
such as -5 work unquoted.

ENVIRONMENT VARIABLES:
    RUST_LOG         Log filter (env_logger syntax), e.g. RUST_LOG=info";

/// Where the rendered bytes go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSink {
    Stdout,
    Serve,
}

/// What gets emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Json,
}

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    pub labels: LabelStyle,
    pub output: OutputSink,
    pub port: u16,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub format: OutputFormat,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            labels: LabelStyle::Plain,
            output: OutputSink::Stdout,
            port: 8000,
            canvas_width: 800,
            canvas_height: 600,
            format: OutputFormat::Svg,
        }
    }
}

/// Outcome of parsing an argument list.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseOutcome {
    Run(Opts, Vec<String>),
    Help,
    Version,
}

impl Opts {
    /// Parse `std::env::args`, exiting on `--help`, `--version`, or errors.
    pub fn parse() -> (Self, Vec<String>) {
        let args: Vec<String> = env::args().skip(1).collect();
        match Self::parse_from(&args) {
            Ok(ParseOutcome::Run(opts, operands)) => (opts, operands),
            Ok(ParseOutcome::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(ParseOutcome::Version) => {
                println!("arbor {VERSION}");
                process::exit(0);
            }
            Err(message) => {
                eprintln!("{message}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Parse an argument list. Non-option tokens are returned as operands.
    pub fn parse_from(args: &[String]) -> Result<ParseOutcome, String> {
        let mut opts = Self::default();
        let mut operands = Vec::new();

        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(ParseOutcome::Help),
                "--version" | "-V" => return Ok(ParseOutcome::Version),
                other => {
                    if let Some(val) = other.strip_prefix("--labels=") {
                        opts.labels = match val {
                            "plain" => LabelStyle::Plain,
                            "position" => LabelStyle::Position,
                            _ => return Err(format!("Invalid --labels value: {val}")),
                        };
                    } else if let Some(val) = other.strip_prefix("--output=") {
                        opts.output = match val {
                            "stdout" => OutputSink::Stdout,
                            "serve" => OutputSink::Serve,
                            _ => return Err(format!("Invalid --output value: {val}")),
                        };
                    } else if let Some(val) = other.strip_prefix("--port=") {
                        opts.port = val
                            .parse()
                            .map_err(|_| format!("Invalid --port value: {val}"))?;
                    } else if let Some(val) = other.strip_prefix("--canvas=") {
                        let (width, height) = parse_canvas(val)
                            .ok_or_else(|| format!("Invalid --canvas value: {val}"))?;
                        opts.canvas_width = width;
                        opts.canvas_height = height;
                    } else if let Some(val) = other.strip_prefix("--format=") {
                        opts.format = match val {
                            "svg" => OutputFormat::Svg,
                            "json" => OutputFormat::Json,
                            _ => return Err(format!("Invalid --format value: {val}")),
                        };
                    } else if other.starts_with("--") {
                        return Err(format!("Unknown argument: {other}"));
                    } else {
                        operands.push(other.to_string());
                    }
                }
            }
        }

        Ok(ParseOutcome::Run(opts, operands))
    }
}

/// Parse a `WIDTHxHEIGHT` pair, e.g. `800x600`. Zero dimensions are rejected
/// later, at the render boundary.
fn parse_canvas(value: &str) -> Option<(u32, u32)> {
    let (width, height) = value.split_once('x')?;
    Some((width.parse().ok()?, height.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn default_opts() {
        let opts = Opts::default();
        assert_eq!(opts.labels, LabelStyle::Plain);
        assert_eq!(opts.output, OutputSink::Stdout);
        assert_eq!(opts.port, 8000);
        assert_eq!(opts.canvas_width, 800);
        assert_eq!(opts.canvas_height, 600);
        assert_eq!(opts.format, OutputFormat::Svg);
    }

    #[test]
    fn keys_pass_through_as_operands() {
        let outcome = Opts::parse_from(&args(&["5", "3", "-8"])).unwrap();
        let ParseOutcome::Run(opts, operands) = outcome else {
            panic!("expected run outcome");
        };
        assert_eq!(opts, Opts::default());
        assert_eq!(operands, ["5", "3", "-8"]);
    }

    #[test]
    fn flags_and_operands_mix() {
        let outcome = Opts::parse_from(&args(&[
            "--labels=position",
            "5",
            "--output=serve",
            "--port=9090",
            "--canvas=1024x768",
            "3",
        ]))
        .unwrap();
        let ParseOutcome::Run(opts, operands) = outcome else {
            panic!("expected run outcome");
        };
        assert_eq!(opts.labels, LabelStyle::Position);
        assert_eq!(opts.output, OutputSink::Serve);
        assert_eq!(opts.port, 9090);
        assert_eq!((opts.canvas_width, opts.canvas_height), (1024, 768));
        assert_eq!(operands, ["5", "3"]);
    }

    #[test]
    fn help_and_version_short_circuit() {
        assert_eq!(
            Opts::parse_from(&args(&["-h", "5"])).unwrap(),
            ParseOutcome::Help
        );
        assert_eq!(
            Opts::parse_from(&args(&["--version"])).unwrap(),
            ParseOutcome::Version
        );
    }

    #[test]
    fn invalid_values_are_errors() {
        assert!(Opts::parse_from(&args(&["--labels=bogus"])).is_err());
        assert!(Opts::parse_from(&args(&["--port=notaport"])).is_err());
        assert!(Opts::parse_from(&args(&["--canvas=800"])).is_err());
        assert!(Opts::parse_from(&args(&["--format=png"])).is_err());
        assert!(Opts::parse_from(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn parse_canvas_pairs() {
        assert_eq!(parse_canvas("800x600"), Some((800, 600)));
        assert_eq!(parse_canvas("1x1"), Some((1, 1)));
        assert_eq!(parse_canvas("800"), None);
        assert_eq!(parse_canvas("800x"), None);
        assert_eq!(parse_canvas("x600"), None);
    }

    #[test]
    fn help_text_mentions_every_flag() {
        for flag in ["--labels", "--output", "--port", "--canvas", "--format"] {
            assert!(HELP_TEXT.contains(flag), "missing {flag} in help");
        }
    }
}
