//! swatch - convert a color between CMYK, Lab, RGB and hex
//!
//! One-shot conversions print all representations at once; `session` keeps an
//! interactive editing session on stdin.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use swatch_core::Representation;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "swatch")]
#[command(author, version, about = "Convert colors between CMYK, Lab, RGB and hex")]
#[command(long_about = "
Converts one color into every supported representation.

CMYK is given in percent, Lab as L in [0, 100] and a/b in [-128, 127],
RGB as 0-255 per channel. Colors without an sRGB equivalent are clamped
for display and reported.

Examples:
  swatch from-rgb 255 0 0               # cmyk/lab/rgb/hex of pure red
  swatch from-cmyk 0 100 100 0
  swatch from-lab 50 -128 127           # out of gamut, clamped
  swatch from-hex '#0aab03' --json
  swatch session                        # interactive: select/set/hex/show
  RUST_LOG=swatch_session=trace swatch from-hex ff8800
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Machine-readable output (JSON)
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert from RGB (0-255 per channel)
    #[command(name = "from-rgb", visible_alias = "rgb")]
    FromRgb(ChannelArgs),

    /// Convert from CMYK (percent per channel)
    #[command(name = "from-cmyk", visible_alias = "cmyk")]
    FromCmyk(ChannelArgs),

    /// Convert from CIE Lab
    #[command(name = "from-lab", visible_alias = "lab")]
    FromLab(ChannelArgs),

    /// Convert from a #rrggbb hex color
    #[command(name = "from-hex", visible_alias = "hex")]
    FromHex(HexArgs),

    /// Interactive session reading commands from stdin
    #[command(visible_alias = "s")]
    Session,
}

#[derive(Args)]
struct ChannelArgs {
    /// Channel values in field order
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<String>,
}

#[derive(Args)]
struct HexArgs {
    /// Hex color, `#` optional
    hex: String,
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` picks the level.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose > 0)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::FromRgb(args) => commands::convert::run(Representation::Rgb, &args.values, cli.json),
        Commands::FromCmyk(args) => {
            commands::convert::run(Representation::Cmyk, &args.values, cli.json)
        }
        Commands::FromLab(args) => commands::convert::run(Representation::Lab, &args.values, cli.json),
        Commands::FromHex(args) => commands::convert::run_hex(&args.hex, cli.json),
        Commands::Session => commands::session::run(cli.json),
    }
}
