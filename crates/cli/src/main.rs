//! amountfmt - display wallet amounts in a preferred currency.

mod config;
mod pretty;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use amountfmt_core::{
    parse_input_amount, ConverterSession, DisplayAmount, FormatOptions, RawAmount, TableConverter,
};
use clap::Parser;
use colored::{control::set_override, Colorize};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use crate::config::Config;
use crate::pretty::PrettyConfig;

const LONG_ABOUT: &str = r##"
amountfmt turns loosely formatted amounts into display strings in your
preferred currency.

Bare integers are read as satoshis and bare decimals as BSV. Amounts with a
currency code are read in that currency and converted.

EXAMPLES:
  amountfmt 100                 100 satoshis in your preferred currency
  amountfmt 0.5 -c EUR          Half a BSV in euro
  amountfmt "USD 1,234.50"      Dollars with grouping
  amountfmt 1 -c USD            Tiny amounts show full precision in parentheses
  amountfmt -p "5 GBP"          Show what the input parses as
  echo 2.5 | amountfmt -j       Piped input, JSON output

CONFIGURATION:
  Precedence: CLI args > Environment vars > Config file > Defaults

  Setting            | CLI flag          | Env var             | Default
  -------------------|-------------------|---------------------|---------
  preferred_currency | -c, --currency    | AMOUNTFMT_CURRENCY  | USD
  decimal_places     | -d, --decimals    | AMOUNTFMT_DECIMALS  | automatic
  use_commas         | --no-commas       |                     | true
  use_underscores    | -u, --underscores |                     | false
  no_color           | -C, --no-color    | AMOUNTFMT_NO_COLOR  | false

  Exchange rates live in the [rates] table of the config file.
  Config file location: amountfmt --config-path
  Generate default config: amountfmt --config-init

  Note: NO_COLOR env var is also respected (https://no-color.org/)"##;

#[derive(Parser)]
#[command(name = "amountfmt")]
#[command(version)]
#[command(about = "Display wallet amounts in your preferred currency")]
#[command(long_about = LONG_ABOUT)]
struct Cli {
    /// Amounts to display, e.g. 100, 0.5, "USD 12.50"
    #[arg(value_name = "AMOUNT", allow_hyphen_values = true)]
    amounts: Vec<String>,

    /// Currency to display amounts in
    #[arg(long, short = 'c', value_name = "CODE")]
    currency: Option<String>,

    /// Force a fixed number of decimal places
    #[arg(long, short = 'd', value_name = "N")]
    decimals: Option<u32>,

    /// Do not group thousands with commas
    #[arg(long)]
    no_commas: bool,

    /// Group thousands with underscores
    #[arg(long, short = 'u')]
    underscores: bool,

    /// Output results as JSON (for scripting/piping)
    #[arg(long, short = 'j')]
    json: bool,

    /// Show the parsed magnitude and inferred currency only
    #[arg(long, short = 'p')]
    parse: bool,

    /// Disable colored output
    #[arg(long, short = 'C')]
    no_color: bool,

    /// List the exchange rates in use
    #[arg(long)]
    rates: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Show config file location
    #[arg(long)]
    config_path: bool,

    /// Create default config file
    #[arg(long)]
    config_init: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    if level != LevelFilter::OFF {
        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Settings after merging CLI, environment and config file.
#[derive(Debug)]
struct Settings {
    preferred_currency: String,
    options: FormatOptions,
    no_color: bool,
}

impl Settings {
    fn resolve(cli: &Cli, config: &Config) -> Self {
        let preferred_currency = match cli.currency {
            Some(ref code) => {
                tracing::debug!("preferred currency {} from command line", code);
                code.to_uppercase()
            }
            None => config.preferred_currency(),
        };

        let mut options = FormatOptions::new();
        if let Some(places) = cli.decimals.or_else(|| config.decimal_places()) {
            options = options.with_decimal_places(places);
        }
        if cli.no_commas {
            options = options.with_commas(false);
        } else if let Some(enabled) = config.use_commas {
            options = options.with_commas(enabled);
        }
        if cli.underscores {
            options = options.with_underscores(true);
        } else if let Some(enabled) = config.use_underscores {
            options = options.with_underscores(enabled);
        }

        let no_color = cli.no_color || config.no_color();
        tracing::debug!(
            "resolved settings: currency={} options={:?} no_color={}",
            preferred_currency,
            options,
            no_color
        );

        Self {
            preferred_currency,
            options,
            no_color,
        }
    }
}

/// Amounts from the command line, or one per line of piped stdin.
fn collect_inputs(cli: &Cli) -> io::Result<Vec<String>> {
    if !cli.amounts.is_empty() {
        return Ok(cli.amounts.clone());
    }
    if io::stdin().is_terminal() {
        return Ok(Vec::new());
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn print_json<T: serde::Serialize>(values: &[T]) {
    let json = if values.len() == 1 {
        serde_json::to_string_pretty(&values[0])
    } else {
        serde_json::to_string_pretty(values)
    };
    match json {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("{}: Failed to serialize output: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn print_rates(config: &Config) {
    let rates = config.rates();
    println!(
        "{} {}",
        "Rates per 1".cyan(),
        rates.base.to_uppercase().yellow().bold()
    );
    for (code, rate) in config::sorted_rates(&rates) {
        println!("  {:<6} {}", code, rate);
    }
    let mut units: Vec<_> = rates.units.iter().collect();
    units.sort_by(|a, b| a.0.cmp(b.0));
    for (code, unit) in units {
        println!(
            "  {:<6} {}",
            code,
            format!("(1 = {} {})", unit.factor, unit.base_currency).dimmed()
        );
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.config_path {
        match Config::path() {
            Some(path) => println!("{}", path.display()),
            None => {
                eprintln!("{}: Cannot determine config directory", "error".red().bold());
                std::process::exit(1);
            }
        }
        return;
    }

    if cli.config_init {
        match config::init_config() {
            Ok(path) => println!("Created config file: {}", path.display()),
            Err(e) => {
                eprintln!("{}: {}", "error".red().bold(), e);
                std::process::exit(1);
            }
        }
        return;
    }

    let config = match cli.config {
        Some(ref path) => {
            tracing::debug!("loading config from {}", path.display());
            Config::load_from(path)
        }
        None => Config::load(),
    };
    let settings = Settings::resolve(&cli, &config);

    if settings.no_color {
        set_override(false);
    }

    if cli.rates {
        print_rates(&config);
        return;
    }

    let inputs = match collect_inputs(&cli) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("{}: Failed to read stdin: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    };
    if inputs.is_empty() {
        eprintln!("{}: No amount provided", "error".red().bold());
        eprintln!();
        eprintln!("Usage: {} <AMOUNT>...", "amountfmt".bold());
        eprintln!();
        eprintln!("Run {} for more information.", "amountfmt --help".bold());
        std::process::exit(1);
    }

    let pretty = PrettyConfig {
        color: !settings.no_color,
        label: inputs.len() > 1,
    };

    if cli.parse {
        let parsed: Vec<_> = inputs
            .iter()
            .map(|input| parse_input_amount(&RawAmount::from(input.as_str())))
            .collect();
        if cli.json {
            print_json(&parsed);
        } else {
            for (input, parsed) in inputs.iter().zip(&parsed) {
                println!("{}", pretty::render_parsed(input, parsed.as_ref(), &pretty));
            }
        }
        return;
    }

    let converter = TableConverter::new(config.rates(), &settings.preferred_currency);
    let session = match ConverterSession::open(converter).await {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    };

    let mut shown: Vec<DisplayAmount> = Vec::with_capacity(inputs.len());
    for input in &inputs {
        match session
            .format(&RawAmount::from(input.as_str()), &settings.options)
            .await
        {
            Ok(display) => shown.push(display),
            Err(e) => {
                eprintln!("{}: {}: {}", "error".red().bold(), input, e);
                drop(session);
                std::process::exit(1);
            }
        }
    }
    drop(session);

    if cli.json {
        print_json(&shown);
    } else {
        for (input, display) in inputs.iter().zip(&shown) {
            println!("{}", pretty::render_display(input, display, &pretty));
        }
    }
}
