//! Configuration file loading and environment variable handling.
//!
//! Precedence: CLI args > Environment vars > Config file > Defaults

use std::fs;
use std::path::{Path, PathBuf};

use amountfmt_core::RateTable;
use serde::Deserialize;

/// Default config file content for `--config-init`.
pub const DEFAULT_CONFIG: &str = r#"# amountfmt configuration
# See: amountfmt --help for all options

# Currency amounts are displayed in
preferred_currency = "USD"

# Force a fixed number of decimal places (omit for automatic precision)
# decimal_places = 2

# Group thousands with commas
use_commas = true

# Group thousands with underscores (wins over commas)
use_underscores = false

# Disable colored output
no_color = false

# Exchange rates: units of each currency per 1 unit of `base`.
# SATS is derived from BSV automatically.
[rates]
base = "USD"

[rates.rates]
BSV = 0.02
EUR = 0.92
GBP = 0.79
JPY = 150.0
CNY = 7.2
INR = 83.0
AUD = 1.52
CAD = 1.36
CHF = 0.88
HKD = 7.8
SGD = 1.34
NZD = 1.64
SEK = 10.5
NOK = 10.6
MXN = 17.0
"#;

/// Configuration loaded from file and environment.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub preferred_currency: Option<String>,
    pub decimal_places: Option<u32>,
    pub use_commas: Option<bool>,
    pub use_underscores: Option<bool>,
    pub no_color: Option<bool>,
    pub rates: Option<RateTable>,
}

impl Config {
    /// Get the config file path.
    ///
    /// - Linux/macOS: `~/.config/amountfmt/config.toml`
    /// - Windows: `%APPDATA%\amountfmt\config.toml`
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("amountfmt").join("config.toml"))
    }

    /// Load config from the default location. Returns default if the file
    /// doesn't exist.
    pub fn load() -> Self {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load config from a specific file. Returns default if it is missing or
    /// can't be parsed.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };

        toml::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse {}: {}", path.display(), e);
            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Read value from environment variable.
    fn env_var<T: std::str::FromStr>(name: &str) -> Option<T> {
        std::env::var(name).ok()?.parse().ok()
    }

    /// Get preferred currency with precedence: env > config > default.
    pub fn preferred_currency(&self) -> String {
        std::env::var("AMOUNTFMT_CURRENCY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.preferred_currency.clone())
            .unwrap_or_else(|| "USD".to_string())
            .to_uppercase()
    }

    /// Get forced decimal places with precedence: env > config.
    pub fn decimal_places(&self) -> Option<u32> {
        Self::env_var("AMOUNTFMT_DECIMALS").or(self.decimal_places)
    }

    /// Get no_color with precedence: env > config > default.
    ///
    /// Respects the `NO_COLOR` standard (https://no-color.org/).
    pub fn no_color(&self) -> bool {
        // NO_COLOR is a standard - presence means disable color
        if std::env::var("NO_COLOR").is_ok() {
            return true;
        }
        if std::env::var("AMOUNTFMT_NO_COLOR").is_ok() {
            return true;
        }
        self.no_color.unwrap_or(false)
    }

    /// Rate table from the config file, or the built-in sample rates.
    pub fn rates(&self) -> RateTable {
        self.rates.clone().unwrap_or_else(default_rates)
    }
}

/// The `[rates]` table shipped in [`DEFAULT_CONFIG`].
pub fn default_rates() -> RateTable {
    #[derive(Deserialize)]
    struct RatesOnly {
        rates: RateTable,
    }

    toml::from_str::<RatesOnly>(DEFAULT_CONFIG)
        .map(|c| c.rates)
        .unwrap_or_else(|_| RateTable::new("USD").with_rate("BSV", 0.02))
}

/// Create a default config file at the standard location.
pub fn init_config() -> Result<PathBuf, String> {
    let path = Config::path().ok_or("Cannot determine config directory")?;

    if path.exists() {
        return Err(format!("Config file already exists: {}", path.display()));
    }

    // Create parent directory
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("Failed to create directory: {}", e))?;
    }

    fs::write(&path, DEFAULT_CONFIG).map_err(|e| format!("Failed to write config: {}", e))?;

    Ok(path)
}

/// Rates sorted by currency code, for `--rates` listing.
pub fn sorted_rates(table: &RateTable) -> Vec<(String, f64)> {
    let mut rates: Vec<(String, f64)> = table
        .rates
        .iter()
        .map(|(code, rate)| (code.to_uppercase(), *rate))
        .collect();
    rates.sort_by(|a, b| a.0.cmp(&b.0));
    rates
}
