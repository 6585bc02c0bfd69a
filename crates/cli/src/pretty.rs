//! Human-readable rendering of display amounts.
//!
//! Colors:
//! - Formatted amount: bold
//! - Hover text: bright black (dimmed)
//! - Input labels: blue
//! - Currency tokens: yellow

use amountfmt_core::{DisplayAmount, ParsedAmount};
use colored::{Color, Colorize};

/// Configuration for pretty printing.
#[derive(Debug, Clone, Copy)]
pub struct PrettyConfig {
    /// Enable colored output.
    pub color: bool,
    /// Prefix each line with the raw input.
    pub label: bool,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self {
            color: true,
            label: false,
        }
    }
}

fn colorize(s: &str, color: Color, enabled: bool) -> String {
    if enabled {
        s.color(color).to_string()
    } else {
        s.to_string()
    }
}

fn label(input: &str, config: &PrettyConfig) -> String {
    if config.label {
        format!("{} → ", colorize(input, Color::Blue, config.color))
    } else {
        String::new()
    }
}

/// Render a display amount, with hover text in parentheses when present.
pub fn render_display(input: &str, display: &DisplayAmount, config: &PrettyConfig) -> String {
    let amount = if config.color {
        display.formatted_amount.bold().to_string()
    } else {
        display.formatted_amount.clone()
    };

    let mut line = format!("{}{}", label(input, config), amount);
    if let Some(ref hover) = display.hover_text {
        line.push(' ');
        line.push_str(&colorize(
            &format!("(≈ {})", hover),
            Color::BrightBlack,
            config.color,
        ));
    }
    line
}

/// Render a parse result as magnitude and inferred currency.
pub fn render_parsed(
    input: &str,
    parsed: Option<&ParsedAmount>,
    config: &PrettyConfig,
) -> String {
    match parsed {
        Some(parsed) => format!(
            "{}{} {}",
            label(input, config),
            parsed.magnitude,
            colorize(&parsed.currency, Color::Yellow, config.color)
        ),
        None => format!(
            "{}{}",
            label(input, config),
            colorize("(unparseable)", Color::Red, config.color)
        ),
    }
}
