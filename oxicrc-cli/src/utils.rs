//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░ "),
    );
    pb
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise each `-v` raises the level one step
/// from `warn`.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // A second initialisation (tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Parse an unsigned integer written in decimal or with a `0x` prefix.
pub fn parse_u64(text: &str) -> Result<u64, String> {
    let text = text.trim().replace('_', "");
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => text.parse::<u64>(),
    };
    parsed.map_err(|e| format!("invalid number '{}': {}", text, e))
}

/// Parse a CRC value; bare digits are read as hexadecimal.
pub fn parse_crc(text: &str) -> Result<u64, String> {
    let text = text.trim();
    let hex = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    u64::from_str_radix(hex, 16).map_err(|e| format!("invalid CRC '{}': {}", text, e))
}

/// Format a CRC as zero-padded hex sized to the model width.
pub fn format_crc(value: u64, width: u8) -> String {
    let digits = usize::from(width).div_ceil(4);
    format!("{:0digits$x}", value, digits = digits)
}

/// Format a byte count with a decimal unit, as the benchmark table does.
pub fn format_len(len: u64) -> String {
    if len < 1_000 {
        format!("{} B", len)
    } else if len < 1_000_000 {
        format!("{} KB", len / 1_000)
    } else {
        format!("{} MB", len / 1_000_000)
    }
}
