//! Application-wide constants.
//!
//! Centralizes timing, bounds, labels, and sensor probing defaults.

use std::path::PathBuf;

// ── Timing ────────────────────────────────────────────────────────
/// Minimum allowed refresh rate (ms) to prevent excessive CPU usage.
pub const MIN_REFRESH_MS: u64 = 100;
/// Default refresh interval (ms).
pub const DEFAULT_REFRESH_MS: u64 = 100;
/// Event poll timeout (ms) -- how often the loop checks for input.
pub const EVENT_POLL_MS: u64 = 50;
/// Blocking window for the interval-averaged CPU reading (ms).
///
/// Deliberately close to the tick period: the sample occupies most of
/// the tick, and the single-threaded loop serializes ticks.
pub const CPU_SAMPLE_WINDOW_MS: u64 = 100;

// ── Font size ─────────────────────────────────────────────────────
/// Slider minimum.
pub const FONT_SIZE_MIN: u16 = 8;
/// Slider maximum.
pub const FONT_SIZE_MAX: u16 = 24;
/// Startup font size.
pub const DEFAULT_FONT_SIZE: u16 = 14;

// ── Overlay geometry ──────────────────────────────────────────────
/// Card width at the smallest font size; each font-size step adds columns.
pub const OVERLAY_BASE_WIDTH: u16 = 26;
/// Columns added per font-size unit.
pub const OVERLAY_WIDTH_PER_FONT: u16 = 2;
/// Default overlay origin column.
pub const DEFAULT_OVERLAY_X: u16 = 2;
/// Default overlay origin row.
pub const DEFAULT_OVERLAY_Y: u16 = 2;

// ── Labels ────────────────────────────────────────────────────────
/// Toggle button phrase while the checkbox panel is hidden.
pub const SHOW_PARAMETERS_LABEL: &str = "Show parameters";
/// Toggle button phrase while the checkbox panel is shown.
pub const HIDE_PARAMETERS_LABEL: &str = "Hide parameters";
/// Substitute text when no usable temperature readings exist.
pub const NO_TEMP_DATA_TEXT: &str = "no temperature data available";
/// Substitute text when the host has no battery.
pub const NO_BATTERY_TEXT: &str = "not present";

// ── Sensors ───────────────────────────────────────────────────────
/// hwmon names recognized as CPU temperature sensor groups.
pub const CPU_SENSOR_NAMES: &[&str] = &["coretemp", "k10temp", "zenpower", "it8688", "acpitz"];
/// Maximum hwmon temperature sensor index to probe.
pub const MAX_HWMON_SENSORS: u32 = 32;

// ── Formatting ────────────────────────────────────────────────────
/// Bytes per mebibyte, for the memory lines.
pub const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

// ── Paths ─────────────────────────────────────────────────────────

/// Returns the user's home directory, falling back to /tmp.
pub fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string()))
}

/// Returns `~/.config/vitals/`.
pub fn config_dir() -> PathBuf {
    home_dir().join(".config").join("vitals")
}

/// Returns `~/.config/vitals/config.toml`.
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns `~/.config/vitals/themes/<name>.toml`.
pub fn custom_theme_path(name: &str) -> PathBuf {
    config_dir().join("themes").join(format!("{}.toml", name))
}
