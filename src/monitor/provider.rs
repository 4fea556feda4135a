use std::path::Path;
use std::time::Duration;

use sysinfo::System;

use crate::constants::*;
use crate::models::{BatteryReading, MemoryReading};

/// Source of raw host metrics, one call per category.
///
/// The sampler is written against this trait so formatting can be tested
/// with a substitute provider, independent of the real OS.
pub trait MetricsProvider {
    /// Battery reading, or None when the host has no battery.
    fn battery(&mut self) -> Option<BatteryReading>;
    /// CPU utilization percent, averaged over `window`. Blocks for the
    /// full window to obtain an interval-averaged reading.
    fn cpu_percent(&mut self, window: Duration) -> f32;
    fn memory(&mut self) -> MemoryReading;
    /// OS boot time as a unix timestamp (seconds).
    fn boot_time(&self) -> i64;
    /// Per-sensor CPU temperatures in Celsius. None when no recognized
    /// sensor group exists on this host.
    fn cpu_temperatures(&mut self) -> Option<Vec<f32>>;
}

/// Production provider: sysinfo for CPU/memory/boot, sysfs for battery
/// and temperature sensors. Only gathers data, no formatting.
pub struct SystemProvider {
    sys: System,
}

impl SystemProvider {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_usage();
        Self { sys }
    }
}

impl Default for SystemProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsProvider for SystemProvider {
    fn battery(&mut self) -> Option<BatteryReading> {
        read_battery(Path::new("/sys/class/power_supply"))
    }

    fn cpu_percent(&mut self, window: Duration) -> f32 {
        self.sys.refresh_cpu_usage();
        std::thread::sleep(window);
        self.sys.refresh_cpu_usage();
        // One-decimal precision, matching common provider output.
        (self.sys.global_cpu_usage() * 10.0).round() / 10.0
    }

    fn memory(&mut self) -> MemoryReading {
        self.sys.refresh_memory();
        MemoryReading {
            used: self.sys.used_memory(),
            total: self.sys.total_memory(),
            available: self.sys.available_memory(),
        }
    }

    fn boot_time(&self) -> i64 {
        System::boot_time() as i64
    }

    fn cpu_temperatures(&mut self) -> Option<Vec<f32>> {
        read_cpu_temperatures(Path::new("/sys/class/hwmon"))
    }
}

/// Read battery state from a power_supply class directory.
/// Returns None if no battery is present (desktops, WSL).
fn read_battery(root: &Path) -> Option<BatteryReading> {
    let entries = std::fs::read_dir(root).ok()?;

    let mut battery: Option<(f64, String)> = None;
    let mut mains_online: Option<bool> = None;

    for entry in entries.flatten() {
        let path = entry.path();
        let ps_type = match read_trimmed(&path.join("type")) {
            Some(t) => t,
            None => continue,
        };

        match ps_type.as_str() {
            "Battery" if battery.is_none() => {
                let percent = read_trimmed(&path.join("capacity"))
                    .and_then(|s| s.parse::<f64>().ok())
                    .unwrap_or(0.0);
                let status = read_trimmed(&path.join("status")).unwrap_or_default();
                battery = Some((percent, status));
            }
            "Mains" => {
                if let Some(online) = read_trimmed(&path.join("online")) {
                    mains_online = Some(online == "1");
                }
            }
            _ => {}
        }
    }

    let (percent, status) = battery?;
    // Prefer the AC adapter's online flag; fall back to battery status.
    let plugged = mains_online.unwrap_or_else(|| !status.eq_ignore_ascii_case("discharging"));

    Some(BatteryReading { plugged, percent })
}

/// Read per-sensor CPU temperatures from a hwmon class directory.
///
/// Scans for the first hwmon whose name is a recognized CPU sensor group
/// and collects every `temp*_input` it exposes. Returns None when no
/// recognized group exists; a recognized group with no readable inputs
/// yields an empty list (rendered as "no data" upstream).
fn read_cpu_temperatures(root: &Path) -> Option<Vec<f32>> {
    let entries = std::fs::read_dir(root).ok()?;

    for entry in entries.flatten() {
        let path = entry.path();
        let name = match read_trimmed(&path.join("name")) {
            Some(n) => n,
            None => continue,
        };
        if !CPU_SENSOR_NAMES.contains(&name.as_str()) {
            continue;
        }

        let mut temps = Vec::new();
        for i in 1..=MAX_HWMON_SENSORS {
            let input = path.join(format!("temp{}_input", i));
            if let Some(val) = read_trimmed(&input) {
                if let Ok(millideg) = val.parse::<f32>() {
                    temps.push(millideg / 1000.0);
                }
            }
        }
        return Some(temps);
    }

    None
}

fn read_trimmed(path: &Path) -> Option<String> {
    std::fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
}
