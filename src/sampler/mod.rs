//! Metrics sampling and text rendering.
//!
//! `Sampler` pulls one `MetricsSnapshot` from the provider per tick;
//! `render_text` formats the enabled categories into the display text.
//! The two are separate so formatting is testable without touching the OS.

use std::time::Duration;

use chrono::{Local, TimeZone};

use crate::constants::*;
use crate::models::{CategoryToggles, MetricCategory, MetricsSnapshot};
use crate::monitor::MetricsProvider;

/// Drives the provider once per tick and renders the result.
///
/// Owns no state between calls beyond the provider handle; every sample
/// queries the provider fresh.
pub struct Sampler<P: MetricsProvider> {
    provider: P,
    cpu_window: Duration,
}

impl<P: MetricsProvider> Sampler<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            cpu_window: Duration::from_millis(CPU_SAMPLE_WINDOW_MS),
        }
    }

    /// Collect a fresh snapshot and format it.
    ///
    /// Blocks for the CPU measurement window (~100 ms); the caller's tick
    /// schedule must tolerate a sample taking close to the full period.
    pub fn sample(&mut self, toggles: &CategoryToggles) -> String {
        let snapshot = self.collect();
        render_text(&snapshot, toggles)
    }

    fn collect(&mut self) -> MetricsSnapshot {
        MetricsSnapshot {
            battery: self.provider.battery(),
            cpu_load: self.provider.cpu_percent(self.cpu_window),
            memory: self.provider.memory(),
            boot_time: self.provider.boot_time(),
            cpu_temps: self.provider.cpu_temperatures(),
        }
    }
}

/// Render the enabled categories of a snapshot, in fixed order, one line
/// per category (three for Memory). Disabled categories contribute nothing.
pub fn render_text(snapshot: &MetricsSnapshot, toggles: &CategoryToggles) -> String {
    let mut lines: Vec<String> = Vec::new();

    if toggles.is_enabled(MetricCategory::Battery) {
        lines.push(battery_line(snapshot));
    }
    if toggles.is_enabled(MetricCategory::CpuLoad) {
        lines.push(format!("CPU load: {}%", snapshot.cpu_load));
    }
    if toggles.is_enabled(MetricCategory::Memory) {
        lines.push(format!("Used memory: {} MB", mib(snapshot.memory.used)));
        lines.push(format!("Total memory: {} MB", mib(snapshot.memory.total)));
        lines.push(format!(
            "Available memory: {} MB",
            mib(snapshot.memory.available)
        ));
    }
    if toggles.is_enabled(MetricCategory::BootTime) {
        lines.push(format!("Boot time: {}", boot_time_local(snapshot.boot_time)));
    }
    if toggles.is_enabled(MetricCategory::CpuTemperature) {
        lines.push(temperature_line(snapshot));
    }

    lines.join("\n")
}

fn battery_line(snapshot: &MetricsSnapshot) -> String {
    match snapshot.battery {
        Some(reading) => {
            let state = if reading.plugged {
                "charging"
            } else {
                "discharging"
            };
            format!("Battery: {} ({}%)", state, round3(reading.percent))
        }
        None => format!("Battery: {}", NO_BATTERY_TEXT),
    }
}

fn temperature_line(snapshot: &MetricsSnapshot) -> String {
    match snapshot.average_cpu_temp() {
        Some(avg) => format!("Average CPU temperature: {:.2}°C", avg),
        None => format!("Average CPU temperature: {}", NO_TEMP_DATA_TEXT),
    }
}

fn boot_time_local(timestamp: i64) -> String {
    match Local.timestamp_opt(timestamp, 0).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "unknown".to_string(),
    }
}

/// Bytes to mebibytes with two decimal places.
fn mib(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / BYTES_PER_MIB)
}

/// Round to three decimal places, displayed without trailing zeros.
fn round3(percent: f64) -> f64 {
    (percent * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BatteryReading, MemoryReading};

    struct FakeProvider {
        battery: Option<BatteryReading>,
        cpu: f32,
        memory: MemoryReading,
        boot: i64,
        temps: Option<Vec<f32>>,
        cpu_windows: Vec<Duration>,
    }

    impl FakeProvider {
        fn quiet() -> Self {
            Self {
                battery: Some(BatteryReading {
                    plugged: true,
                    percent: 95.0,
                }),
                cpu: 12.5,
                memory: MemoryReading {
                    used: 1048576,
                    total: 2097152,
                    available: 1048576,
                },
                boot: 1_700_000_000,
                temps: Some(vec![40.0, 42.0]),
                cpu_windows: Vec::new(),
            }
        }
    }

    impl MetricsProvider for FakeProvider {
        fn battery(&mut self) -> Option<BatteryReading> {
            self.battery
        }
        fn cpu_percent(&mut self, window: Duration) -> f32 {
            self.cpu_windows.push(window);
            self.cpu
        }
        fn memory(&mut self) -> MemoryReading {
            self.memory
        }
        fn boot_time(&self) -> i64 {
            self.boot
        }
        fn cpu_temperatures(&mut self) -> Option<Vec<f32>> {
            self.temps.clone()
        }
    }

    fn snapshot() -> MetricsSnapshot {
        MetricsSnapshot {
            battery: Some(BatteryReading {
                plugged: false,
                percent: 87.123456,
            }),
            cpu_load: 12.5,
            memory: MemoryReading {
                used: 1048576,
                total: 2097152,
                available: 1048576,
            },
            boot_time: 1_700_000_000,
            cpu_temps: Some(vec![40.0, 42.0]),
        }
    }

    // ── Per-category formatting ───────────────────────────────────

    #[test]
    fn battery_percent_rounded_to_three_decimals() {
        let text = render_text(&snapshot(), &CategoryToggles::default());
        assert!(text.contains("Battery: discharging (87.123%)"), "{}", text);
    }

    #[test]
    fn battery_plugged_reads_charging() {
        let mut snap = snapshot();
        snap.battery = Some(BatteryReading {
            plugged: true,
            percent: 95.0,
        });
        let text = render_text(&snap, &CategoryToggles::default());
        assert!(text.contains("Battery: charging (95%)"), "{}", text);
    }

    #[test]
    fn battery_absent_renders_placeholder() {
        let mut snap = snapshot();
        snap.battery = None;
        let text = render_text(&snap, &CategoryToggles::default());
        assert!(text.contains("Battery: not present"), "{}", text);
    }

    #[test]
    fn cpu_load_is_raw_provider_value() {
        let text = render_text(&snapshot(), &CategoryToggles::default());
        assert!(text.contains("CPU load: 12.5%"), "{}", text);
    }

    #[test]
    fn memory_lines_in_mebibytes_two_decimals() {
        let text = render_text(&snapshot(), &CategoryToggles::default());
        assert!(text.contains("Used memory: 1.00 MB"), "{}", text);
        assert!(text.contains("Total memory: 2.00 MB"), "{}", text);
        assert!(text.contains("Available memory: 1.00 MB"), "{}", text);
    }

    #[test]
    fn temperature_is_mean_of_readings() {
        let text = render_text(&snapshot(), &CategoryToggles::default());
        assert!(text.contains("41.00°C"), "{}", text);
    }

    #[test]
    fn temperature_empty_readings_render_placeholder() {
        let mut snap = snapshot();
        snap.cpu_temps = Some(Vec::new());
        let text = render_text(&snap, &CategoryToggles::default());
        assert!(text.contains(NO_TEMP_DATA_TEXT), "{}", text);
    }

    #[test]
    fn temperature_absent_group_renders_placeholder() {
        let mut snap = snapshot();
        snap.cpu_temps = None;
        let text = render_text(&snap, &CategoryToggles::default());
        assert!(text.contains(NO_TEMP_DATA_TEXT), "{}", text);
    }

    // ── Enablement ────────────────────────────────────────────────

    #[test]
    fn all_enabled_yields_seven_lines() {
        let text = render_text(&snapshot(), &CategoryToggles::default());
        assert_eq!(text.lines().count(), 7);
    }

    #[test]
    fn disabling_a_category_removes_its_lines() {
        let snap = snapshot();
        for &cat in MetricCategory::all() {
            let mut toggles = CategoryToggles::default();
            toggles.set(cat, false);
            let text = render_text(&snap, &toggles);
            let expected = match cat {
                MetricCategory::Memory => 4, // three lines removed
                _ => 6,
            };
            assert_eq!(text.lines().count(), expected, "category {:?}", cat);
            assert!(
                !text.contains(cat.label()),
                "category {:?} still present: {}",
                cat,
                text
            );
        }
    }

    #[test]
    fn reenabling_restores_lines() {
        let snap = snapshot();
        let mut toggles = CategoryToggles::default();
        toggles.set(MetricCategory::CpuLoad, false);
        assert!(!render_text(&snap, &toggles).contains("CPU load"));
        toggles.set(MetricCategory::CpuLoad, true);
        assert!(render_text(&snap, &toggles).contains("CPU load"));
    }

    #[test]
    fn all_disabled_yields_empty_text() {
        let snap = snapshot();
        let mut toggles = CategoryToggles::default();
        for &cat in MetricCategory::all() {
            toggles.set(cat, false);
        }
        assert_eq!(render_text(&snap, &toggles), "");
    }

    #[test]
    fn lines_appear_in_fixed_order() {
        let text = render_text(&snapshot(), &CategoryToggles::default());
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Battery:"));
        assert!(lines[1].starts_with("CPU load:"));
        assert!(lines[2].starts_with("Used memory:"));
        assert!(lines[5].starts_with("Boot time:"));
        assert!(lines[6].starts_with("Average CPU temperature:"));
    }

    // ── Sampler wiring ────────────────────────────────────────────

    #[test]
    fn sampler_passes_cpu_window_to_provider() {
        let mut sampler = Sampler::new(FakeProvider::quiet());
        let _ = sampler.sample(&CategoryToggles::default());
        assert_eq!(
            sampler.provider.cpu_windows,
            vec![Duration::from_millis(CPU_SAMPLE_WINDOW_MS)]
        );
    }

    #[test]
    fn sampler_renders_fresh_text_each_call() {
        let mut sampler = Sampler::new(FakeProvider::quiet());
        let toggles = CategoryToggles::default();
        let first = sampler.sample(&toggles);
        sampler.provider.cpu = 99.9;
        let second = sampler.sample(&toggles);
        assert!(first.contains("CPU load: 12.5%"));
        assert!(second.contains("CPU load: 99.9%"));
    }
}
