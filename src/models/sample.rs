/// Battery reading as reported by the power supply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryReading {
    /// Whether external power is connected.
    pub plugged: bool,
    /// Charge percentage, 0-100.
    pub percent: f64,
}

/// Virtual memory counters in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryReading {
    pub used: u64,
    pub total: u64,
    pub available: u64,
}

/// Raw values fetched from the metrics provider on one tick.
///
/// Ephemeral: created, formatted into text, and discarded within a single
/// tick. Never cached or diffed against the previous tick.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSnapshot {
    /// Battery reading (None if no battery is present).
    pub battery: Option<BatteryReading>,
    /// Instantaneous CPU utilization percent, interval-averaged.
    pub cpu_load: f32,
    pub memory: MemoryReading,
    /// OS boot time as a unix timestamp (seconds).
    pub boot_time: i64,
    /// Per-sensor CPU temperatures in Celsius.
    /// None when the sensor group is absent on this host.
    pub cpu_temps: Option<Vec<f32>>,
}

impl MetricsSnapshot {
    /// Arithmetic mean of the temperature readings, if any exist.
    pub fn average_cpu_temp(&self) -> Option<f32> {
        let temps = self.cpu_temps.as_ref()?;
        if temps.is_empty() {
            return None;
        }
        Some(temps.iter().sum::<f32>() / temps.len() as f32)
    }
}
