use serde_json::{Map, Value};

/// One pollable soil probe with its indicator output. The board holds the
/// six differently-pinned probes behind this trait.
pub trait SoilChannel {
    /// Energize the probe, sample it once and report whether it needs
    /// watering. Blocks for the settle time; the excitation line is low
    /// again when this returns.
    fn poll(&mut self) -> anyhow::Result<bool>;

    /// Drive the indicator output (high = needs watering).
    fn set_indicator(&mut self, needs_water: bool) -> anyhow::Result<()>;

    fn add_json_value(&self, map: &mut Map<String, Value>);
    fn pretty_print(&self) -> String;
}
