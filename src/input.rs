use crate::calculator::ProgramVersion;
use crate::data_models::SimulationCatalog;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter};
use std::io::{BufReader, Read};

const CODE_DATA_PREFIX: &str = "code_data_";
const IMPROVED_DATA_PREFIX: &str = "improved_data_";

/// A scalar as callers actually send it: flags arrive as booleans, "yes" or 1,
/// counts arrive as numbers or numeric strings.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum LooseValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl LooseValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LooseValue::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            LooseValue::Bool(value) => Some(if *value { 1. } else { 0. }),
            LooseValue::Integer(value) => Some(*value as f64),
            LooseValue::Float(value) => Some(*value),
            LooseValue::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl Display for LooseValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LooseValue::Bool(true) => write!(f, "True"),
            LooseValue::Bool(false) => write!(f, "False"),
            LooseValue::Integer(value) => write!(f, "{value}"),
            LooseValue::Float(value) => write!(f, "{value}"),
            LooseValue::Text(text) => write!(f, "{text}"),
        }
    }
}

impl From<&str> for LooseValue {
    fn from(value: &str) -> Self {
        LooseValue::Text(value.to_string())
    }
}

impl From<bool> for LooseValue {
    fn from(value: bool) -> Self {
        LooseValue::Bool(value)
    }
}

impl From<i64> for LooseValue {
    fn from(value: i64) -> Self {
        LooseValue::Integer(value)
    }
}

impl From<f64> for LooseValue {
    fn from(value: f64) -> Self {
        LooseValue::Float(value)
    }
}

/// The keyword bag submitted for a single calculation.
///
/// Every field is optional here; the normalizer decides what is missing. Keys that are not
/// modelled are kept in `other` so they can be echoed back in reports and simulation dumps.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct CalculationInput {
    pub home_status_id: Option<u64>,
    pub simulation_id: Option<u64>,
    pub force_rem_simulation: Option<LooseValue>,
    pub us_state: Option<String>,
    pub heating_fuel: Option<String>,
    pub heating_system_config: Option<String>,
    pub home_size: Option<String>,
    pub conditioned_area: Option<f64>,
    pub heating_zone: Option<String>,
    pub percent_improvement: Option<LooseValue>,
    pub electric_utility: Option<String>,
    pub gas_utility: Option<String>,
    pub water_heater_tier: Option<String>,
    pub estar_std_refrigerators_installed: Option<LooseValue>,
    pub neea_refrigerators_installed: Option<LooseValue>,
    pub estar_dishwasher_installed: Option<LooseValue>,
    pub estar_front_load_clothes_washer_installed: Option<LooseValue>,
    pub estar_clothes_washer_installed: Option<LooseValue>,
    pub neea_clothes_washer_installed: Option<LooseValue>,
    pub clothes_dryer_tier: Option<String>,
    pub clothes_dryer_fuel: Option<String>,
    pub cfl_installed: Option<LooseValue>,
    pub led_installed: Option<LooseValue>,
    pub total_installed_lamps: Option<LooseValue>,
    pub smart_thermostat_installed: Option<LooseValue>,
    pub qty_shower_head_1p5: Option<LooseValue>,
    pub qty_shower_head_1p75: Option<LooseValue>,
    pub certified_earth_advantage: Option<String>,
    pub earth_advantage_certified: Option<String>,
    pub electric_meter_number: Option<LooseValue>,
    pub raise_issues: Option<LooseValue>,
    #[serde(default)]
    pub code_data: Map<String, Value>,
    #[serde(default)]
    pub improved_data: Map<String, Value>,
    #[serde(flatten)]
    pub other: IndexMap<String, Value>,
    /// The bag exactly as it was received, in the order it was received.
    #[serde(skip)]
    raw: Map<String, Value>,
}

impl CalculationInput {
    pub fn from_json(json: impl Read) -> anyhow::Result<Self> {
        let reader = BufReader::new(json);
        let raw: Map<String, Value> = serde_json::from_reader(reader)?;

        Self::from_map(raw)
    }

    pub fn from_map(raw: Map<String, Value>) -> anyhow::Result<Self> {
        let mut input: CalculationInput = serde_json::from_value(Value::Object(raw.clone()))?;
        input.fold_prefixed_profile_keys();
        input.raw = raw;

        Ok(input)
    }

    /// Move `code_data_*` / `improved_data_*` keys into the nested profile mappings.
    fn fold_prefixed_profile_keys(&mut self) {
        let prefixed = self
            .other
            .keys()
            .filter(|key| key.starts_with(CODE_DATA_PREFIX) || key.starts_with(IMPROVED_DATA_PREFIX))
            .cloned()
            .collect::<Vec<_>>();

        for key in prefixed {
            let Some(value) = self.other.shift_remove(&key) else {
                continue;
            };
            if let Some(field) = key.strip_prefix(CODE_DATA_PREFIX) {
                self.code_data.insert(field.to_string(), value);
            } else if let Some(field) = key.strip_prefix(IMPROVED_DATA_PREFIX) {
                self.improved_data.insert(field.to_string(), value);
            }
        }
    }

    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    pub fn refrigerator_choice(&self) -> Option<&LooseValue> {
        self.estar_std_refrigerators_installed
            .as_ref()
            .or(self.neea_refrigerators_installed.as_ref())
    }

    pub fn clothes_washer_choice(&self) -> Option<&LooseValue> {
        self.estar_front_load_clothes_washer_installed
            .as_ref()
            .or(self.estar_clothes_washer_installed.as_ref())
            .or(self.neea_clothes_washer_installed.as_ref())
    }

    pub fn earth_advantage_choice(&self) -> Option<&str> {
        self.certified_earth_advantage
            .as_deref()
            .or(self.earth_advantage_certified.as_deref())
    }
}

/// A certification status record resolved by the caller before the calculation runs.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(deny_unknown_fields)]
pub struct HomeStatus {
    pub id: u64,
    #[serde(default)]
    pub complete: bool,
    pub us_state: Option<String>,
    /// Heating zone display value of the home's county, e.g. "HZ2".
    pub heating_zone: Option<String>,
    pub electric_utility: Option<String>,
    pub gas_utility: Option<String>,
    pub floorplan: Option<Floorplan>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(deny_unknown_fields)]
pub struct Floorplan {
    /// Structured simulation attached to the floorplan.
    pub simulation_id: Option<u64>,
    /// Legacy (REM/Rate®) simulation attached to the floorplan.
    pub remrate_target_id: Option<u64>,
}

/// The envelope read by the command line tool: one calculation plus the upstream records
/// it may refer to.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculationRequest {
    #[serde(default)]
    pub program: ProgramVersion,
    #[serde(default)]
    pub include_reports: Option<bool>,
    #[serde(default)]
    pub recalculate: bool,
    pub inputs: Map<String, Value>,
    pub home_status: Option<HomeStatus>,
    #[serde(default)]
    pub simulations: SimulationCatalog,
}

impl CalculationRequest {
    pub fn from_json(json: impl Read) -> anyhow::Result<Self> {
        let reader = BufReader::new(json);

        Ok(serde_json::from_reader(reader)?)
    }

    pub fn calculation_input(&self) -> anyhow::Result<CalculationInput> {
        CalculationInput::from_map(self.inputs.clone())
    }
}
