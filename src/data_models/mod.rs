//! Sources of code (baseline) and improved (as-built) energy consumption.
//!
//! A calculation always works from exactly one pair of profiles, taken from one of three
//! places: a structured simulation with design and reference analyses, a legacy REM/Rate®
//! export chain, or inline `code_data` / `improved_data` mappings.

mod legacy;
mod raw;
mod structured;

pub use legacy::{EnergyUnit, FuelSummaryRow, LegacyProfile, LegacySimulation};
pub use raw::RawProfile;
pub use structured::{Analysis, AnalysisType, StructuredProfile, StructuredSimulation};

use crate::constants::{KWH_TO_MMBTU, THERMS_TO_MMBTU};
use crate::errors::{CalculatorError, InputIssues, StructuralError};
use crate::input::{CalculationInput, HomeStatus};
use crate::normalize::{normalize_boolean, IssueCollector};
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::ops::Deref;
use strum_macros::Display;
use tracing::debug;

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum FuelType {
    #[serde(rename = "electric")]
    #[strum(serialize = "Electric")]
    Electric,
    #[serde(rename = "natural gas")]
    #[strum(serialize = "Gas")]
    NaturalGas,
    #[serde(rename = "propane")]
    #[strum(serialize = "Propane")]
    Propane,
    #[serde(rename = "fuel oil")]
    #[strum(serialize = "Fuel Oil")]
    FuelOil,
    #[serde(rename = "wood")]
    #[strum(serialize = "Wood")]
    Wood,
    #[serde(other, rename = "other")]
    #[strum(serialize = "Other")]
    Other,
}

impl FuelType {
    /// The key used by the clothes washer savings table.
    pub fn as_key(&self) -> &'static str {
        match self {
            FuelType::Electric => "electric",
            FuelType::NaturalGas => "natural gas",
            FuelType::Propane => "propane",
            FuelType::FuelOil => "fuel oil",
            FuelType::Wood => "wood",
            FuelType::Other => "other",
        }
    }

    pub fn from_description(description: &str) -> Self {
        let description = description.to_lowercase();
        if description.contains("propane") {
            FuelType::Propane
        } else if description.contains("oil") {
            FuelType::FuelOil
        } else if description.contains("wood") {
            FuelType::Wood
        } else if description.contains("gas") {
            FuelType::NaturalGas
        } else if description.contains("electric") {
            FuelType::Electric
        } else {
            FuelType::Other
        }
    }
}

/// Dominant equipment as summarised by a simulation.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Equipment {
    #[serde(rename = "type")]
    pub equipment_type: Option<String>,
    pub fuel: Option<String>,
}

pub(crate) fn is_heat_pump(heating_type: &str) -> bool {
    let heating_type = heating_type.to_lowercase();
    ["heat pump", "ashp", "gshp"]
        .iter()
        .any(|marker| heating_type.contains(marker))
}

/// Read access shared by every kind of energy profile.
pub trait EnergyProfileSource: Debug {
    fn heating_kwh(&self) -> f64;
    fn heating_therms(&self) -> f64;
    fn cooling_kwh(&self) -> f64;
    fn total_consumption_kwh(&self) -> f64;
    fn total_consumption_therms(&self) -> f64;
    fn primary_heating_type(&self) -> Option<&str>;
    fn primary_cooling_type(&self) -> Option<&str>;
    fn primary_cooling_fuel(&self) -> Option<&str>;
    fn primary_water_heating_type(&self) -> Option<&str>;
    fn primary_water_heating_fuel(&self) -> Option<FuelType>;
    fn clothes_dryer_fuel(&self) -> Option<FuelType>;
    fn qty_heat_pump_water_heaters(&self) -> u32;
    fn square_footage(&self) -> Option<f64>;

    fn is_primary_heating_is_heat_pump(&self) -> bool {
        self.primary_heating_type().is_some_and(is_heat_pump)
    }

    /// Fuel description of the dominant heating equipment, when a simulation reports one.
    fn dominant_heating_fuel(&self) -> Option<&str> {
        None
    }

    fn total_consumption_mmbtu(&self) -> f64 {
        self.total_consumption_therms() * THERMS_TO_MMBTU
            + self.total_consumption_kwh() * KWH_TO_MMBTU
    }

    /// Percent improvement of this (improved) profile over the code profile.
    fn get_udrh_percent_improvement(&self, code: &dyn EnergyProfileSource) -> anyhow::Result<f64> {
        let code_mmbtu = code.total_consumption_mmbtu();
        if code_mmbtu == 0. {
            return Ok(0.);
        }
        Ok((code_mmbtu - self.total_consumption_mmbtu()) / code_mmbtu)
    }
}

#[derive(Clone, Copy, Debug, Display, PartialEq)]
pub enum DataSource {
    #[strum(serialize = "structured simulation")]
    Structured,
    #[strum(serialize = "legacy simulation")]
    Legacy,
    #[strum(serialize = "supplied data")]
    Raw,
}

#[derive(Clone, Debug)]
pub enum EnergyProfile {
    Raw(RawProfile),
    Legacy(LegacyProfile),
    Structured(StructuredProfile),
}

impl EnergyProfile {
    pub fn data_source(&self) -> DataSource {
        match self {
            EnergyProfile::Raw(_) => DataSource::Raw,
            EnergyProfile::Legacy(_) => DataSource::Legacy,
            EnergyProfile::Structured(_) => DataSource::Structured,
        }
    }
}

impl Deref for EnergyProfile {
    type Target = dyn EnergyProfileSource;

    fn deref(&self) -> &Self::Target {
        match self {
            EnergyProfile::Raw(profile) => profile,
            EnergyProfile::Legacy(profile) => profile,
            EnergyProfile::Structured(profile) => profile,
        }
    }
}

/// Lookup of simulation records by id, resolved by the caller ahead of the calculation.
pub trait SimulationStore: Debug {
    fn structured_simulation(&self, id: u64) -> Option<&StructuredSimulation>;
    fn legacy_simulation(&self, id: u64) -> Option<&LegacySimulation>;
    /// Legacy simulations listing `id` among their similar simulations, ordered by id.
    fn legacy_similar_to(&self, id: u64) -> Vec<&LegacySimulation>;
    /// Legacy simulations listing `id` among their references, ordered by id.
    fn legacy_referencing(&self, id: u64) -> Vec<&LegacySimulation>;
}

/// An in-memory [`SimulationStore`].
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationCatalog {
    #[serde(default)]
    pub structured: Vec<StructuredSimulation>,
    #[serde(default)]
    pub legacy: Vec<LegacySimulation>,
}

impl SimulationCatalog {
    fn legacy_where(&self, predicate: impl Fn(&LegacySimulation) -> bool) -> Vec<&LegacySimulation> {
        let mut matches = self
            .legacy
            .iter()
            .filter(|simulation| predicate(simulation))
            .collect::<Vec<_>>();
        matches.sort_by_key(|simulation| simulation.id);
        matches
    }
}

impl SimulationStore for SimulationCatalog {
    fn structured_simulation(&self, id: u64) -> Option<&StructuredSimulation> {
        self.structured.iter().find(|simulation| simulation.id == id)
    }

    fn legacy_simulation(&self, id: u64) -> Option<&LegacySimulation> {
        self.legacy.iter().find(|simulation| simulation.id == id)
    }

    fn legacy_similar_to(&self, id: u64) -> Vec<&LegacySimulation> {
        self.legacy_where(|simulation| simulation.similar.contains(&id))
    }

    fn legacy_referencing(&self, id: u64) -> Vec<&LegacySimulation> {
        self.legacy_where(|simulation| simulation.references.contains(&id))
    }
}

/// The code and improved profiles a calculation runs on.
#[derive(Clone, Debug)]
pub struct ProfilePair {
    pub code: EnergyProfile,
    pub improved: EnergyProfile,
    /// The simulation the profiles were taken from, if any.
    pub input_simulation: Option<u64>,
}

enum SimulationLink {
    Structured(u64),
    Legacy(u64),
    Unresolved(u64),
}

fn not_found(id: u64) -> StructuralError {
    StructuralError::new(anyhow!("Simulation {id} could not be found"))
}

/// Pick the data source for a calculation and build its profile pair.
///
/// Issues that make it impossible to continue (no data at all, an unusable legacy chain) are
/// raised straight away together with everything collected so far.
pub fn select_profiles(
    input: &CalculationInput,
    home_status: Option<&HomeStatus>,
    store: &dyn SimulationStore,
    issues: &mut IssueCollector,
) -> Result<ProfilePair, CalculatorError> {
    let force_rem_simulation = normalize_boolean(input.force_rem_simulation.as_ref());

    let link = match (input.simulation_id, home_status) {
        (Some(id), _) => Some(SimulationLink::Unresolved(id)),
        (None, Some(home_status)) => match &home_status.floorplan {
            None => {
                issues.append("Need a floorplan with Simulation data");
                None
            }
            Some(floorplan) => match (floorplan.simulation_id, floorplan.remrate_target_id) {
                (Some(id), _) if !force_rem_simulation => {
                    debug!("Using Simulation {id} from provided Home Status {}", home_status.id);
                    Some(SimulationLink::Structured(id))
                }
                (_, Some(id)) => {
                    debug!("Using REM Simulation {id} from provided Project {}", home_status.id);
                    Some(SimulationLink::Legacy(id))
                }
                _ => None,
            },
        },
        (None, None) => None,
    };

    let link = match link {
        Some(SimulationLink::Unresolved(id)) => Some(
            match (
                store.structured_simulation(id).is_some(),
                store.legacy_simulation(id).is_some(),
            ) {
                (true, has_legacy) if !(force_rem_simulation && has_legacy) => {
                    SimulationLink::Structured(id)
                }
                (_, true) => SimulationLink::Legacy(id),
                // forcing REM/Rate® needs a legacy record to force
                (true, false) => SimulationLink::Structured(id),
                (false, false) => return Err(not_found(id).into()),
            },
        ),
        link => link,
    };

    match link {
        Some(SimulationLink::Structured(id)) => {
            let simulation = store.structured_simulation(id).ok_or_else(|| not_found(id))?;
            Ok(ProfilePair {
                code: EnergyProfile::Structured(StructuredProfile::new(simulation, false)?),
                improved: EnergyProfile::Structured(StructuredProfile::new(simulation, true)?),
                input_simulation: Some(id),
            })
        }
        Some(SimulationLink::Legacy(id)) => match legacy::resolve_pair(store, id, issues)? {
            Some((code, improved)) => Ok(ProfilePair {
                code: EnergyProfile::Legacy(LegacyProfile::new(code)),
                improved: EnergyProfile::Legacy(LegacyProfile::new(improved)),
                input_simulation: Some(id),
            }),
            None => Err(InputIssues::new(issues.issues().to_vec()).into()),
        },
        Some(SimulationLink::Unresolved(_)) | None => {
            if !input.code_data.is_empty() && !input.improved_data.is_empty() {
                return Ok(ProfilePair {
                    code: EnergyProfile::Raw(RawProfile::new(input.code_data.clone(), false)),
                    improved: EnergyProfile::Raw(RawProfile::new(
                        input.improved_data.clone(),
                        true,
                    )),
                    input_simulation: None,
                });
            }
            issues.append(match home_status {
                Some(_) => "Please add a floorplan with UDRH REM/Rate® data",
                None => "Please provide code / improved data",
            });
            Err(InputIssues::new(issues.issues().to_vec()).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Floorplan;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use serde_json::json;

    fn input(value: serde_json::Value) -> CalculationInput {
        CalculationInput::from_map(value.as_object().cloned().unwrap()).unwrap()
    }

    fn analysis(analysis_type: AnalysisType, heating_kwh: f64) -> Analysis {
        Analysis {
            analysis_type,
            heating_kwh,
            total_consumption_kwh: heating_kwh,
            ..Default::default()
        }
    }

    #[fixture]
    fn catalog() -> SimulationCatalog {
        SimulationCatalog {
            structured: vec![StructuredSimulation {
                id: 10,
                analyses: vec![
                    analysis(AnalysisType::Reference, 10000.),
                    analysis(AnalysisType::Design, 8000.),
                ],
                ..Default::default()
            }],
            legacy: vec![
                LegacySimulation {
                    id: 20,
                    export_type: 4,
                    solar_system_type: 1,
                    references: vec![21],
                    ..Default::default()
                },
                LegacySimulation {
                    id: 21,
                    export_type: 5,
                    ..Default::default()
                },
            ],
        }
    }

    #[rstest]
    #[case("Air-Source heat pump", true)]
    #[case("ASHP", true)]
    #[case("gshp", true)]
    #[case("heater", false)]
    #[case("Furnace", false)]
    fn should_detect_heat_pumps(#[case] heating_type: &str, #[case] expected: bool) {
        assert_eq!(is_heat_pump(heating_type), expected);
    }

    #[rstest]
    #[case("Natural gas", FuelType::NaturalGas)]
    #[case("Electric", FuelType::Electric)]
    #[case("Propane gas", FuelType::Propane)]
    #[case("Fuel oil", FuelType::FuelOil)]
    #[case("Unknown", FuelType::Other)]
    fn should_classify_fuel_descriptions(#[case] description: &str, #[case] expected: FuelType) {
        assert_eq!(FuelType::from_description(description), expected);
    }

    #[rstest]
    fn should_select_raw_profiles_from_inline_data(catalog: SimulationCatalog) {
        let mut issues = IssueCollector::default();
        let pair = select_profiles(
            &input(json!({
                "code_data": {"heating_kwh": 10000.},
                "improved_data": {"heating_kwh": 8000.},
            })),
            None,
            &catalog,
            &mut issues,
        )
        .unwrap();

        assert_eq!(pair.code.data_source(), DataSource::Raw);
        assert_eq!(pair.improved.heating_kwh(), 8000.);
        assert_eq!(pair.input_simulation, None);
    }

    #[rstest]
    fn should_select_structured_simulation_by_id(catalog: SimulationCatalog) {
        let mut issues = IssueCollector::default();
        let pair = select_profiles(&input(json!({"simulation_id": 10})), None, &catalog, &mut issues)
            .unwrap();

        assert_eq!(pair.code.data_source(), DataSource::Structured);
        assert_eq!(pair.code.heating_kwh(), 10000.);
        assert_eq!(pair.improved.heating_kwh(), 8000.);
        assert_eq!(pair.input_simulation, Some(10));
    }

    #[rstest]
    fn should_keep_structured_simulation_when_forcing_rem_without_legacy_record(
        catalog: SimulationCatalog,
    ) {
        let mut issues = IssueCollector::default();
        let pair = select_profiles(
            &input(json!({"simulation_id": 10, "force_rem_simulation": true})),
            None,
            &catalog,
            &mut issues,
        )
        .unwrap();

        assert_eq!(pair.code.data_source(), DataSource::Structured);
        assert_eq!(pair.input_simulation, Some(10));
        assert!(issues.is_empty());
    }

    #[rstest]
    fn should_select_legacy_simulation_from_home_status(catalog: SimulationCatalog) {
        let mut issues = IssueCollector::default();
        let home_status = HomeStatus {
            id: 1,
            floorplan: Some(Floorplan {
                simulation_id: Some(10),
                remrate_target_id: Some(20),
            }),
            ..Default::default()
        };
        let pair = select_profiles(
            &input(json!({"force_rem_simulation": true})),
            Some(&home_status),
            &catalog,
            &mut issues,
        )
        .unwrap();

        assert_eq!(pair.code.data_source(), DataSource::Legacy);
        assert_eq!(pair.input_simulation, Some(20));
    }

    #[rstest]
    fn should_raise_without_any_data(catalog: SimulationCatalog) {
        let mut issues = IssueCollector::default();
        let error = select_profiles(&input(json!({})), None, &catalog, &mut issues).unwrap_err();
        assert_eq!(error.to_string(), "Please provide code / improved data");

        let mut issues = IssueCollector::default();
        let home_status = HomeStatus {
            id: 1,
            ..Default::default()
        };
        let error = select_profiles(&input(json!({})), Some(&home_status), &catalog, &mut issues)
            .unwrap_err();
        assert_eq!(
            error.issues().unwrap(),
            [
                "Need a floorplan with Simulation data",
                "Please add a floorplan with UDRH REM/Rate® data"
            ]
        );
    }

    #[rstest]
    fn should_fail_structurally_on_unknown_simulation(catalog: SimulationCatalog) {
        let mut issues = IssueCollector::default();
        let error = select_profiles(&input(json!({"simulation_id": 99})), None, &catalog, &mut issues)
            .unwrap_err();
        assert!(matches!(error, CalculatorError::Structural(_)));
    }
}
