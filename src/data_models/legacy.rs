use super::{Equipment, EnergyProfileSource, FuelType, SimulationStore};
use crate::errors::StructuralError;
use crate::normalize::IssueCollector;
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};
use tracing::debug;

const STANDARD_BUILDING: u8 = 1;
const UDRH_AS_IS_BUILDING: u8 = 4;
const UDRH_REFERENCE_BUILDING: u8 = 5;

#[derive(Clone, Debug, Deserialize_enum_str, PartialEq, Serialize_enum_str)]
pub enum EnergyUnit {
    #[serde(rename = "kWh")]
    Kwh,
    #[serde(rename = "Therms")]
    Therms,
    #[serde(rename = "MMBtu")]
    Mmbtu,
    #[serde(other)]
    Other(String),
}

/// One fuel's consumption breakdown from a REM/Rate® export.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FuelSummaryRow {
    pub fuel: String,
    pub units: EnergyUnit,
    #[serde(default)]
    pub heating: f64,
    #[serde(default)]
    pub cooling: f64,
    #[serde(default)]
    pub hot_water: f64,
    #[serde(default)]
    pub lights_and_appliances: f64,
    #[serde(default)]
    pub total: f64,
}

impl FuelSummaryRow {
    fn total_or_sum(&self) -> f64 {
        if self.total != 0. {
            self.total
        } else {
            self.heating + self.cooling + self.hot_water + self.lights_and_appliances
        }
    }
}

/// A REM/Rate® export record. Export type 4 is the as-built (UDRH As Is) home and type 5
/// its UDRH reference home.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LegacySimulation {
    pub id: u64,
    pub name: Option<String>,
    pub export_type: u8,
    #[serde(default)]
    pub solar_system_type: u8,
    #[serde(default)]
    pub similar: Vec<u64>,
    #[serde(default)]
    pub references: Vec<u64>,
    #[serde(default)]
    pub fuel_summary: Vec<FuelSummaryRow>,
    pub dominant_heating: Option<Equipment>,
    pub dominant_cooling: Option<Equipment>,
    pub dominant_water_heating: Option<Equipment>,
    pub clothes_dryer_fuel: Option<FuelType>,
    #[serde(default)]
    pub qty_heat_pump_water_heaters: u32,
    pub conditioned_area: Option<f64>,
    /// Percent improvement over the UDRH reference, as computed by REM/Rate®.
    pub udrh_percent_improvement: Option<f64>,
}

impl LegacySimulation {
    pub fn export_type_display(&self) -> String {
        match self.export_type {
            STANDARD_BUILDING => "Standard Building".to_string(),
            UDRH_AS_IS_BUILDING => "UDRH As Is Building".to_string(),
            UDRH_REFERENCE_BUILDING => "UDRH Reference Building".to_string(),
            other => format!("Export Type {other}"),
        }
    }

    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Simulation {}", self.id))
    }

    fn has_solar(&self) -> bool {
        matches!(self.solar_system_type, 1 | 2)
    }

    fn is_as_is(&self) -> bool {
        self.export_type == UDRH_AS_IS_BUILDING
    }

    fn consumption(&self, units: EnergyUnit, column: impl Fn(&FuelSummaryRow) -> f64) -> f64 {
        self.fuel_summary
            .iter()
            .filter(|row| row.units == units)
            .map(column)
            .sum()
    }
}

#[derive(Clone, Debug)]
pub struct LegacyProfile {
    simulation: LegacySimulation,
}

impl LegacyProfile {
    pub fn new(simulation: &LegacySimulation) -> Self {
        Self {
            simulation: simulation.clone(),
        }
    }

    pub fn simulation(&self) -> &LegacySimulation {
        &self.simulation
    }
}

impl EnergyProfileSource for LegacyProfile {
    fn heating_kwh(&self) -> f64 {
        self.simulation.consumption(EnergyUnit::Kwh, |row| row.heating)
    }

    fn heating_therms(&self) -> f64 {
        self.simulation.consumption(EnergyUnit::Therms, |row| row.heating)
    }

    fn cooling_kwh(&self) -> f64 {
        self.simulation.consumption(EnergyUnit::Kwh, |row| row.cooling)
    }

    fn total_consumption_kwh(&self) -> f64 {
        self.simulation
            .consumption(EnergyUnit::Kwh, FuelSummaryRow::total_or_sum)
    }

    fn total_consumption_therms(&self) -> f64 {
        self.simulation
            .consumption(EnergyUnit::Therms, FuelSummaryRow::total_or_sum)
    }

    fn primary_heating_type(&self) -> Option<&str> {
        self.simulation
            .dominant_heating
            .as_ref()
            .and_then(|equipment| equipment.equipment_type.as_deref())
    }

    fn primary_cooling_type(&self) -> Option<&str> {
        self.simulation
            .dominant_cooling
            .as_ref()
            .and_then(|equipment| equipment.equipment_type.as_deref())
    }

    fn primary_cooling_fuel(&self) -> Option<&str> {
        self.simulation
            .dominant_cooling
            .as_ref()
            .and_then(|equipment| equipment.fuel.as_deref())
    }

    fn primary_water_heating_type(&self) -> Option<&str> {
        self.simulation
            .dominant_water_heating
            .as_ref()
            .and_then(|equipment| equipment.equipment_type.as_deref())
    }

    fn primary_water_heating_fuel(&self) -> Option<FuelType> {
        self.simulation
            .dominant_water_heating
            .as_ref()
            .and_then(|equipment| equipment.fuel.as_deref())
            .map(FuelType::from_description)
    }

    fn clothes_dryer_fuel(&self) -> Option<FuelType> {
        self.simulation.clothes_dryer_fuel
    }

    fn qty_heat_pump_water_heaters(&self) -> u32 {
        self.simulation.qty_heat_pump_water_heaters
    }

    fn square_footage(&self) -> Option<f64> {
        self.simulation.conditioned_area
    }

    fn dominant_heating_fuel(&self) -> Option<&str> {
        self.simulation
            .dominant_heating
            .as_ref()
            .and_then(|equipment| equipment.fuel.as_deref())
    }

    fn get_udrh_percent_improvement(&self, _code: &dyn EnergyProfileSource) -> anyhow::Result<f64> {
        self.simulation.udrh_percent_improvement.ok_or_else(|| {
            anyhow!(
                "Simulation {} has no UDRH percent improvement",
                self.simulation.id
            )
        })
    }
}

fn wrong_type(issues: &mut IssueCollector, simulation: &LegacySimulation) {
    issues.append(format!(
        "Input simulation ID {} is the wrong type '{}'.  Must be 'UDRH As Is Building'",
        simulation.id,
        simulation.export_type_display()
    ));
}

/// Walk from any simulation in a REM/Rate® export chain to its UDRH As Is and UDRH Reference
/// pair, preferring the solar variant of the as-built home where there is one.
///
/// Returns `None` (with an issue recorded) when the chain does not lead to a usable pair.
pub(super) fn resolve_pair<'a>(
    store: &'a dyn SimulationStore,
    id: u64,
    issues: &mut IssueCollector,
) -> Result<Option<(&'a LegacySimulation, &'a LegacySimulation)>, StructuralError> {
    let input = store
        .legacy_simulation(id)
        .ok_or_else(|| StructuralError::new(anyhow!("Simulation {id} could not be found")))?;

    let similar_as_is = |with_solar: bool| {
        store
            .legacy_similar_to(input.id)
            .into_iter()
            .filter(|simulation| simulation.is_as_is() && simulation.has_solar() == with_solar)
            .next_back()
    };

    let improved = match input.export_type {
        STANDARD_BUILDING => match similar_as_is(true).or_else(|| similar_as_is(false)) {
            Some(improved) => improved,
            None => {
                wrong_type(issues, input);
                return Ok(None);
            }
        },
        UDRH_AS_IS_BUILDING if !input.has_solar() => similar_as_is(true).unwrap_or(input),
        UDRH_REFERENCE_BUILDING => {
            let referencing = store
                .legacy_referencing(input.id)
                .into_iter()
                .filter(|simulation| simulation.is_as_is())
                .collect::<Vec<_>>();
            match referencing
                .iter()
                .rfind(|simulation| simulation.has_solar())
                .or(referencing.last())
                .copied()
            {
                Some(improved) => improved,
                None => {
                    wrong_type(issues, input);
                    return Ok(None);
                }
            }
        }
        _ => input,
    };

    if !improved.is_as_is() {
        return Err(StructuralError::new(anyhow!(
            "Wrong Input Type: simulation {} is a '{}'",
            improved.id,
            improved.export_type_display()
        )));
    }

    let Some(code) = improved
        .references
        .last()
        .and_then(|reference| store.legacy_simulation(*reference))
    else {
        issues.append(format!(
            "Unable to associate 'Improved Simulation' {} ID: {} to a 'Code Simulation'.",
            improved.display_name(),
            improved.id
        ));
        return Ok(None);
    };

    if code.export_type != UDRH_REFERENCE_BUILDING {
        return Err(StructuralError::new(anyhow!(
            "Wrong Code Input Type: simulation {} is a '{}'",
            code.id,
            code.export_type_display()
        )));
    }

    debug!(
        "Using REM Simulation {} as improved and {} as code data",
        improved.id, code.id
    );
    Ok(Some((code, improved)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_models::SimulationCatalog;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use serde_json::json;

    fn simulation(id: u64, export_type: u8, solar_system_type: u8) -> LegacySimulation {
        LegacySimulation {
            id,
            export_type,
            solar_system_type,
            ..Default::default()
        }
    }

    /// Standard building 1, as-built 2 (no solar) and 3 (solar) both similar to 1,
    /// reference 5 referenced by both as-built homes.
    #[fixture]
    fn catalog() -> SimulationCatalog {
        SimulationCatalog {
            structured: vec![],
            legacy: vec![
                simulation(1, STANDARD_BUILDING, 0),
                LegacySimulation {
                    similar: vec![1, 3],
                    references: vec![5],
                    ..simulation(2, UDRH_AS_IS_BUILDING, 0)
                },
                LegacySimulation {
                    similar: vec![1, 2],
                    references: vec![5],
                    ..simulation(3, UDRH_AS_IS_BUILDING, 1)
                },
                simulation(5, UDRH_REFERENCE_BUILDING, 0),
                simulation(6, 2, 0),
            ],
        }
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(5)]
    fn should_resolve_to_solar_as_built_and_reference(catalog: SimulationCatalog, #[case] id: u64) {
        let mut issues = IssueCollector::default();
        let (code, improved) = resolve_pair(&catalog, id, &mut issues).unwrap().unwrap();

        assert_eq!(improved.id, 3);
        assert_eq!(code.id, 5);
        assert!(issues.is_empty());
    }

    #[rstest]
    fn should_fall_back_to_non_solar_as_built(mut catalog: SimulationCatalog) {
        catalog.legacy.retain(|simulation| simulation.id != 3);
        let mut issues = IssueCollector::default();
        let (_, improved) = resolve_pair(&catalog, 1, &mut issues).unwrap().unwrap();

        assert_eq!(improved.id, 2);
    }

    #[rstest]
    fn should_report_standard_building_without_as_built(catalog: SimulationCatalog) {
        let catalog = SimulationCatalog {
            structured: vec![],
            legacy: vec![catalog.legacy[0].clone()],
        };
        let mut issues = IssueCollector::default();

        assert!(resolve_pair(&catalog, 1, &mut issues).unwrap().is_none());
        assert_eq!(
            issues.issues(),
            ["Input simulation ID 1 is the wrong type 'Standard Building'.  Must be 'UDRH As Is Building'"]
        );
    }

    #[rstest]
    fn should_report_missing_code_simulation(mut catalog: SimulationCatalog) {
        catalog.legacy.retain(|simulation| simulation.id != 5);
        let mut issues = IssueCollector::default();

        assert!(resolve_pair(&catalog, 3, &mut issues).unwrap().is_none());
        assert_eq!(
            issues.issues(),
            ["Unable to associate 'Improved Simulation' Simulation 3 ID: 3 to a 'Code Simulation'."]
        );
    }

    #[rstest]
    fn should_fail_structurally_on_other_export_types(catalog: SimulationCatalog) {
        let mut issues = IssueCollector::default();
        assert!(resolve_pair(&catalog, 6, &mut issues).is_err());
        assert!(resolve_pair(&catalog, 99, &mut issues).is_err());
    }

    #[rstest]
    fn should_sum_fuel_summary_by_units() {
        let simulation: LegacySimulation = serde_json::from_value(json!({
            "id": 4,
            "export_type": 4,
            "fuel_summary": [
                {"fuel": "Electric", "units": "kWh", "heating": 4000., "cooling": 900., "hot_water": 2000., "lights_and_appliances": 3000.},
                {"fuel": "Natural gas", "units": "Therms", "heating": 300., "total": 410.},
                {"fuel": "Solar", "units": "MMBtu", "total": -5.},
            ],
            "dominant_heating": {"type": "Fuel-fired air distribution", "fuel": "Natural gas"},
            "dominant_water_heating": {"type": "Conventional", "fuel": "Electric"},
            "udrh_percent_improvement": 0.21,
        }))
        .unwrap();
        let profile = LegacyProfile::new(&simulation);
        let code = LegacyProfile::new(&LegacySimulation::default());

        assert_eq!(profile.heating_kwh(), 4000.);
        assert_eq!(profile.cooling_kwh(), 900.);
        assert_eq!(profile.heating_therms(), 300.);
        assert_eq!(profile.total_consumption_kwh(), 9900.);
        assert_eq!(profile.total_consumption_therms(), 410.);
        assert_eq!(profile.dominant_heating_fuel(), Some("Natural gas"));
        assert_eq!(profile.primary_water_heating_fuel(), Some(FuelType::Electric));
        assert!(!profile.is_primary_heating_is_heat_pump());
        assert_eq!(profile.get_udrh_percent_improvement(&code).unwrap(), 0.21);
        assert!(code.get_udrh_percent_improvement(&profile).is_err());
    }
}
