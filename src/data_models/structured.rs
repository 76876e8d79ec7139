use super::{Equipment, EnergyProfileSource, FuelType};
use crate::errors::StructuralError;
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

#[derive(Clone, Debug, Default, Deserialize_enum_str, PartialEq, Serialize_enum_str)]
pub enum AnalysisType {
    #[default]
    #[serde(rename = "design")]
    Design,
    #[serde(rename = "reference")]
    Reference,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Analysis {
    #[serde(rename = "type")]
    pub analysis_type: AnalysisType,
    #[serde(default)]
    pub heating_kwh: f64,
    #[serde(default)]
    pub heating_therms: f64,
    #[serde(default)]
    pub cooling_kwh: f64,
    #[serde(default)]
    pub total_consumption_kwh: f64,
    #[serde(default)]
    pub total_consumption_therms: f64,
}

impl Analysis {
    fn total_consumption_mmbtu(&self) -> f64 {
        self.total_consumption_therms * crate::constants::THERMS_TO_MMBTU
            + self.total_consumption_kwh * crate::constants::KWH_TO_MMBTU
    }
}

/// A simulation carrying its own design (as-built) and reference (code) analyses.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StructuredSimulation {
    pub id: u64,
    #[serde(default)]
    pub analyses: Vec<Analysis>,
    pub conditioned_area: Option<f64>,
    pub dominant_heating_equipment: Option<Equipment>,
    pub dominant_cooling_equipment: Option<Equipment>,
    pub dominant_water_heating_equipment: Option<Equipment>,
    pub clothes_dryer_fuel: Option<FuelType>,
    #[serde(default)]
    pub heat_pump_water_heater_count: u32,
}

/// One side of a structured simulation: the reference analysis as code data, or the design
/// analysis as improved data.
#[derive(Clone, Debug)]
pub struct StructuredProfile {
    simulation: StructuredSimulation,
    design: Analysis,
    reference: Analysis,
    is_improved: bool,
}

impl StructuredProfile {
    pub fn new(simulation: &StructuredSimulation, is_improved: bool) -> Result<Self, StructuralError> {
        let (design, reference) = match simulation
            .analyses
            .iter()
            .filter(|analysis| !matches!(analysis.analysis_type, AnalysisType::Other(_)))
            .collect::<Vec<_>>()
            .as_slice()
        {
            [first, second] => match (&first.analysis_type, &second.analysis_type) {
                (AnalysisType::Design, AnalysisType::Reference) => (*first, *second),
                (AnalysisType::Reference, AnalysisType::Design) => (*second, *first),
                _ => return Err(analyses_error(simulation)),
            },
            _ => return Err(analyses_error(simulation)),
        };

        Ok(Self {
            simulation: simulation.clone(),
            design: design.clone(),
            reference: reference.clone(),
            is_improved,
        })
    }

    pub fn simulation(&self) -> &StructuredSimulation {
        &self.simulation
    }

    fn analysis(&self) -> &Analysis {
        if self.is_improved {
            &self.design
        } else {
            &self.reference
        }
    }

    fn equipment_type(equipment: &Option<Equipment>) -> Option<&str> {
        equipment
            .as_ref()
            .and_then(|equipment| equipment.equipment_type.as_deref())
    }

    fn equipment_fuel(equipment: &Option<Equipment>) -> Option<&str> {
        equipment
            .as_ref()
            .and_then(|equipment| equipment.fuel.as_deref())
    }
}

fn analyses_error(simulation: &StructuredSimulation) -> StructuralError {
    StructuralError::new(anyhow!(
        "Simulation {} must have exactly one design and one reference analysis",
        simulation.id
    ))
}

impl EnergyProfileSource for StructuredProfile {
    fn heating_kwh(&self) -> f64 {
        self.analysis().heating_kwh
    }

    fn heating_therms(&self) -> f64 {
        self.analysis().heating_therms
    }

    fn cooling_kwh(&self) -> f64 {
        self.analysis().cooling_kwh
    }

    fn total_consumption_kwh(&self) -> f64 {
        self.analysis().total_consumption_kwh
    }

    fn total_consumption_therms(&self) -> f64 {
        self.analysis().total_consumption_therms
    }

    fn primary_heating_type(&self) -> Option<&str> {
        Self::equipment_type(&self.simulation.dominant_heating_equipment)
    }

    fn primary_cooling_type(&self) -> Option<&str> {
        Self::equipment_type(&self.simulation.dominant_cooling_equipment)
    }

    fn primary_cooling_fuel(&self) -> Option<&str> {
        Self::equipment_fuel(&self.simulation.dominant_cooling_equipment)
    }

    fn primary_water_heating_type(&self) -> Option<&str> {
        Self::equipment_type(&self.simulation.dominant_water_heating_equipment)
    }

    fn primary_water_heating_fuel(&self) -> Option<FuelType> {
        Self::equipment_fuel(&self.simulation.dominant_water_heating_equipment)
            .map(FuelType::from_description)
    }

    fn clothes_dryer_fuel(&self) -> Option<FuelType> {
        self.simulation.clothes_dryer_fuel
    }

    fn qty_heat_pump_water_heaters(&self) -> u32 {
        self.simulation.heat_pump_water_heater_count
    }

    fn square_footage(&self) -> Option<f64> {
        self.simulation.conditioned_area
    }

    fn dominant_heating_fuel(&self) -> Option<&str> {
        Self::equipment_fuel(&self.simulation.dominant_heating_equipment)
    }

    /// Always the simulation's own design against its own reference.
    fn get_udrh_percent_improvement(&self, _code: &dyn EnergyProfileSource) -> anyhow::Result<f64> {
        let reference = self.reference.total_consumption_mmbtu();
        if reference == 0. {
            return Ok(0.);
        }
        Ok((reference - self.design.total_consumption_mmbtu()) / reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use serde_json::json;

    #[fixture]
    fn simulation() -> StructuredSimulation {
        serde_json::from_value(json!({
            "id": 7,
            "analyses": [
                {"type": "design", "heating_kwh": 6000., "total_consumption_kwh": 8000., "total_consumption_therms": 0.},
                {"type": "reference", "heating_kwh": 8000., "total_consumption_kwh": 10000., "total_consumption_therms": 0.},
                {"type": "open_house"},
            ],
            "conditioned_area": 2100.,
            "dominant_heating_equipment": {"type": "Air source heat pump", "fuel": "Electric"},
            "heat_pump_water_heater_count": 1,
        }))
        .unwrap()
    }

    #[rstest]
    fn should_split_design_and_reference(simulation: StructuredSimulation) {
        let code = StructuredProfile::new(&simulation, false).unwrap();
        let improved = StructuredProfile::new(&simulation, true).unwrap();

        assert_eq!(code.heating_kwh(), 8000.);
        assert_eq!(improved.heating_kwh(), 6000.);
        assert_eq!(improved.square_footage(), Some(2100.));
        assert_eq!(improved.qty_heat_pump_water_heaters(), 1);
        assert!(improved.is_primary_heating_is_heat_pump());
        assert_eq!(improved.dominant_heating_fuel(), Some("Electric"));
        assert_relative_eq!(improved.get_udrh_percent_improvement(&code).unwrap(), 0.2);
    }

    #[rstest]
    fn should_require_one_design_and_one_reference(mut simulation: StructuredSimulation) {
        simulation.analyses[1].analysis_type = AnalysisType::Design;
        assert!(StructuredProfile::new(&simulation, true).is_err());

        simulation.analyses.truncate(1);
        assert!(StructuredProfile::new(&simulation, true).is_err());
    }
}
