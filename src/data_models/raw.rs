use super::{EnergyProfileSource, FuelType};
use serde_json::{Map, Value};

/// A profile supplied inline as a plain mapping, e.g. `code_data` or `improved_data`.
///
/// Missing consumption figures read as zero. When no totals are given they are the sum of
/// the heating and cooling figures.
#[derive(Clone, Debug)]
pub struct RawProfile {
    data: Map<String, Value>,
    is_improved: bool,
}

impl RawProfile {
    pub fn new(data: Map<String, Value>, is_improved: bool) -> Self {
        Self { data, is_improved }
    }

    pub fn is_improved(&self) -> bool {
        self.is_improved
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    fn number(&self, key: &str) -> Option<f64> {
        match self.data.get(key)? {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse().ok(),
            Value::Bool(flag) => Some(if *flag { 1. } else { 0. }),
            _ => None,
        }
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.data
            .get(key)
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
    }

    fn fuel(&self, key: &str) -> Option<FuelType> {
        self.text(key).map(FuelType::from_description)
    }
}

impl EnergyProfileSource for RawProfile {
    fn heating_kwh(&self) -> f64 {
        self.number("heating_kwh").unwrap_or_default()
    }

    fn heating_therms(&self) -> f64 {
        self.number("heating_therms").unwrap_or_default()
    }

    fn cooling_kwh(&self) -> f64 {
        self.number("cooling_kwh").unwrap_or_default()
    }

    fn total_consumption_kwh(&self) -> f64 {
        self.number("total_consumption_kwh")
            .unwrap_or_else(|| self.heating_kwh() + self.cooling_kwh())
    }

    fn total_consumption_therms(&self) -> f64 {
        self.number("total_consumption_therms")
            .unwrap_or_else(|| self.heating_therms())
    }

    fn primary_heating_type(&self) -> Option<&str> {
        self.text("primary_heating_type")
    }

    fn primary_cooling_type(&self) -> Option<&str> {
        self.text("primary_cooling_type")
    }

    fn primary_cooling_fuel(&self) -> Option<&str> {
        self.text("primary_cooling_fuel")
    }

    fn primary_water_heating_type(&self) -> Option<&str> {
        self.text("primary_water_heating_type")
    }

    fn primary_water_heating_fuel(&self) -> Option<FuelType> {
        self.fuel("primary_water_heating_fuel")
    }

    fn clothes_dryer_fuel(&self) -> Option<FuelType> {
        self.fuel("clothes_dryer_fuel")
    }

    fn qty_heat_pump_water_heaters(&self) -> u32 {
        self.number("qty_heat_pump_water_heaters")
            .map(|quantity| quantity.max(0.) as u32)
            .unwrap_or_default()
    }

    fn square_footage(&self) -> Option<f64> {
        self.number("square_footage")
            .or_else(|| self.number("conditioned_area"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use serde_json::json;

    fn profile(value: Value, is_improved: bool) -> RawProfile {
        RawProfile::new(value.as_object().cloned().unwrap(), is_improved)
    }

    #[rstest]
    fn should_default_totals_to_heating_and_cooling() {
        let code = profile(
            json!({"heating_therms": 30, "heating_kwh": 10000, "cooling_kwh": 2100}),
            false,
        );

        assert_eq!(code.total_consumption_kwh(), 12100.);
        assert_eq!(code.total_consumption_therms(), 30.);
        assert_relative_eq!(code.total_consumption_mmbtu(), 44.2852, max_relative = 1e-9);
        assert!(!code.is_improved());
    }

    #[rstest]
    fn should_read_numeric_strings_and_descriptions() {
        let improved = profile(
            json!({
                "heating_kwh": "8000",
                "total_consumption_kwh": 9000.5,
                "primary_heating_type": "Air-source heat pump",
                "primary_water_heating_fuel": "Natural gas",
                "qty_heat_pump_water_heaters": 2,
                "primary_cooling_fuel": "",
            }),
            true,
        );

        assert_eq!(improved.heating_kwh(), 8000.);
        assert_eq!(improved.total_consumption_kwh(), 9000.5);
        assert!(improved.is_primary_heating_is_heat_pump());
        assert_eq!(improved.primary_water_heating_fuel(), Some(FuelType::NaturalGas));
        assert_eq!(improved.qty_heat_pump_water_heaters(), 2);
        assert_eq!(improved.primary_cooling_fuel(), None);
        assert_eq!(improved.clothes_dryer_fuel(), None);
    }

    #[rstest]
    fn should_derive_percent_improvement_from_totals() {
        let code = profile(json!({"total_consumption_kwh": 10000}), false);
        let improved = profile(json!({"total_consumption_kwh": 7500}), true);
        let empty = profile(json!({}), false);

        assert_relative_eq!(improved.get_udrh_percent_improvement(&code).unwrap(), 0.25);
        assert_eq!(improved.get_udrh_percent_improvement(&empty).unwrap(), 0.);
    }
}
