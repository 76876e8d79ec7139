//! BPA busbar incentives and the utility policies layered over them.
//!
//! Savings are split into short, medium and long measure lives, each paid at its own BPA rate.
//! A utility policy decides whether the home is eligible and what the builder is paid.

mod utilities;

pub use utilities::{select_incentives, Utility};

use crate::calculator::ProgramVersion;
use crate::compare_floats::{max_of_2, round_to};
use crate::constants::{
    BPA_LONG_RATE, BPA_MEDIUM_RATE, BPA_SHORT_RATE, COOLING_INTERNAL_GAINS_PCT,
    MEDIUM_MEASURE_LIFE_PCT,
};
use crate::data_models::{is_heat_pump, EnergyProfileSource};
use crate::normalize::{HeatingFuel, NormalizedParameters, UsState};
use crate::report::{format_value, ValueFormat};
use crate::savings::{SavingsResult, WaterHeaterType};
use indexmap::IndexMap;
use serde_json::{json, Value};
use std::iter::Sum;
use std::ops::Add;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

/// Savings apportioned by how long the measure keeps saving.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeasureLife {
    pub short: f64,
    pub medium: f64,
    pub long: f64,
}

impl MeasureLife {
    pub fn new(short: f64, medium: f64, long: f64) -> Self {
        Self {
            short,
            medium,
            long,
        }
    }

    fn short(savings: f64) -> Self {
        Self::new(savings, 0., 0.)
    }

    fn medium(savings: f64) -> Self {
        Self::new(0., savings, 0.)
    }

    /// `medium_pct` of the savings are medium life, the rest long.
    fn split(savings: f64, medium_pct: f64) -> Self {
        let medium = savings * medium_pct;
        Self::new(0., medium, savings - medium)
    }
}

impl Add for MeasureLife {
    type Output = MeasureLife;

    fn add(self, other: Self) -> Self::Output {
        Self::new(
            self.short + other.short,
            self.medium + other.medium,
            self.long + other.long,
        )
    }
}

impl Sum for MeasureLife {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(MeasureLife::default(), Add::add)
    }
}

#[derive(Clone, Copy, Debug, EnumIter, Eq, IntoStaticStr, PartialEq)]
pub enum Measure {
    Heating,
    Cooling,
    #[strum(serialize = "Smart Thermostat")]
    SmartThermostat,
    #[strum(serialize = "Water Heating")]
    WaterHeater,
    #[strum(serialize = "Low Flow Shower Head")]
    Showerhead,
    Lighting,
    Appliances,
}

impl Measure {
    /// The measures a program offers, in the order the savings summary lists them.
    pub fn measures_for(program: ProgramVersion) -> Vec<Measure> {
        let mut measures = vec![
            Measure::Heating,
            Measure::SmartThermostat,
            Measure::Cooling,
            Measure::WaterHeater,
        ];
        if program == ProgramVersion::V2 {
            measures.extend([Measure::Showerhead, Measure::Lighting]);
        }
        measures.push(Measure::Appliances);
        measures
    }

    pub fn label(&self) -> &'static str {
        self.into()
    }

    pub fn kwh_savings(&self, inputs: &IncentiveInputs) -> f64 {
        match self {
            Measure::Heating => inputs.heating_kwh_savings,
            Measure::Cooling => inputs.cooling_kwh_savings,
            Measure::SmartThermostat => inputs.smart_thermostat_kwh_savings,
            Measure::WaterHeater => inputs.water_heater_kwh_savings,
            Measure::Showerhead => inputs.showerhead_kwh_savings,
            Measure::Lighting => inputs.lighting_kwh_savings,
            Measure::Appliances => inputs.appliance_kwh_savings,
        }
    }

    pub fn therm_savings(&self, inputs: &IncentiveInputs) -> f64 {
        match self {
            Measure::Heating => inputs.heating_therm_savings,
            Measure::Cooling => inputs.cooling_therm_savings,
            Measure::SmartThermostat => inputs.smart_thermostat_therm_savings,
            Measure::WaterHeater => inputs.water_heater_therm_savings,
            Measure::Showerhead => inputs.showerhead_therm_savings,
            Measure::Lighting => inputs.lighting_therm_savings,
            Measure::Appliances => inputs.appliance_therm_savings,
        }
    }
}

/// Everything a policy needs to know about a home, flattened out of the calculation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncentiveInputs {
    pub program: ProgramVersion,
    pub us_state: Option<UsState>,
    pub heating_kwh_savings: f64,
    pub heating_therm_savings: f64,
    pub cooling_kwh_savings: f64,
    pub cooling_therm_savings: f64,
    pub water_heater_kwh_savings: f64,
    pub water_heater_therm_savings: f64,
    pub smart_thermostat_kwh_savings: f64,
    pub smart_thermostat_therm_savings: f64,
    pub showerhead_kwh_savings: f64,
    pub showerhead_therm_savings: f64,
    pub lighting_kwh_savings: f64,
    pub lighting_therm_savings: f64,
    pub appliance_kwh_savings: f64,
    pub appliance_therm_savings: f64,
    pub default_percent_improvement: f64,
    pub revised_percent_improvement: f64,
    pub reference_home_kwh: f64,
    pub total_kwh_savings: f64,
    pub total_therm_savings: f64,
    pub heating_type: Option<String>,
    pub heating_fuel: Option<HeatingFuel>,
    pub cooling_type: Option<String>,
    pub cooling_fuel: Option<String>,
    pub water_heater_type: Option<WaterHeaterType>,
    pub water_heater_tier: Option<&'static str>,
    pub electric_meter_number: Option<String>,
    pub electric_utility: Option<String>,
    pub gas_utility: Option<String>,
    pub earth_advantage_certified: Option<String>,
}

impl IncentiveInputs {
    pub fn new(
        params: &NormalizedParameters,
        savings: &SavingsResult,
        improved: &dyn EnergyProfileSource,
    ) -> Self {
        Self {
            program: params.program,
            us_state: params.us_state,
            heating_kwh_savings: savings.heating_cooling.heating_kwh,
            heating_therm_savings: savings.heating_cooling.heating_therm,
            cooling_kwh_savings: savings.heating_cooling.cooling_kwh,
            cooling_therm_savings: savings.heating_cooling.cooling_therm,
            water_heater_kwh_savings: savings.water_heater.kwh,
            water_heater_therm_savings: savings.water_heater.therm,
            smart_thermostat_kwh_savings: savings.smart_thermostat.kwh(),
            smart_thermostat_therm_savings: savings.smart_thermostat.therm(),
            showerhead_kwh_savings: savings.showerhead_kwh(),
            showerhead_therm_savings: savings.showerhead_therm(),
            lighting_kwh_savings: savings.lighting_kwh(),
            lighting_therm_savings: savings.lighting_therm(),
            appliance_kwh_savings: savings.appliances.kwh(),
            appliance_therm_savings: savings.appliances.therm(),
            default_percent_improvement: params.default_percent_improvement,
            revised_percent_improvement: savings.revised_percent_improvement(),
            reference_home_kwh: savings.code_total_consumption_kwh,
            total_kwh_savings: savings.total_kwh(),
            total_therm_savings: savings.total_therm(),
            heating_type: improved.primary_heating_type().map(ToString::to_string),
            heating_fuel: params.heating_fuel,
            cooling_type: improved.primary_cooling_type().map(ToString::to_string),
            cooling_fuel: improved.primary_cooling_fuel().map(ToString::to_string),
            water_heater_type: savings.water_heater.water_heater_type,
            water_heater_tier: params.water_heater_tier,
            electric_meter_number: params.electric_meter_number.clone(),
            electric_utility: params.electric_utility.clone(),
            gas_utility: params.gas_utility.clone(),
            earth_advantage_certified: params.earth_advantage_certified.clone(),
        }
    }
}

/// The incentives of one home under one utility policy.
#[derive(Clone, Debug, PartialEq)]
pub struct Incentives {
    utility: Utility,
    inputs: IncentiveInputs,
}

impl Incentives {
    pub fn new(utility: Utility, inputs: IncentiveInputs) -> Self {
        Self { utility, inputs }
    }

    pub fn utility(&self) -> Utility {
        self.utility
    }

    pub fn inputs(&self) -> &IncentiveInputs {
        &self.inputs
    }

    pub fn has_heat_pump(&self) -> bool {
        self.inputs.heating_type.as_deref().is_some_and(is_heat_pump)
    }

    pub fn percent_improvement(&self) -> f64 {
        self.inputs.revised_percent_improvement
    }

    pub fn pct_improvement_method(&self) -> &'static str {
        "alternate"
    }

    pub fn kwh_measure_life(&self, measure: Measure) -> MeasureLife {
        let inputs = &self.inputs;
        match measure {
            Measure::Heating => MeasureLife::split(inputs.heating_kwh_savings, MEDIUM_MEASURE_LIFE_PCT),
            Measure::Cooling => {
                MeasureLife::split(inputs.cooling_kwh_savings, COOLING_INTERNAL_GAINS_PCT)
            }
            Measure::SmartThermostat => MeasureLife::short(inputs.smart_thermostat_kwh_savings),
            Measure::WaterHeater => MeasureLife::medium(inputs.water_heater_kwh_savings),
            Measure::Showerhead => MeasureLife::short(inputs.showerhead_kwh_savings),
            Measure::Lighting => MeasureLife::short(inputs.lighting_kwh_savings),
            Measure::Appliances => MeasureLife::medium(inputs.appliance_kwh_savings),
        }
    }

    pub fn therm_measure_life(&self, measure: Measure) -> MeasureLife {
        let inputs = &self.inputs;
        match measure {
            Measure::Heating => {
                MeasureLife::split(inputs.heating_therm_savings, MEDIUM_MEASURE_LIFE_PCT)
            }
            Measure::Cooling => {
                MeasureLife::split(inputs.cooling_therm_savings, COOLING_INTERNAL_GAINS_PCT)
            }
            Measure::SmartThermostat => MeasureLife::short(inputs.smart_thermostat_therm_savings),
            Measure::WaterHeater => MeasureLife::medium(inputs.water_heater_therm_savings),
            Measure::Showerhead => MeasureLife::short(inputs.showerhead_therm_savings),
            // lighting never saves gas
            Measure::Lighting => MeasureLife::default(),
            Measure::Appliances => MeasureLife::medium(inputs.appliance_therm_savings),
        }
    }

    pub fn total_kwh_measure_life(&self) -> MeasureLife {
        Measure::iter().map(|measure| self.kwh_measure_life(measure)).sum()
    }

    pub fn total_therm_measure_life(&self) -> MeasureLife {
        Measure::iter().map(|measure| self.therm_measure_life(measure)).sum()
    }

    pub fn bpa_hvac_kwh_savings(&self) -> f64 {
        self.kwh_measure_life(Measure::Heating).medium + self.kwh_measure_life(Measure::Cooling).medium
    }

    pub fn hvac_kwh_incentive(&self) -> f64 {
        round_to(self.bpa_hvac_kwh_savings() * BPA_MEDIUM_RATE, 2)
    }

    pub fn bpa_lighting_kwh_savings(&self) -> f64 {
        self.kwh_measure_life(Measure::Lighting).short
    }

    pub fn lighting_kwh_incentive(&self) -> f64 {
        round_to(self.bpa_lighting_kwh_savings() * BPA_SHORT_RATE, 2)
    }

    pub fn bpa_water_heater_kwh_savings(&self) -> f64 {
        self.kwh_measure_life(Measure::WaterHeater).medium
    }

    pub fn water_heater_kwh_incentive(&self) -> f64 {
        round_to(self.bpa_water_heater_kwh_savings() * BPA_MEDIUM_RATE, 2)
    }

    pub fn bpa_appliance_kwh_savings(&self) -> f64 {
        self.kwh_measure_life(Measure::Appliances).medium
    }

    pub fn appliance_kwh_incentive(&self) -> f64 {
        round_to(self.bpa_appliance_kwh_savings() * BPA_MEDIUM_RATE, 2)
    }

    pub fn bpa_showerhead_kwh_savings(&self) -> f64 {
        self.kwh_measure_life(Measure::Showerhead).short
    }

    pub fn showerhead_kwh_incentive(&self) -> f64 {
        round_to(self.bpa_showerhead_kwh_savings() * BPA_SHORT_RATE, 2)
    }

    pub fn bpa_windows_shell_kwh_savings(&self) -> f64 {
        self.kwh_measure_life(Measure::Heating).long + self.kwh_measure_life(Measure::Cooling).long
    }

    pub fn windows_shell_kwh_incentive(&self) -> f64 {
        round_to(self.bpa_windows_shell_kwh_savings() * BPA_LONG_RATE, 2)
    }

    pub fn bpa_smart_thermostat_kwh_savings(&self) -> f64 {
        self.kwh_measure_life(Measure::SmartThermostat).short
    }

    pub fn smart_thermostat_kwh_incentive(&self) -> f64 {
        round_to(self.bpa_smart_thermostat_kwh_savings() * BPA_SHORT_RATE, 2)
    }

    // The reported figures leave appliances out of every bucket.

    pub fn reported_shell_windows_kwh_savings(&self) -> f64 {
        self.total_kwh_measure_life().long - self.kwh_measure_life(Measure::Appliances).long
    }

    pub fn reported_shell_windows_incentive(&self) -> f64 {
        round_to(self.reported_shell_windows_kwh_savings() * BPA_LONG_RATE, 2)
    }

    pub fn reported_hvac_waterheater_kwh_savings(&self) -> f64 {
        self.total_kwh_measure_life().medium - self.kwh_measure_life(Measure::Appliances).medium
    }

    pub fn reported_hvac_waterheater_incentive(&self) -> f64 {
        round_to(self.reported_hvac_waterheater_kwh_savings() * BPA_MEDIUM_RATE, 2)
    }

    pub fn reported_lighting_showerhead_tstats_kwh_savings(&self) -> f64 {
        self.total_kwh_measure_life().short - self.kwh_measure_life(Measure::Appliances).short
    }

    pub fn reported_lighting_showerhead_tstats_incentive(&self) -> f64 {
        round_to(
            self.reported_lighting_showerhead_tstats_kwh_savings() * BPA_SHORT_RATE,
            2,
        )
    }

    pub fn bpa_total_kwh_savings(&self) -> f64 {
        self.bpa_hvac_kwh_savings()
            + self.bpa_lighting_kwh_savings()
            + self.bpa_water_heater_kwh_savings()
            + self.bpa_appliance_kwh_savings()
            + self.bpa_windows_shell_kwh_savings()
            + self.bpa_smart_thermostat_kwh_savings()
            + self.bpa_showerhead_kwh_savings()
    }

    pub fn busbar_savings(&self) -> f64 {
        self.bpa_total_kwh_savings()
    }

    pub fn busbar_consumption(&self) -> f64 {
        max_of_2(self.inputs.reference_home_kwh - self.busbar_savings(), 0.)
    }

    /// Sum of the BPA measure incentives, paid only when the home qualifies. Not what the
    /// builder receives.
    pub fn total_incentive(&self) -> f64 {
        if !self.has_bpa_incentive() {
            return 0.;
        }
        round_to(
            max_of_2(
                self.hvac_kwh_incentive()
                    + self.lighting_kwh_incentive()
                    + self.water_heater_kwh_incentive()
                    + self.appliance_kwh_incentive()
                    + self.windows_shell_kwh_incentive()
                    + self.smart_thermostat_kwh_incentive()
                    + self.showerhead_kwh_incentive(),
                0.,
            ),
            2,
        )
    }

    pub fn report(&self) -> String {
        let plain = |value: f64| format_value(value, 2, ValueFormat::Plain);
        let dollars = |value: f64| format_value(value, 2, ValueFormat::Dollars);
        let is_v2 = self.inputs.program == ProgramVersion::V2;

        let mut data = vec![format!(
            "\n--- BPA ({}) Incentives ----",
            self.utility.name()
        )];

        let reported_row = |measure: &str, savings: f64, rate: f64, payment: f64| {
            format!(
                "{:<56} {:<15}{:>10}{:>15}",
                measure,
                plain(savings),
                dollars(rate),
                dollars(payment)
            )
        };
        data.push(format!(
            "{:<56} {:<15}{:>10}{:>15}",
            "Measure", "Savings (kWh)", "Rate ", "Payment"
        ));
        data.push(reported_row(
            "Shell Upgrades, incl. Windows",
            self.reported_shell_windows_kwh_savings(),
            BPA_LONG_RATE,
            self.reported_shell_windows_incentive(),
        ));
        data.push(reported_row(
            "HVAC and Water Heat Upgrades",
            self.reported_hvac_waterheater_kwh_savings(),
            BPA_MEDIUM_RATE,
            self.reported_hvac_waterheater_incentive(),
        ));
        data.push(reported_row(
            if is_v2 {
                "Lighting, incl. Fixtures, Showerheads, and Smart Tstats"
            } else {
                "Smart Tstats"
            },
            self.reported_lighting_showerhead_tstats_kwh_savings(),
            BPA_SHORT_RATE,
            self.reported_lighting_showerhead_tstats_incentive(),
        ));
        data.push(String::new());

        let measure_row = |measure: &str, life: &str, savings: f64, rate: f64, payment: f64| {
            format!(
                "{:<46} {:<10}{:<15}{:>10}{:>15}",
                measure,
                life,
                plain(savings),
                dollars(rate),
                dollars(payment)
            )
        };
        data.push(format!(
            "{:<46} {:<10}{:<15}{:>10}{:>15}",
            "Measure", "Life", "Savings (kWh)", "Rate ", "Payment"
        ));
        data.push(measure_row(
            "HVAC",
            "15",
            self.bpa_hvac_kwh_savings(),
            BPA_MEDIUM_RATE,
            self.hvac_kwh_incentive(),
        ));
        if is_v2 {
            data.push(measure_row(
                "Lighting",
                "12",
                self.bpa_lighting_kwh_savings(),
                BPA_SHORT_RATE,
                self.lighting_kwh_incentive(),
            ));
        }
        data.push(measure_row(
            "Water Heating",
            "13",
            self.bpa_water_heater_kwh_savings(),
            BPA_MEDIUM_RATE,
            self.water_heater_kwh_incentive(),
        ));
        data.push(measure_row(
            "Appliances & Other Electronics",
            "15",
            self.bpa_appliance_kwh_savings(),
            BPA_MEDIUM_RATE,
            self.appliance_kwh_incentive(),
        ));
        data.push(measure_row(
            "Windows & Other Shell",
            "45",
            self.bpa_windows_shell_kwh_savings(),
            BPA_LONG_RATE,
            self.windows_shell_kwh_incentive(),
        ));
        if is_v2 {
            data.push(measure_row(
                "Low Flow Shower Head",
                "5",
                self.bpa_showerhead_kwh_savings(),
                BPA_SHORT_RATE,
                self.showerhead_kwh_incentive(),
            ));
        }
        data.push(measure_row(
            "Smart Thermostat",
            "5",
            self.bpa_smart_thermostat_kwh_savings(),
            BPA_SHORT_RATE,
            self.smart_thermostat_kwh_incentive(),
        ));
        data.push(String::new());

        data.push(format!(
            "{:<30}{:<8}{:<20}",
            "Percent Improvement",
            format_value(self.percent_improvement(), 2, ValueFormat::Percent),
            "*Alt Method"
        ));
        data.push(String::new());

        data.push(format!(
            "{:<20}{:<20}{:<20}{:<15}{:>20}",
            "Reference Home kWh",
            "As-Built Home kWh",
            "Savings kWh",
            "Achieved Incentive",
            "Total BPA Payment"
        ));
        data.push(format!(
            "{:<20}{:<20}{:<20}{:<15}{:>20}",
            plain(self.inputs.reference_home_kwh),
            plain(self.busbar_consumption()),
            plain(self.busbar_savings()),
            if self.has_bpa_incentive() { "Yes" } else { "No" },
            dollars(self.total_incentive())
        ));

        data.extend(self.utility_report());

        data.push(String::new());
        data.push(format!(
            "{:<20}{:<20}{:<20}",
            "Builder Incentive",
            "",
            dollars(self.builder_incentive())
        ));

        data.join("\n")
    }

    /// Every incentive figure, keyed as the result mapping reports them.
    pub fn data(&self) -> IndexMap<&'static str, Value> {
        let percent = |value: f64| format_value(value, 1, ValueFormat::Percent);
        let dollars = |value: f64| format_value(value, 2, ValueFormat::Dollars);
        let method = self.pct_improvement_method();

        IndexMap::from([
            ("has_incentive", json!(self.has_incentive())),
            ("busbar_consumption", json!(self.busbar_consumption())),
            ("busbar_savings", json!(self.busbar_savings())),
            ("pct_improvement_method", json!(method)),
            ("pretty_pct_improvement_method", json!(capitalize(method))),
            ("required_pct_improvement", json!(self.required_pct_improvement())),
            ("percent_improvement", json!(self.percent_improvement())),
            (
                "pretty_percent_improvement",
                json!(percent(self.percent_improvement())),
            ),
            (
                "revised_percent_improvement",
                json!(self.inputs.revised_percent_improvement),
            ),
            (
                "pretty_revised_percent_improvement",
                json!(percent(self.inputs.revised_percent_improvement)),
            ),
            ("total_incentive", json!(self.total_incentive())),
            ("pretty_total_incentive", json!(dollars(self.total_incentive()))),
            ("builder_incentive", json!(self.builder_incentive())),
            (
                "pretty_builder_incentive",
                json!(dollars(self.builder_incentive())),
            ),
            ("bpa_hvac_kwh_savings", json!(self.bpa_hvac_kwh_savings())),
            ("hvac_kwh_incentive", json!(self.hvac_kwh_incentive())),
            ("bpa_lighting_kwh_savings", json!(self.bpa_lighting_kwh_savings())),
            ("lighting_kwh_incentive", json!(self.lighting_kwh_incentive())),
            (
                "bpa_water_heater_kwh_savings",
                json!(self.bpa_water_heater_kwh_savings()),
            ),
            (
                "water_heater_kwh_incentive",
                json!(self.water_heater_kwh_incentive()),
            ),
            (
                "bpa_appliance_kwh_savings",
                json!(self.bpa_appliance_kwh_savings()),
            ),
            ("appliance_kwh_incentive", json!(self.appliance_kwh_incentive())),
            (
                "bpa_windows_shell_kwh_savings",
                json!(self.bpa_windows_shell_kwh_savings()),
            ),
            (
                "windows_shell_kwh_incentive",
                json!(self.windows_shell_kwh_incentive()),
            ),
            (
                "bpa_showerhead_kwh_savings",
                json!(self.bpa_showerhead_kwh_savings()),
            ),
            ("showerhead_kwh_incentive", json!(self.showerhead_kwh_incentive())),
            (
                "bpa_smart_thermostat_kwh_savings",
                json!(self.bpa_smart_thermostat_kwh_savings()),
            ),
            (
                "smart_thermostat_kwh_incentive",
                json!(self.smart_thermostat_kwh_incentive()),
            ),
            (
                "incentive_paying_organization",
                json!(self.incentive_paying_organization()),
            ),
        ])
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::data_models::{EnergyProfile, ProfilePair, RawProfile};
    use crate::input::CalculationInput;
    use crate::normalize::IssueCollector;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use rstest::*;

    /// Runs inline code and improved data through normalization and savings.
    pub(crate) fn inputs_for(program: ProgramVersion, kwargs: Value) -> IncentiveInputs {
        let input = CalculationInput::from_map(kwargs.as_object().cloned().unwrap()).unwrap();
        let code = RawProfile::new(input.code_data.clone(), false);
        let improved = RawProfile::new(input.improved_data.clone(), true);
        let profiles = ProfilePair {
            code: EnergyProfile::Raw(code.clone()),
            improved: EnergyProfile::Raw(improved.clone()),
            input_simulation: None,
        };
        let mut issues = IssueCollector::default();
        let params = NormalizedParameters::new(program, &input, None, &profiles, &mut issues);
        assert!(issues.is_empty(), "{:?}", issues.issues());
        let savings = SavingsResult::calculate(&params, &code, &improved);
        IncentiveInputs::new(&params, &savings, &improved)
    }

    #[fixture]
    pub(crate) fn base_home() -> Value {
        json!({
            "us_state": "OR",
            "heating_fuel": "electric",
            "heating_system_config": "central",
            "home_size": "small",
            "heating_zone": "hz2",
            "water_heater_tier": "electric resistance",
            "cfl_installed": 5,
            "led_installed": 35,
            "total_installed_lamps": 40,
            "estar_std_refrigerators_installed": true,
            "estar_dishwasher_installed": true,
            "estar_front_load_clothes_washer_installed": true,
            "clothes_dryer_tier": "tier3",
            "smart_thermostat_installed": true,
            "qty_shower_head_1p5": 1,
            "qty_shower_head_1p75": 0,
            "code_data": {"heating_therms": 30.0, "heating_kwh": 10000.0, "cooling_kwh": 2100.0},
            "improved_data": {
                "heating_therms": 20.0,
                "heating_kwh": 8000.0,
                "cooling_kwh": 2000.0,
                "primary_heating_type": "heater",
                "primary_cooling_type": "air conditioner",
                "primary_cooling_fuel": "electric",
            },
            "percent_improvement": 0.15,
            "electric_utility": "foo",
            "gas_utility": "foo",
        })
    }

    #[rstest]
    fn should_split_heating_and_cooling_between_medium_and_long_lives() {
        let incentives = Incentives::new(
            Utility::Bpa,
            IncentiveInputs {
                heating_kwh_savings: 2000.,
                cooling_kwh_savings: 100.,
                lighting_kwh_savings: 50.,
                appliance_kwh_savings: 10.,
                ..Default::default()
            },
        );

        assert_eq!(
            incentives.kwh_measure_life(Measure::Heating),
            MeasureLife::new(0., 200., 1800.)
        );
        assert_eq!(
            incentives.kwh_measure_life(Measure::Cooling),
            MeasureLife::new(0., 75., 25.)
        );
        assert_eq!(
            incentives.total_kwh_measure_life(),
            MeasureLife::new(50., 285., 1825.)
        );
        assert_relative_eq!(incentives.reported_hvac_waterheater_kwh_savings(), 275.);
        assert_relative_eq!(incentives.reported_shell_windows_kwh_savings(), 1825.);
        assert_relative_eq!(incentives.reported_lighting_showerhead_tstats_kwh_savings(), 50.);
    }

    #[rstest]
    fn should_calculate_bpa_incentives(base_home: Value) {
        let incentives = Incentives::new(Utility::Bpa, inputs_for(ProgramVersion::V2, base_home));

        assert_relative_eq!(incentives.percent_improvement(), 0.2884, epsilon = 5e-5);
        assert_relative_eq!(incentives.bpa_hvac_kwh_savings(), 275.);
        assert_relative_eq!(incentives.hvac_kwh_incentive(), 74.25);
        assert_relative_eq!(incentives.bpa_windows_shell_kwh_savings(), 1825.);
        assert_relative_eq!(incentives.windows_shell_kwh_incentive(), 821.25);
        assert_relative_eq!(incentives.bpa_smart_thermostat_kwh_savings(), 600.);
        assert_relative_eq!(incentives.smart_thermostat_kwh_incentive(), 60.);
        assert_eq!(incentives.bpa_lighting_kwh_savings(), 0.);
        assert_relative_eq!(incentives.showerhead_kwh_incentive(), 15.29);
        assert_relative_eq!(incentives.bpa_appliance_kwh_savings(), 562.03, epsilon = 5e-3);
        assert_relative_eq!(incentives.appliance_kwh_incentive(), 151.75);
        assert_eq!(incentives.water_heater_kwh_incentive(), 0.);
        assert!(incentives.has_bpa_incentive());
        assert_relative_eq!(incentives.total_incentive(), 1122.54, epsilon = 1e-9);
        assert_eq!(incentives.has_incentive(), None);
        assert_eq!(incentives.builder_incentive(), 0.);
        assert_eq!(incentives.incentive_paying_organization(), None);
        assert_relative_eq!(incentives.busbar_consumption(), 8685.04, epsilon = 5e-3);
    }

    #[rstest]
    fn should_not_pay_bpa_below_required_improvement(mut base_home: Value) {
        base_home["improved_data"]["heating_kwh"] = json!(12000.0);
        let incentives = Incentives::new(Utility::Bpa, inputs_for(ProgramVersion::V2, base_home));

        assert!(!incentives.has_bpa_incentive());
        assert_eq!(incentives.total_incentive(), 0.);
    }

    #[rstest]
    fn should_never_report_negative_busbar_consumption() {
        let incentives = Incentives::new(
            Utility::Bpa,
            IncentiveInputs {
                heating_kwh_savings: 5000.,
                reference_home_kwh: 1000.,
                ..Default::default()
            },
        );
        assert_eq!(incentives.busbar_consumption(), 0.);
    }

    #[rstest]
    fn should_key_data_in_result_order(base_home: Value) {
        let incentives = Incentives::new(Utility::Bpa, inputs_for(ProgramVersion::V2, base_home));
        let data = incentives.data();

        assert_eq!(data.len(), 29);
        assert_eq!(data.get_index(0).unwrap().0, &"has_incentive");
        assert_eq!(data["has_incentive"], Value::Null);
        assert_eq!(data["pretty_pct_improvement_method"], json!("Alternate"));
        assert_eq!(data["pretty_percent_improvement"], json!("28.8%"));
        assert_eq!(
            data.get_index(data.len() - 1).unwrap().0,
            &"incentive_paying_organization"
        );
    }

    #[rstest]
    fn should_report_measures_by_program(base_home: Value) {
        let v2 = Incentives::new(
            Utility::Bpa,
            inputs_for(ProgramVersion::V2, base_home.clone()),
        )
        .report();
        assert!(v2.starts_with("\n--- BPA (BPA) Incentives ----"));
        assert!(v2.contains("Lighting, incl. Fixtures, Showerheads, and Smart Tstats"));
        assert!(v2.contains("Low Flow Shower Head"));
        assert!(v2.contains("*Alt Method"));
        assert!(v2.trim_end().ends_with("$0.00"));
        assert!(v2.contains("Total BPA Payment"));

        let mut inputs = inputs_for(ProgramVersion::V2, base_home);
        inputs.program = ProgramVersion::V3;
        let v3 = Incentives::new(Utility::Bpa, inputs).report();
        assert!(!v3.contains("Low Flow Shower Head"));
        assert!(!v3.contains("Lighting, incl."));
        assert!(v3.contains("Smart Tstats"));
    }
}
