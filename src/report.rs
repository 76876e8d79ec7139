//! Plain text reports of a calculation.
//!
//! Every report is a block of fixed width rows. Figures are rendered through
//! [`format_value`] so rounding is the same in every report.

use crate::compare_floats::round_to;
use crate::constants::{
    CLOTHES_WASHER_SAVINGS_PER_UNIT, DISHWASHER_SAVINGS_PER_UNIT, ELECTRICITY_ADJUSTMENT_FACTOR,
    GAS_ADJUSTMENT_FACTOR, REFRIGERATOR_SAVINGS_PER_UNIT, WEIGHTED_AVERAGE_CFL_WATTAGE,
    WEIGHTED_AVERAGE_HOU, WEIGHTED_AVERAGE_INEFFICIENT_WATTAGE, WEIGHTED_AVERAGE_LED_WATTAGE,
};
use crate::incentives::{Incentives, Measure};
use crate::input::CalculationInput;
use crate::normalize::{ApplianceChoices, NormalizedParameters};
use crate::savings::{
    ApplianceSavings, HeatingCoolingSavings, LightingSavings, SavingsResult, ShowerheadSavings,
    SmartThermostatSavings, WaterHeaterSavings, WaterHeaterType,
};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueFormat {
    Plain,
    /// A ratio shown as a percentage.
    Percent,
    Dollars,
}

/// Round to `decimals` places, ties to even, and render in the given format.
pub fn format_value(value: f64, decimals: usize, format: ValueFormat) -> String {
    let value = match format {
        ValueFormat::Percent => value * 100.,
        _ => value,
    };
    // adding zero turns a negative zero into a positive one
    let value = round_to(value, decimals as u32) + 0.;

    match format {
        ValueFormat::Plain => format!("{value:.decimals$}"),
        ValueFormat::Percent => format!("{value:.decimals$}%"),
        ValueFormat::Dollars => format!("${value:.decimals$}"),
    }
}

fn round(value: f64, decimals: usize) -> String {
    format_value(value, decimals, ValueFormat::Plain)
}

fn or_dash<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |value| value.to_string())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

fn display_input_value(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Inputs already shown in the main block of the summary.
const SUMMARY_NORMALIZED_KEYS: [&str; 6] = [
    "heating_fuel",
    "heating_system_config",
    "heating_zone",
    "home_size",
    "default_percent_improvement",
    "us_state",
];

/// Order of the remaining inputs in the summary; anything else follows in input order.
const SUMMARY_PRIORITY_KEYS: [&str; 21] = [
    "home_status_id",
    "electric_utility",
    "gas_utility",
    "heating_source",
    "water_heater_tier",
    "estar_std_refrigerators_installed",
    "estar_dishwasher_installed",
    "estar_front_load_clothes_washer_installed",
    "clothes_dryer_tier",
    "cfl_installed",
    "led_installed",
    "total_installed_lamps",
    "smart_thermostat_installed",
    "qty_shower_head_1p5",
    "qty_shower_head_1p75",
    "major-load-equipment",
    "hvac-combo",
    "hvac-cooling-combo",
    "water-heater-combo",
    "ventilation-combo",
    "program_redirected",
];

pub fn summary_report(
    input: &CalculationInput,
    home_status_id: Option<u64>,
    input_simulation: Option<u64>,
    params: &NormalizedParameters,
) -> String {
    let mut data = vec!["\n--- Inputs ----".to_string()];
    let rows: [(&str, String); 8] = [
        ("Project", or_dash(home_status_id)),
        ("Input Simulation", or_dash(input_simulation)),
        ("State", or_dash(params.us_state)),
        ("Heating Fuel", or_dash(params.heating_fuel)),
        ("Heating System Config", or_dash(params.heating_system_config)),
        ("Home Size", or_dash(params.home_size)),
        ("Heating Zone", or_dash(params.heating_zone)),
        (
            "Def. Percent Improvement",
            params.default_percent_improvement.to_string(),
        ),
    ];
    data.extend(rows.iter().map(|(label, value)| format!("{label:24}{value}")));

    data.push("\n--- Other Inputs ----".to_string());
    let keys = input
        .raw()
        .keys()
        .filter(|key| !SUMMARY_NORMALIZED_KEYS.contains(&key.as_str()))
        .sorted_by_key(|key| {
            SUMMARY_PRIORITY_KEYS
                .iter()
                .position(|priority| priority == key)
                .unwrap_or(SUMMARY_PRIORITY_KEYS.len())
        });
    for key in keys {
        let value = display_input_value(&input.raw()[key]);
        data.push(format!("{key:40}{value}"));
    }

    data.join("\n")
}

pub fn heating_cooling_report(savings: &HeatingCoolingSavings) -> String {
    let row = |label: &str, kwh: String, kwh_unit: &str, therms: String, therms_unit: &str| {
        format!("{label:<60} {kwh:<10}{kwh_unit:5}{:^10}{therms:<10}{therms_unit:<5}", "")
    };
    let kwh = |value: f64| round(value, 4);

    [
        "\n--- Heating and Cooling Energy Savings Calculations: ----".to_string(),
        row("", "Electricity".into(), "", "Gas".into(), ""),
        row(
            "Simulation Heating Energy Consumption Project",
            kwh(savings.improved_heating_kwh),
            "kWh",
            kwh(savings.improved_heating_therms),
            "Therms",
        ),
        row(
            "Simulation Heating Energy Consumption Baseline (UDRH)",
            kwh(savings.code_heating_kwh),
            "kWh",
            kwh(savings.code_heating_therms),
            "Therms",
        ),
        String::new(),
        row(
            "Simulation Cooling Energy Consumption Project",
            kwh(savings.improved_cooling_kwh),
            "kWh",
            String::new(),
            "",
        ),
        row(
            "Simulation Cooling Energy Consumption Baseline (UDRH)",
            kwh(savings.code_cooling_kwh),
            "kWh",
            String::new(),
            "",
        ),
        String::new(),
        row(
            "Adjustment Factor",
            round(ELECTRICITY_ADJUSTMENT_FACTOR, 1),
            "",
            round(GAS_ADJUSTMENT_FACTOR, 1),
            "",
        ),
        String::new(),
        row(
            "Heating Energy Savings",
            kwh(savings.heating_kwh),
            "kWh",
            kwh(savings.heating_therm),
            "Therms",
        ),
        row(
            "Cooling Energy Savings",
            kwh(savings.cooling_kwh),
            "kWh",
            kwh(savings.cooling_therm),
            "Therms",
        ),
    ]
    .join("\n")
}

pub fn hot_water_report(water_heater: &WaterHeaterSavings) -> String {
    let row = |label: &str, value: String, unit: &str| format!("{label:<60} {value:<10}{unit:<5}");

    let mut data = vec![
        "\n--- NEEA Water Heating Energy Savings Calculations ----".to_string(),
        row("Water Heater Tier", or_dash(water_heater.label), ""),
        row("Water Heater Savings", round(water_heater.kwh, 1), "kWh"),
        row("Water Heater Savings", round(water_heater.therm, 1), "Therms"),
    ];
    if water_heater.water_heater_type == Some(WaterHeaterType::HeatPump) {
        data.extend([
            String::new(),
            row(
                "# Heat Pump Water Heater",
                water_heater.qty_heat_pump_water_heaters.to_string(),
                "",
            ),
            row(
                "Baseline Consumption",
                round(water_heater.baseline_consumption, 1),
                "kWh",
            ),
            row("Heat Pump Water Heater kWh", round(water_heater.heat_pump_kwh, 1), "kWh"),
            row(
                "Annual Non Interactive Energy Savings",
                round(water_heater.heat_pump_kwh_savings, 1),
                "kWh",
            ),
        ]);
    }

    data.join("\n")
}

pub fn lighting_report(lighting: &LightingSavings) -> String {
    let row = |label: &str, value: String, unit: &str| format!("{label:<60} {value:<10}{unit:<5}");

    [
        "\n--- Lighting Energy Savings Calculations: ----".to_string(),
        row("# CFL Installed", lighting.cfl_installed.to_string(), ""),
        row("# LED Installed", lighting.led_installed.to_string(), ""),
        row(
            "# Total Installed Lamps",
            lighting.total_installed_lamps.to_string(),
            "",
        ),
        row(
            "Baseline High Efficacy Lamps",
            lighting.baseline_efficacy.to_string(),
            "",
        ),
        row(
            "Total Lamps over baseline",
            round(lighting.lamps_over_baseline, 1),
            "",
        ),
        row("Total CFL over baseline", round(lighting.cfl_over_baseline, 1), ""),
        row(
            "Total LED Lamps over baseline",
            round(lighting.led_over_baseline, 1),
            "",
        ),
        row("Weighted Average HOU", round(WEIGHTED_AVERAGE_HOU, 2), ""),
        row(
            "Weighted Average Inefficient Wattage",
            round(WEIGHTED_AVERAGE_INEFFICIENT_WATTAGE, 2),
            "Watts",
        ),
        row(
            "Weighted Average CFL Wattage",
            round(WEIGHTED_AVERAGE_CFL_WATTAGE, 2),
            "Watts",
        ),
        row(
            "Weighted Average LED Wattage",
            round(WEIGHTED_AVERAGE_LED_WATTAGE, 2),
            "Watts",
        ),
        row(
            "Annual Non Interactive Energy Savings",
            round(lighting.kwh, 2),
            "kWh",
        ),
    ]
    .join("\n")
}

pub fn appliance_report(appliances: &ApplianceSavings) -> String {
    let row = |label: &str, choice: String, per_unit: String, annual: String, unit: &str| {
        format!("{label:<60} {choice:<10}{per_unit:<10}{annual:<10}{unit:<5}")
    };
    let count = |installed: bool| u8::from(installed).to_string();

    let mut data = vec!["\n--- Appliance Energy Savings Calculations: ----".to_string()];
    match &appliances.choices {
        ApplianceChoices::Flags {
            refrigerator,
            dishwasher,
            clothes_washer,
        } => data.extend([
            row(
                "ENERGYSTAR Refrigerators (> 7.75ft3)",
                count(*refrigerator),
                round(REFRIGERATOR_SAVINGS_PER_UNIT, 2),
                round(appliances.refrigerator_kwh, 2),
                "",
            ),
            row(
                "ENERGYSTAR Dishwashers",
                count(*dishwasher),
                round(DISHWASHER_SAVINGS_PER_UNIT, 2),
                round(appliances.dishwasher_kwh, 2),
                "",
            ),
            row(
                "ENERGYSTAR Front Load Clothes Washer",
                count(*clothes_washer),
                round(CLOTHES_WASHER_SAVINGS_PER_UNIT, 2),
                round(appliances.clothes_washer_kwh, 2),
                "",
            ),
        ]),
        ApplianceChoices::Typed {
            refrigerator,
            dishwasher,
            clothes_washer,
            clothes_dryer_fuel,
        } => data.extend([
            row(
                "ENERGYSTAR Refrigerator",
                or_dash(*refrigerator),
                String::new(),
                round(appliances.refrigerator_kwh, 2),
                "kWh",
            ),
            row(
                "ENERGYSTAR Dishwashers",
                count(*dishwasher),
                round(DISHWASHER_SAVINGS_PER_UNIT, 2),
                round(appliances.dishwasher_kwh, 2),
                "kWh",
            ),
            row(
                "ENERGYSTAR Clothes Washer",
                or_dash(*clothes_washer),
                String::new(),
                round(appliances.clothes_washer_kwh, 2),
                "kWh",
            ),
            row(
                "ENERGYSTAR Clothes Washer",
                clothes_dryer_fuel.as_key().to_string(),
                String::new(),
                round(appliances.clothes_washer_therm, 2),
                "Therms",
            ),
        ]),
    }
    data.push(row(
        "Clothes Dryer",
        or_dash(appliances.clothes_dryer_tier),
        round(appliances.clothes_dryer_kwh, 1),
        round(appliances.clothes_dryer_kwh, 2),
        "",
    ));
    data.push(row("", String::new(), String::new(), String::new(), ""));
    data.push(row(
        "Annual Energy Savings",
        String::new(),
        String::new(),
        round(appliances.kwh(), 2),
        "kWh",
    ));
    if matches!(appliances.choices, ApplianceChoices::Typed { .. }) {
        data.push(row(
            "Annual Energy Savings",
            String::new(),
            String::new(),
            round(appliances.therm(), 2),
            "Therms",
        ));
    }

    data.join("\n")
}

pub fn thermostat_report(thermostat: &SmartThermostatSavings) -> String {
    let row = |label: &str, heating: String, cooling: String, total: String, unit: &str| {
        format!("{label:<60} {heating:<10}{cooling:<10}{total:<10}{unit:<6}")
    };
    let savings_label = "Savings resulting from Smart Tstat";

    [
        "\n--- Smart Thermostat Energy Savings Calculations: ----".to_string(),
        format!(
            "{:<60} {}",
            "Smart Tstat Installed?",
            yes_no(thermostat.installed)
        ),
        format!(
            "{:<60} {} ({})",
            "Is the primary heating system a HP?",
            yes_no(thermostat.is_heat_pump),
            or_dash(thermostat.heating_type.as_deref())
        ),
        String::new(),
        row(
            "",
            "Heating".into(),
            "Cooling".into(),
            "Total".into(),
            "",
        ),
        row(
            "Approved Savings Rate",
            format_value(thermostat.rates.heating_pct, 1, ValueFormat::Percent),
            format_value(thermostat.rates.cooling_pct, 1, ValueFormat::Percent),
            String::new(),
            "",
        ),
        row(
            savings_label,
            round(thermostat.heating_kwh, 2),
            round(thermostat.cooling_kwh, 2),
            round(thermostat.kwh(), 2),
            "kWh",
        ),
        row(
            savings_label,
            round(thermostat.heating_therm, 2),
            round(thermostat.cooling_therm, 2),
            round(thermostat.therm(), 2),
            "Therms",
        ),
    ]
    .join("\n")
}

pub fn shower_head_report(showerhead: &ShowerheadSavings) -> String {
    let row = |label: &str, value: String, unit: &str| format!("{label:<60} {value:<10}{unit:<5}");
    let water_heater_type = or_dash(
        showerhead
            .water_heater_type
            .map(|water_heater_type| water_heater_type.as_str()),
    );
    let savings = match showerhead.water_heater_type {
        Some(WaterHeaterType::Gas) => showerhead.therm,
        _ => showerhead.kwh,
    };

    [
        "\n--- Low Flow Showerhead Savings ----".to_string(),
        row(
            "# Low Flow Showerhead 1.5 gpm?",
            showerhead.qty_shower_head_1p5.to_string(),
            "",
        ),
        row(
            "# Low Flow Showerhead 1.75 gpm?",
            showerhead.qty_shower_head_1p75.to_string(),
            "",
        ),
        row("Water Heater Type", water_heater_type, ""),
        String::new(),
        format!("{:<60} {}", "Low Flow Lookup", showerhead.lookup),
        String::new(),
        row(
            "Project Energy Consumption",
            round(showerhead.project_consumption, 1),
            showerhead.savings_unit(),
        ),
        row(
            "Baseline Energy Consumption",
            round(showerhead.baseline_consumption, 1),
            showerhead.baseline_unit,
        ),
        row(
            "Annual Energy Savings",
            round(savings, 1),
            showerhead.savings_unit(),
        ),
    ]
    .join("\n")
}

/// Savings of every measure split by measure life, followed by the consumption totals.
pub fn total_report(savings: &SavingsResult, incentives: &Incentives) -> String {
    let row = |measure: &str, total: String, short: String, medium: String, long: String| {
        format!("{measure:<50} {total:<15}{short:<12}{medium:<12}{long:<12}")
    };
    let separator = || {
        row(
            "-------------",
            "-".repeat(8),
            "-".repeat(8),
            "-".repeat(8),
            "-".repeat(8),
        )
    };

    let measures = Measure::measures_for(savings.program);
    let mut data = vec!["\n--- Savings Summary ----".to_string()];

    for (title, unit_heading, is_kwh) in [
        (" Electric Savings", "Total kWh", true),
        ("\n Gas Savings", "Total Therms", false),
    ] {
        data.push(title.to_string());
        data.push(row(
            "Measure",
            unit_heading.into(),
            "Short".into(),
            "Medium".into(),
            "Long".into(),
        ));
        for measure in &measures {
            let (total, life) = if is_kwh {
                (
                    measure.kwh_savings(incentives.inputs()),
                    incentives.kwh_measure_life(*measure),
                )
            } else {
                (
                    measure.therm_savings(incentives.inputs()),
                    incentives.therm_measure_life(*measure),
                )
            };
            data.push(row(
                measure.label(),
                round(total, 2),
                round(life.short, 2),
                round(life.medium, 2),
                round(life.long, 2),
            ));
        }
        data.push(separator());
        let (total, life) = if is_kwh {
            (savings.total_kwh(), incentives.total_kwh_measure_life())
        } else {
            (savings.total_therm(), incentives.total_therm_measure_life())
        };
        data.push(row(
            "Total",
            round(total, 2),
            round(life.short, 2),
            round(life.medium, 2),
            round(life.long, 2),
        ));
    }

    let consumption_row =
        |label: &str, value: String, unit: &str| format!("{label:<40}{value:<10}{unit:<12}");
    let percent = |value: f64| format_value(value, 2, ValueFormat::Percent);
    let revised = savings.revised_percent_improvement();
    let default = incentives.inputs().default_percent_improvement;

    data.push(String::new());
    data.push(consumption_row(
        "Code Consumption",
        round(savings.code_total_consumption_mmbtu, 2),
        "Mbtu",
    ));
    data.push(consumption_row(
        "Improved Consumption",
        round(savings.improved_total_consumption_mmbtu, 2),
        "Mbtu",
    ));
    data.push(consumption_row(
        "Calculated Savings",
        round(savings.total_mmbtu(), 2),
        "Mbtu",
    ));
    data.push(consumption_row(
        &"-".repeat(40),
        "-".repeat(10),
        &"-".repeat(12),
    ));
    data.push(consumption_row(
        "Alternate percent improvement",
        percent(revised),
        "",
    ));
    // just under the 20% threshold, rounding would hide that it was missed
    if 0.199 < revised && revised < 0.2 {
        data.push(consumption_row(
            "True Alternate percent improvement",
            (revised * 100.).to_string(),
            "%",
        ));
    }
    data.push(consumption_row(
        "Initial percent improvement",
        percent(default),
        "",
    ));
    if 0.199 < default && default < 0.2 {
        data.push(consumption_row(
            "True percent improvement",
            (default * 100.).to_string(),
            "%",
        ));
    }

    data.join("\n")
}

/// Every report of a calculation, keyed as they appear in the result mapping.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Reports {
    pub summary: String,
    pub heating_cooling: String,
    pub hot_water: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lighting: Option<String>,
    pub appliances: String,
    pub thermostat: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shower_head: Option<String>,
    pub incentives: String,
    pub total: String,
    pub simulation_dump: String,
}

impl Reports {
    pub(crate) fn new(
        input: &CalculationInput,
        home_status_id: Option<u64>,
        input_simulation: Option<u64>,
        params: &NormalizedParameters,
        savings: &SavingsResult,
        incentives: &Incentives,
        simulation_dump: String,
    ) -> Self {
        let mut incentives_report = incentives.report();
        let utility_report = incentives.utility_report();
        if !utility_report.is_empty() {
            incentives_report.push('\n');
            incentives_report.push_str(&utility_report.join("\n"));
        }

        Self {
            summary: summary_report(input, home_status_id, input_simulation, params),
            heating_cooling: heating_cooling_report(&savings.heating_cooling),
            hot_water: hot_water_report(&savings.water_heater),
            lighting: savings.lighting.as_ref().map(lighting_report),
            appliances: appliance_report(&savings.appliances),
            thermostat: thermostat_report(&savings.smart_thermostat),
            shower_head: savings.showerhead.as_ref().map(shower_head_report),
            incentives: incentives_report,
            total: total_report(savings, incentives),
            simulation_dump,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{CalculationFlags, Calculator, ProgramVersion};
    use crate::data_models::SimulationCatalog;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use serde_json::{json, Map};

    #[rstest]
    #[case(1336.4, 0, ValueFormat::Plain, "1336")]
    #[case(0.125, 2, ValueFormat::Plain, "0.12")]
    #[case(-0.0001, 2, ValueFormat::Plain, "0.00")]
    #[case(0.28842, 1, ValueFormat::Percent, "28.8%")]
    #[case(0.06, 1, ValueFormat::Percent, "6.0%")]
    #[case(1122.535, 2, ValueFormat::Dollars, "$1122.54")]
    #[case(-7.7, 2, ValueFormat::Dollars, "$-7.70")]
    fn should_format_values(
        #[case] value: f64,
        #[case] decimals: usize,
        #[case] format: ValueFormat,
        #[case] expected: &str,
    ) {
        assert_eq!(format_value(value, decimals, format), expected);
    }

    fn kwargs() -> Map<String, Value> {
        let Value::Object(map) = json!({
            "hvac-combo": "heat pump + hpwh",
            "us_state": "OR",
            "heating_fuel": "electric",
            "heating_system_config": "central",
            "home_size": "small",
            "heating_zone": "hz2",
            "water_heater_tier": "tier3",
            "cfl_installed": 5,
            "led_installed": 35,
            "total_installed_lamps": 40,
            "estar_std_refrigerators_installed": true,
            "estar_dishwasher_installed": true,
            "estar_front_load_clothes_washer_installed": false,
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
            "gas_utility": null,
        }) else {
            unreachable!()
        };
        map
    }

    #[fixture]
    fn calculator() -> Calculator {
        Calculator::new(
            ProgramVersion::V2,
            CalculationInput::from_map(kwargs()).unwrap(),
            None,
            &SimulationCatalog::default(),
            CalculationFlags::empty(),
        )
        .unwrap()
    }

    #[rstest]
    fn should_list_other_inputs_in_priority_order(calculator: Calculator) {
        let summary = summary_report(
            calculator.input(),
            None,
            None,
            calculator.params(),
        );
        let lines = summary.lines().collect::<Vec<_>>();

        assert_eq!(lines[1], "--- Inputs ----");
        assert_eq!(lines[2], format!("{:24}-", "Project"));
        assert_eq!(lines[4], format!("{:24}OR", "State"));
        assert_eq!(lines[9], format!("{:24}0.15", "Def. Percent Improvement"));

        let other = &lines[12..];
        assert_eq!(other[0], format!("{:40}foo", "electric_utility"));
        assert_eq!(other[1], format!("{:40}-", "gas_utility"));
        assert_eq!(other[2], format!("{:40}tier3", "water_heater_tier"));
        assert_eq!(other[3], format!("{:40}True", "estar_std_refrigerators_installed"));
        assert!(other[other.len() - 4].starts_with("hvac-combo"));
        assert!(other[other.len() - 1].starts_with("percent_improvement"));
        assert!(!summary.contains("heating_system_config"));
    }

    #[rstest]
    fn should_report_heating_cooling_savings(calculator: Calculator) {
        let report = heating_cooling_report(&calculator.savings().heating_cooling);

        assert!(report.starts_with("\n--- Heating and Cooling Energy Savings Calculations: ----"));
        assert!(report.contains(&format!(
            "{:<60} {:<10}{:5}",
            "Heating Energy Savings", "2000.0000", "kWh"
        )));
        assert!(report.contains("10.0000   Therms"));
    }

    #[rstest]
    fn should_report_heat_pump_water_heater_rows(calculator: Calculator) {
        let report = hot_water_report(&calculator.savings().water_heater);

        assert!(report.contains("HPWH Tier 3"));
        assert!(report.contains("# Heat Pump Water Heater"));
        assert!(report.contains("Annual Non Interactive Energy Savings"));
    }

    #[rstest]
    fn should_report_thermostat_rates(calculator: Calculator) {
        let report = thermostat_report(&calculator.savings().smart_thermostat);

        assert!(report.contains(&format!("{:<60} Yes", "Smart Tstat Installed?")));
        assert!(report.contains(&format!(
            "{:<60} No (heater)",
            "Is the primary heating system a HP?"
        )));
        assert!(report.contains(&format!(
            "{:<60} {:<10}{:<10}",
            "Approved Savings Rate", "6.0%", "6.0%"
        )));
    }

    #[rstest]
    fn should_report_v2_appliances_per_unit(calculator: Calculator) {
        let report = appliance_report(&calculator.savings().appliances);

        assert!(report.contains(&format!(
            "{:<60} {:<10}{:<10}{:<10}",
            "ENERGYSTAR Refrigerators (> 7.75ft3)", "1", "39.00", "39.00"
        )));
        assert!(report.contains(&format!(
            "{:<60} {:<10}{:<10}{:<10}",
            "ENERGYSTAR Front Load Clothes Washer", "0", "114.36", "0.00"
        )));
    }

    #[rstest]
    fn should_report_measure_lives_per_program(calculator: Calculator) {
        let report = total_report(calculator.savings(), calculator.incentives());

        assert!(report.contains(" Electric Savings"));
        assert!(report.contains("\n Gas Savings"));
        assert!(report.contains(&format!("{:<50} {:<15}", "Lighting", "0.00")));
        assert!(report.contains(&format!("{:<50} {:<15}", "Low Flow Shower Head", "76.46")));
        assert!(report.contains(&format!(
            "{:<40}{:<10}",
            "Initial percent improvement", "15.00%"
        )));
    }

    #[rstest]
    fn should_show_true_percent_improvement_just_under_threshold() {
        let mut kwargs = kwargs();
        kwargs.insert("percent_improvement".into(), json!(0.1995));
        let calculator = Calculator::new(
            ProgramVersion::V2,
            CalculationInput::from_map(kwargs).unwrap(),
            None,
            &SimulationCatalog::default(),
            CalculationFlags::empty(),
        )
        .unwrap();

        let report = total_report(calculator.savings(), calculator.incentives());
        assert!(report.contains("True percent improvement"));
    }

    #[rstest]
    fn should_omit_lighting_and_showerhead_reports_for_v3() {
        let mut kwargs = kwargs();
        kwargs.insert(
            "estar_std_refrigerators_installed".into(),
            json!("refrigerator_bottom_freezer"),
        );
        kwargs.shift_remove("estar_front_load_clothes_washer_installed");
        let calculator = Calculator::new(
            ProgramVersion::V3,
            CalculationInput::from_map(kwargs).unwrap(),
            None,
            &SimulationCatalog::default(),
            CalculationFlags::empty(),
        )
        .unwrap();

        let reports = calculator.reports().unwrap();
        assert_eq!(reports.lighting, None);
        assert_eq!(reports.shower_head, None);
        assert!(!reports.total.contains("Lighting"));
        assert!(reports.incentives.contains("Smart Tstats"));
        assert!(reports.simulation_dump.starts_with("kwargs = {"));
    }
}
