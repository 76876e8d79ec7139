//! Coercion of the loosely-typed calculation input into the legal value sets the savings
//! tables are keyed by.
//!
//! Nothing in here fails fast. Every problem is appended to an [`IssueCollector`] and the
//! normalizer returns `None` (or a neutral default) so the remaining inputs still get checked.

use crate::calculator::ProgramVersion;
use crate::constants::{
    ClimateKey, CLOTHES_DRYER_TIER_MAP, CLOTHES_WASHER_CHOICE_MAP, ESTAR, ESTAR_LABEL, NONE_LABEL,
    REFRIGERATOR_CHOICE_MAP,
};
use crate::data_models::{EnergyProfileSource, FuelType, ProfilePair};
use crate::errors::InputIssues;
use crate::input::{CalculationInput, HomeStatus, LooseValue};
use itertools::Itertools;
use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::debug;

#[derive(Debug, Default)]
pub struct IssueCollector {
    issues: Vec<String>,
}

impl IssueCollector {
    pub fn append(&mut self, issue: impl Into<String>) {
        let issue = issue.into();
        debug!("{issue}");
        self.issues.push(issue);
    }

    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Fail with every collected issue, unless there are none or the caller opted out.
    pub fn check(&self, strict: bool) -> Result<(), InputIssues> {
        if strict && !self.is_empty() {
            return Err(InputIssues::new(self.issues.clone()));
        }
        Ok(())
    }
}

#[derive(
    Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, IntoStaticStr, PartialEq, Serialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum UsState {
    Or,
    Wa,
    Id,
    Mt,
}

impl UsState {
    /// States whose tables are not split by home size.
    pub fn is_single_zone(&self) -> bool {
        matches!(self, UsState::Id | UsState::Mt | UsState::Or)
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

#[derive(
    Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, IntoStaticStr, PartialEq, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HeatingFuel {
    Gas,
    Electric,
}

impl HeatingFuel {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Classify a free-text fuel description as reported by a simulation.
    pub fn from_description(description: &str) -> Option<Self> {
        let description = description.to_lowercase();
        if description.contains("gas") {
            Some(HeatingFuel::Gas)
        } else if description.contains("electric") {
            Some(HeatingFuel::Electric)
        } else {
            None
        }
    }
}

#[derive(
    Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, IntoStaticStr, PartialEq, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HeatingSystemConfig {
    Central,
    Zonal,
    All,
}

impl HeatingSystemConfig {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

#[derive(
    Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, IntoStaticStr, PartialEq, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HomeSize {
    Small,
    Medium,
    Large,
    All,
}

impl HomeSize {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    pub fn for_square_footage(square_footage: f64) -> Self {
        let size = if square_footage < 1500. {
            HomeSize::Small
        } else if square_footage < 5000. {
            HomeSize::Medium
        } else {
            HomeSize::Large
        };
        debug!("Pre-setting home size ({size}) based on square footage ({square_footage}) of home");
        size
    }
}

#[derive(
    Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, IntoStaticStr, PartialEq, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HeatingZone {
    Hz1,
    Hz2,
    Hz3,
}

impl HeatingZone {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

fn squash(input: &str) -> String {
    input.to_lowercase().replace(' ', "")
}

fn legal_values<T: IntoEnumIterator + Display>() -> String {
    T::iter().join(", ")
}

/// Match against an enumerated set ignoring case and spaces.
fn normalize_choice<T: IntoEnumIterator + Display + FromStr>(
    issues: &mut IssueCollector,
    input: &str,
    message: &str,
) -> Option<T> {
    let squashed = squash(input);
    match squashed.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            issues.append(format!(
                "{message} '{squashed}' must be one of {}",
                legal_values::<T>()
            ));
            None
        }
    }
}

pub fn normalize_boolean(input: Option<&LooseValue>) -> bool {
    match input {
        None => false,
        Some(LooseValue::Bool(value)) => *value,
        Some(LooseValue::Integer(value)) => *value != 0,
        Some(LooseValue::Float(value)) => *value != 0.,
        Some(LooseValue::Text(text)) => match text.to_lowercase().as_str() {
            "true" | "yes" | "1" => true,
            "false" | "no" | "0" => false,
            _ => !text.is_empty(),
        },
    }
}

pub fn normalize_integer(issues: &mut IssueCollector, name: &str, input: Option<&LooseValue>) -> i64 {
    match input {
        None => 0,
        Some(LooseValue::Bool(value)) => *value as i64,
        Some(LooseValue::Integer(value)) => *value,
        Some(LooseValue::Float(value)) => value.trunc() as i64,
        Some(LooseValue::Text(text)) => text.trim().parse().unwrap_or_else(|_| {
            issues.append(format!("Invalid whole number provided for {name} '{text}'"));
            0
        }),
    }
}

/// Range check a float. A limit of zero is treated as no limit.
pub fn normalize_float(
    issues: &mut IssueCollector,
    input: f64,
    lower_limit: Option<f64>,
    upper_limit: Option<f64>,
) -> Option<f64> {
    if let Some(lower_limit) = lower_limit.filter(|limit| *limit != 0.) {
        if input < lower_limit {
            issues.append(format!(
                "Input value provided {input} is less than lower limit allowed {lower_limit}"
            ));
            return None;
        }
    }
    if let Some(upper_limit) = upper_limit.filter(|limit| *limit != 0.) {
        if input > upper_limit {
            issues.append(format!(
                "Input value provided {input} is greater than upper limit allowed {upper_limit}"
            ));
            return None;
        }
    }
    Some(input)
}

pub fn normalize_us_state(
    issues: &mut IssueCollector,
    input: Option<&str>,
    home_status: Option<&HomeStatus>,
) -> Option<UsState> {
    let input = match input {
        Some(input) => input,
        None => match home_status.and_then(|status| status.us_state.as_deref()) {
            Some(state) => {
                debug!("Using State from Project - {state}");
                state
            }
            None => {
                issues.append("State was not provided");
                return None;
            }
        },
    };

    match UsState::from_str(input) {
        Ok(state) => Some(state),
        Err(_) => {
            issues.append("State must be either 'OR', 'WA', 'ID', or 'MT'");
            None
        }
    }
}

pub fn normalize_heating_fuel(
    issues: &mut IssueCollector,
    input: Option<&str>,
    simulation_fuel: Option<&str>,
) -> Option<HeatingFuel> {
    let input = match input {
        Some(input) => input.to_string(),
        None => match simulation_fuel.and_then(HeatingFuel::from_description) {
            Some(fuel) => {
                debug!("Using Heating Fuel from Simulation - {fuel}");
                return Some(fuel);
            }
            None => {
                issues.append("Heating Fuel was not provided");
                return None;
            }
        },
    };

    normalize_choice(issues, &input, "Invalid heat type identified")
}

pub fn normalize_heating_system_config(
    issues: &mut IssueCollector,
    input: Option<&str>,
) -> Option<HeatingSystemConfig> {
    let Some(input) = input else {
        issues.append("Heating System Configuration was not provided");
        return None;
    };

    normalize_choice(issues, input, "Invalid heating system config identified")
}

/// Single zone states always use "all"; otherwise a known square footage wins over the
/// explicit input.
pub fn normalize_home_size(
    issues: &mut IssueCollector,
    input: Option<&str>,
    us_state: Option<UsState>,
    square_footage: Option<f64>,
    conditioned_area: Option<f64>,
) -> Option<HomeSize> {
    let size = if us_state.is_some_and(|state| state.is_single_zone()) {
        debug!("Pre-setting home size (all) based on state");
        HomeSize::All
    } else if let Some(area) = square_footage.or(conditioned_area) {
        HomeSize::for_square_footage(area)
    } else {
        let Some(input) = input else {
            issues.append("Home Size was not provided");
            return None;
        };
        normalize_choice(issues, input, "Invalid home size identified")?
    };

    if us_state == Some(UsState::Wa) && size == HomeSize::All {
        issues.append("For Washington you MUST select a home size from small, medium, large");
        return None;
    }

    Some(size)
}

pub fn normalize_heating_zone(
    issues: &mut IssueCollector,
    input: Option<&str>,
    home_status: Option<&HomeStatus>,
) -> Option<HeatingZone> {
    let input = match (input, home_status) {
        (Some(input), _) => input,
        (None, Some(home_status)) => match home_status.heating_zone.as_deref() {
            Some(zone) => {
                debug!("Using Heating Zone from Project - {zone}");
                zone
            }
            None => {
                issues.append("Heating Zone was not found from home status");
                return None;
            }
        },
        (None, None) => {
            issues.append("Heating Zone was not provided");
            return None;
        }
    };

    normalize_choice(issues, input, "Invalid Heating Zone identified")
}

/// Resolve a water heater tier by key or label against the program's tier table.
pub fn normalize_water_heater_tier(
    issues: &mut IssueCollector,
    input: Option<&str>,
    tiers: &'static [(&'static str, &'static str)],
) -> Option<&'static str> {
    let Some(original) = input else {
        issues.append("Missing NEEA Water Heater Tier");
        return None;
    };

    let input = original.trim().to_lowercase();
    let tier = tiers
        .iter()
        .find(|(key, _)| key.to_lowercase() == input)
        .or_else(|| tiers.iter().find(|(_, label)| label.to_lowercase() == input))
        .map(|(key, _)| *key);

    if tier.is_none() {
        issues.append(format!(
            "Invalid Water Heater Tier identified '{original}' must be one of {}",
            tiers.iter().map(|(_, label)| label).join(", ")
        ));
    }
    tier
}

pub fn normalize_clothes_dryer_tier(
    issues: &mut IssueCollector,
    input: Option<&str>,
) -> Option<&'static str> {
    let input = match input {
        None | Some("None") | Some("none") => return None,
        Some(ESTAR_LABEL) => ESTAR.to_string(),
        Some(input) => squash(input),
    };
    if input.is_empty() {
        return None;
    }

    let tier = CLOTHES_DRYER_TIER_MAP
        .iter()
        .find(|(key, _)| *key == input)
        .map(|(key, _)| *key);
    if tier.is_none() {
        issues.append(format!(
            "Invalid clothes dryer tier identified '{input}' must be one of {}",
            CLOTHES_DRYER_TIER_MAP.iter().map(|(key, _)| key).join(", ")
        ));
    }
    tier
}

/// Resolve an appliance choice by key or label. "None" (or nothing) means no qualifying
/// appliance; booleans and numbers are not choices.
fn normalize_labelled_choice(
    issues: &mut IssueCollector,
    input: Option<&LooseValue>,
    choices: &'static [(&'static str, &'static str)],
    name: &str,
) -> Option<&'static str> {
    let input = input?;
    let choice = input.as_str().and_then(|text| {
        let text = text.trim().to_lowercase();
        if text.is_empty() || text == NONE_LABEL.to_lowercase() {
            return Some(None);
        }
        choices
            .iter()
            .find(|(key, label)| key.to_lowercase() == text || label.to_lowercase() == text)
            .map(|(key, _)| Some(*key))
    });

    match choice {
        Some(choice) => choice,
        None => {
            issues.append(format!(
                "Invalid {name} identified '{input}' must be one of {}, {NONE_LABEL}",
                choices.iter().map(|(_, label)| label).join(", ")
            ));
            None
        }
    }
}

pub fn normalize_refrigerator_choice(
    issues: &mut IssueCollector,
    input: Option<&LooseValue>,
) -> Option<&'static str> {
    normalize_labelled_choice(issues, input, REFRIGERATOR_CHOICE_MAP, "refrigerator")
}

pub fn normalize_clothes_washer_choice(
    issues: &mut IssueCollector,
    input: Option<&LooseValue>,
) -> Option<&'static str> {
    normalize_labelled_choice(issues, input, CLOTHES_WASHER_CHOICE_MAP, "clothes washer")
}

/// Dryer fuel as given, else as simulated, else electric.
pub fn normalize_clothes_dryer_fuel(
    issues: &mut IssueCollector,
    input: Option<&str>,
    simulated: Option<FuelType>,
) -> FuelType {
    let Some(input) = input else {
        return simulated.unwrap_or(FuelType::Electric);
    };

    match squash(input).as_str() {
        "electric" => FuelType::Electric,
        "gas" | "naturalgas" => FuelType::NaturalGas,
        _ => {
            issues.append(format!(
                "Invalid clothes dryer fuel identified '{input}' must be one of Electric, Gas"
            ));
            FuelType::Electric
        }
    }
}

pub fn normalize_earth_advantage(input: Option<&str>) -> Option<String> {
    match input {
        None | Some("None") | Some("none") | Some("") => None,
        Some(certification) => Some(certification.to_string()),
    }
}

/// The caller's percent improvement, else the one the profiles imply; never below zero.
pub fn normalize_percent_improvement(
    issues: &mut IssueCollector,
    input: Option<&LooseValue>,
    improved: &dyn EnergyProfileSource,
    code: &dyn EnergyProfileSource,
) -> Option<f64> {
    let percent_improvement = match input {
        Some(input) => match input.as_f64() {
            Some(value) => value,
            None => {
                issues.append(format!("Invalid percent improvement provided '{input}'"));
                return None;
            }
        },
        None => match improved.get_udrh_percent_improvement(code) {
            Ok(value) => value,
            Err(_) => {
                issues.append("Unable to get the reference home from this simulation.");
                return None;
            }
        },
    };

    normalize_float(issues, percent_improvement.max(0.), Some(0.), None)
}

/// Appliance selections as each program version asks for them.
#[derive(Clone, Debug, PartialEq)]
pub enum ApplianceChoices {
    /// ENERGY STAR® refrigerator, dishwasher and front load washer flags.
    Flags {
        refrigerator: bool,
        dishwasher: bool,
        clothes_washer: bool,
    },
    /// Refrigerator and washer types, with the dryer fuel the washer savings depend on.
    Typed {
        refrigerator: Option<&'static str>,
        dishwasher: bool,
        clothes_washer: Option<&'static str>,
        clothes_dryer_fuel: FuelType,
    },
}

/// Every input a savings calculation reads, coerced to its legal value set.
///
/// A field that failed to normalize is `None`; the matching lookups then resolve to their
/// defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedParameters {
    pub program: ProgramVersion,
    pub us_state: Option<UsState>,
    pub heating_fuel: Option<HeatingFuel>,
    pub heating_system_config: Option<HeatingSystemConfig>,
    pub home_size: Option<HomeSize>,
    pub heating_zone: Option<HeatingZone>,
    pub default_percent_improvement: f64,
    pub water_heater_tier: Option<&'static str>,
    pub appliances: ApplianceChoices,
    pub clothes_dryer_tier: Option<&'static str>,
    pub cfl_installed: i64,
    pub led_installed: i64,
    pub total_installed_lamps: i64,
    pub smart_thermostat_installed: bool,
    pub qty_shower_head_1p5: i64,
    pub qty_shower_head_1p75: i64,
    pub electric_utility: Option<String>,
    pub gas_utility: Option<String>,
    pub earth_advantage_certified: Option<String>,
    pub electric_meter_number: Option<String>,
}

impl NormalizedParameters {
    pub fn new(
        program: ProgramVersion,
        input: &CalculationInput,
        home_status: Option<&HomeStatus>,
        profiles: &ProfilePair,
        issues: &mut IssueCollector,
    ) -> Self {
        let improved = &*profiles.improved;
        let code = &*profiles.code;

        let us_state = normalize_us_state(issues, input.us_state.as_deref(), home_status);
        let heating_fuel = normalize_heating_fuel(
            issues,
            input.heating_fuel.as_deref(),
            improved.dominant_heating_fuel(),
        );
        let heating_system_config =
            normalize_heating_system_config(issues, input.heating_system_config.as_deref());
        let home_size = normalize_home_size(
            issues,
            input.home_size.as_deref(),
            us_state,
            improved.square_footage(),
            input.conditioned_area,
        );
        let heating_zone = normalize_heating_zone(issues, input.heating_zone.as_deref(), home_status);
        let default_percent_improvement =
            normalize_percent_improvement(issues, input.percent_improvement.as_ref(), improved, code)
                .unwrap_or_default();

        let water_heater_tier = normalize_water_heater_tier(
            issues,
            input.water_heater_tier.as_deref(),
            program.constants().water_heater_tiers,
        );
        let dishwasher = normalize_boolean(input.estar_dishwasher_installed.as_ref());
        let appliances = match program {
            ProgramVersion::V2 => ApplianceChoices::Flags {
                refrigerator: normalize_boolean(input.refrigerator_choice()),
                dishwasher,
                clothes_washer: normalize_boolean(input.clothes_washer_choice()),
            },
            ProgramVersion::V3 => ApplianceChoices::Typed {
                refrigerator: normalize_refrigerator_choice(issues, input.refrigerator_choice()),
                dishwasher,
                clothes_washer: normalize_clothes_washer_choice(
                    issues,
                    input.clothes_washer_choice(),
                ),
                clothes_dryer_fuel: normalize_clothes_dryer_fuel(
                    issues,
                    input.clothes_dryer_fuel.as_deref(),
                    improved.clothes_dryer_fuel(),
                ),
            },
        };
        let clothes_dryer_tier =
            normalize_clothes_dryer_tier(issues, input.clothes_dryer_tier.as_deref());

        let cfl_installed = normalize_integer(issues, "cfl_installed", input.cfl_installed.as_ref());
        let led_installed = normalize_integer(issues, "led_installed", input.led_installed.as_ref());
        let total_installed_lamps = normalize_integer(
            issues,
            "total_installed_lamps",
            input.total_installed_lamps.as_ref(),
        );
        let qty_shower_head_1p5 =
            normalize_integer(issues, "qty_shower_head_1p5", input.qty_shower_head_1p5.as_ref());
        let qty_shower_head_1p75 = normalize_integer(
            issues,
            "qty_shower_head_1p75",
            input.qty_shower_head_1p75.as_ref(),
        );

        Self {
            program,
            us_state,
            heating_fuel,
            heating_system_config,
            home_size,
            heating_zone,
            default_percent_improvement,
            water_heater_tier,
            appliances,
            clothes_dryer_tier,
            cfl_installed,
            led_installed,
            total_installed_lamps,
            smart_thermostat_installed: normalize_boolean(input.smart_thermostat_installed.as_ref()),
            qty_shower_head_1p5,
            qty_shower_head_1p75,
            electric_utility: input
                .electric_utility
                .clone()
                .or_else(|| home_status.and_then(|status| status.electric_utility.clone())),
            gas_utility: input
                .gas_utility
                .clone()
                .or_else(|| home_status.and_then(|status| status.gas_utility.clone())),
            earth_advantage_certified: normalize_earth_advantage(input.earth_advantage_choice()),
            electric_meter_number: input
                .electric_meter_number
                .as_ref()
                .map(ToString::to_string)
                .filter(|number| !number.is_empty()),
        }
    }

    /// (state, heating system config, home size, heating zone), when all four are known.
    pub fn climate_key(&self) -> Option<ClimateKey> {
        Some((
            self.us_state?.as_str(),
            self.heating_system_config?.as_str(),
            self.home_size?.as_str(),
            self.heating_zone?.as_str(),
        ))
    }
}
