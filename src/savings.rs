//! Per-measure energy savings over a code and an improved profile.
//!
//! Every lookup that misses resolves to zero savings. Lighting and showerhead measures only
//! exist in the V2 program; their savings are `None` under V3.

use crate::calculator::ProgramVersion;
use crate::compare_floats::max_of_2;
use crate::constants::{
    heat_pump_water_heater_baseline_consumption, lookup, lowflow_baseline_consumption,
    SmartThermostatRates, BASELINE_PCT_LIGHTING_EFFICACY, CLOTHES_WASHER_SAVINGS_MAP,
    CLOTHES_WASHER_SAVINGS_PER_UNIT, DISHWASHER_SAVINGS_PER_UNIT, ELECTRICITY_ADJUSTMENT_FACTOR,
    GAS_ADJUSTMENT_FACTOR, HEAT_PUMP_WATER_HEATER_KWH, KWH_TO_MMBTU, LOWFLOW_CONSUMPTION,
    REFRIGERATOR_SAVINGS_MAP, REFRIGERATOR_SAVINGS_PER_UNIT, SMART_TSTAT_NO_SAVINGS,
    SMART_TSTAT_SAVINGS, THERMS_TO_MMBTU, WEIGHTED_AVERAGE_CFL_WATTAGE, WEIGHTED_AVERAGE_HOU,
    WEIGHTED_AVERAGE_INEFFICIENT_WATTAGE, WEIGHTED_AVERAGE_LED_WATTAGE,
};
use crate::data_models::{EnergyProfileSource, FuelType};
use crate::normalize::{ApplianceChoices, NormalizedParameters};
use serde::Serialize;
use strum_macros::{Display, IntoStaticStr};

/// Water heater technology as implied by the selected tier.
#[derive(Clone, Copy, Debug, Display, Eq, IntoStaticStr, PartialEq, Serialize)]
pub enum WaterHeaterType {
    #[strum(serialize = "electric resistance")]
    #[serde(rename = "electric resistance")]
    ElectricResistance,
    #[strum(serialize = "hpwh")]
    #[serde(rename = "hpwh")]
    HeatPump,
    #[strum(serialize = "gas")]
    #[serde(rename = "gas")]
    Gas,
}

impl WaterHeaterType {
    pub fn for_tier(tier: &str) -> Self {
        if tier == "electric resistance" {
            WaterHeaterType::ElectricResistance
        } else if tier.contains("tier") {
            WaterHeaterType::HeatPump
        } else {
            WaterHeaterType::Gas
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    pub fn savings_unit(&self) -> &'static str {
        match self {
            WaterHeaterType::Gas => "Therms",
            _ => "kWh",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeatingCoolingSavings {
    pub code_heating_kwh: f64,
    pub code_heating_therms: f64,
    pub code_cooling_kwh: f64,
    pub improved_heating_kwh: f64,
    pub improved_heating_therms: f64,
    pub improved_cooling_kwh: f64,
    pub heating_kwh: f64,
    pub heating_therm: f64,
    pub cooling_kwh: f64,
    pub cooling_therm: f64,
}

impl HeatingCoolingSavings {
    fn new(code: &dyn EnergyProfileSource, improved: &dyn EnergyProfileSource) -> Self {
        let (code_heating_kwh, improved_heating_kwh) = (code.heating_kwh(), improved.heating_kwh());
        let (code_heating_therms, improved_heating_therms) =
            (code.heating_therms(), improved.heating_therms());
        let (code_cooling_kwh, improved_cooling_kwh) = (code.cooling_kwh(), improved.cooling_kwh());

        Self {
            code_heating_kwh,
            code_heating_therms,
            code_cooling_kwh,
            improved_heating_kwh,
            improved_heating_therms,
            improved_cooling_kwh,
            heating_kwh: (code_heating_kwh - improved_heating_kwh) * ELECTRICITY_ADJUSTMENT_FACTOR,
            heating_therm: (code_heating_therms - improved_heating_therms) * GAS_ADJUSTMENT_FACTOR,
            cooling_kwh: (code_cooling_kwh - improved_cooling_kwh) * ELECTRICITY_ADJUSTMENT_FACTOR,
            cooling_therm: 0.,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SmartThermostatSavings {
    pub installed: bool,
    pub is_heat_pump: bool,
    pub heating_type: Option<String>,
    pub rates: SmartThermostatRates,
    pub heating_kwh: f64,
    pub cooling_kwh: f64,
    pub heating_therm: f64,
    pub cooling_therm: f64,
}

impl SmartThermostatSavings {
    fn new(params: &NormalizedParameters, improved: &dyn EnergyProfileSource) -> Self {
        let is_heat_pump = improved.is_primary_heating_is_heat_pump();
        let rates = match (
            params.smart_thermostat_installed,
            params.heating_fuel,
            params.heating_system_config,
        ) {
            (true, Some(fuel), Some(config)) => lookup(
                SMART_TSTAT_SAVINGS,
                (fuel.as_str(), config.as_str(), is_heat_pump),
            )
            .unwrap_or(SMART_TSTAT_NO_SAVINGS),
            _ => SMART_TSTAT_NO_SAVINGS,
        };

        Self {
            installed: params.smart_thermostat_installed,
            is_heat_pump,
            heating_type: improved.primary_heating_type().map(ToString::to_string),
            rates,
            heating_kwh: improved.heating_kwh() * rates.heating_pct,
            cooling_kwh: improved.cooling_kwh() * rates.cooling_pct,
            heating_therm: improved.heating_therms() * rates.heating_pct,
            cooling_therm: 0.,
        }
    }

    pub fn kwh(&self) -> f64 {
        self.heating_kwh + self.cooling_kwh
    }

    pub fn therm(&self) -> f64 {
        self.heating_therm + self.cooling_therm
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WaterHeaterSavings {
    pub tier: Option<&'static str>,
    pub label: Option<&'static str>,
    pub water_heater_type: Option<WaterHeaterType>,
    pub kwh: f64,
    pub therm: f64,
    pub qty_heat_pump_water_heaters: u32,
    /// Hot water consumption a heat pump water heater is measured against.
    pub baseline_consumption: f64,
    pub heat_pump_kwh: f64,
    pub heat_pump_kwh_savings: f64,
}

impl WaterHeaterSavings {
    fn new(params: &NormalizedParameters, improved: &dyn EnergyProfileSource) -> Self {
        let constants = params.program.constants();
        let climate = params.climate_key();
        let tier = params.water_heater_tier;

        let rate = match (&climate, tier) {
            (Some(climate), Some(tier)) => constants.water_heater_savings_rate(climate, tier),
            _ => 0.,
        };
        let is_gas = tier.is_some_and(|tier| tier.contains("gas"));
        let is_propane = tier.is_some_and(|tier| tier.contains("propane"));

        let baseline_consumption = climate
            .as_ref()
            .map(heat_pump_water_heater_baseline_consumption)
            .unwrap_or(0.);
        let heat_pump_kwh = match (tier, params.heating_zone) {
            (Some(tier), Some(zone)) => {
                lookup(HEAT_PUMP_WATER_HEATER_KWH, (tier, zone.as_str())).unwrap_or(0.)
            }
            _ => 0.,
        };

        Self {
            tier,
            label: tier.and_then(|tier| constants.water_heater_label(tier)),
            water_heater_type: tier.map(WaterHeaterType::for_tier),
            kwh: if is_gas || is_propane { 0. } else { rate },
            therm: if is_gas { rate } else { 0. },
            qty_heat_pump_water_heaters: improved.qty_heat_pump_water_heaters(),
            baseline_consumption,
            heat_pump_kwh,
            heat_pump_kwh_savings: baseline_consumption - heat_pump_kwh,
        }
    }

    /// Fuel of the installed water heater, as simulated or else as implied by the tier.
    pub fn fuel(&self, improved: &dyn EnergyProfileSource) -> FuelType {
        improved
            .primary_water_heating_fuel()
            .unwrap_or(match self.water_heater_type {
                Some(WaterHeaterType::Gas) => FuelType::NaturalGas,
                _ => FuelType::Electric,
            })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShowerheadSavings {
    pub qty_shower_head_1p5: i64,
    pub qty_shower_head_1p75: i64,
    pub water_heater_type: Option<WaterHeaterType>,
    /// The (state, fuel, config, size, water heater type) the baseline was looked up by.
    pub lookup: String,
    pub baseline_consumption: f64,
    pub baseline_unit: &'static str,
    pub project_consumption: f64,
    pub kwh: f64,
    pub therm: f64,
}

impl ShowerheadSavings {
    fn new(params: &NormalizedParameters, water_heater_type: Option<WaterHeaterType>) -> Self {
        let heads = params.qty_shower_head_1p5 + params.qty_shower_head_1p75;

        let key = match (
            params.us_state,
            params.heating_fuel,
            params.heating_system_config,
            params.home_size,
            water_heater_type,
        ) {
            (Some(state), Some(fuel), Some(config), Some(size), Some(water_heater_type)) => Some((
                state.as_str(),
                fuel.as_str(),
                config.as_str(),
                size.as_str(),
                water_heater_type.as_str(),
            )),
            _ => None,
        };
        let per_head = key.as_ref().map(lowflow_baseline_consumption).unwrap_or(0.);
        let baseline_unit = match water_heater_type {
            _ if per_head == 0. => "",
            Some(WaterHeaterType::Gas) => "therms",
            _ => "kWh",
        };

        let project_consumption = match water_heater_type {
            None => 0.,
            Some(water_heater_type) => {
                let per_head = |gpm: &'static str| {
                    lookup(LOWFLOW_CONSUMPTION, (water_heater_type.as_str(), gpm))
                        .map(|(kwh, therms)| match water_heater_type {
                            WaterHeaterType::Gas => therms,
                            _ => kwh,
                        })
                        .unwrap_or(0.)
                };
                per_head("1.5") * params.qty_shower_head_1p5 as f64
                    + per_head("1.75") * params.qty_shower_head_1p75 as f64
            }
        };

        let baseline_consumption = per_head * heads as f64;
        let savings = baseline_consumption - project_consumption;
        let is_gas = water_heater_type == Some(WaterHeaterType::Gas);

        Self {
            qty_shower_head_1p5: params.qty_shower_head_1p5,
            qty_shower_head_1p75: params.qty_shower_head_1p75,
            water_heater_type,
            lookup: [
                params.us_state.map(|state| state.as_str()),
                params.heating_fuel.map(|fuel| fuel.as_str()),
                params.heating_system_config.map(|config| config.as_str()),
                params.home_size.map(|size| size.as_str()),
                water_heater_type.map(|water_heater_type| water_heater_type.as_str()),
            ]
            .iter()
            .map(|part| part.unwrap_or("None"))
            .collect::<Vec<_>>()
            .join(", "),
            baseline_consumption,
            baseline_unit,
            project_consumption,
            kwh: if is_gas { 0. } else { savings },
            therm: if is_gas { savings } else { 0. },
        }
    }

    pub fn savings_unit(&self) -> &'static str {
        self.water_heater_type
            .map(|water_heater_type| water_heater_type.savings_unit())
            .unwrap_or("kWh")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightingSavings {
    pub cfl_installed: i64,
    pub led_installed: i64,
    pub total_installed_lamps: i64,
    pub baseline_efficacy: f64,
    pub lamps_over_baseline: f64,
    pub cfl_over_baseline: f64,
    pub led_over_baseline: f64,
    pub kwh: f64,
}

impl LightingSavings {
    fn new(params: &NormalizedParameters) -> Self {
        let baseline_efficacy = match (
            params.us_state,
            params.heating_system_config,
            params.home_size,
        ) {
            (Some(state), Some(config), Some(size)) => lookup(
                BASELINE_PCT_LIGHTING_EFFICACY,
                (state.as_str(), config.as_str(), size.as_str()),
            )
            .unwrap_or(0.),
            _ => 0.,
        };

        let cfl = params.cfl_installed as f64;
        let led = params.led_installed as f64;
        let lamps_over_baseline = max_of_2(
            0.,
            cfl + led - params.total_installed_lamps as f64 * baseline_efficacy,
        );
        let cfl_over_baseline = if cfl + led == 0. {
            0.
        } else {
            max_of_2(0., lamps_over_baseline * (cfl / (cfl + led)))
        };
        let led_over_baseline = max_of_2(0., lamps_over_baseline - cfl_over_baseline);

        let watts = (WEIGHTED_AVERAGE_INEFFICIENT_WATTAGE - WEIGHTED_AVERAGE_CFL_WATTAGE)
            * cfl_over_baseline
            + (WEIGHTED_AVERAGE_INEFFICIENT_WATTAGE - WEIGHTED_AVERAGE_LED_WATTAGE)
                * led_over_baseline;

        Self {
            cfl_installed: params.cfl_installed,
            led_installed: params.led_installed,
            total_installed_lamps: params.total_installed_lamps,
            baseline_efficacy,
            lamps_over_baseline,
            cfl_over_baseline,
            led_over_baseline,
            kwh: watts * WEIGHTED_AVERAGE_HOU * 365. / 1000.,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApplianceSavings {
    pub choices: ApplianceChoices,
    pub clothes_dryer_tier: Option<&'static str>,
    /// Water heater fuel the washer savings were keyed by.
    pub water_heater_fuel: FuelType,
    pub refrigerator_kwh: f64,
    pub dishwasher_kwh: f64,
    pub clothes_washer_kwh: f64,
    pub clothes_washer_therm: f64,
    pub clothes_dryer_kwh: f64,
}

impl ApplianceSavings {
    fn new(params: &NormalizedParameters, water_heater_fuel: FuelType) -> Self {
        let per_unit = |installed: bool, savings: f64| if installed { savings } else { 0. };

        let (refrigerator_kwh, dishwasher_kwh, clothes_washer_kwh, clothes_washer_therm) =
            match &params.appliances {
                ApplianceChoices::Flags {
                    refrigerator,
                    dishwasher,
                    clothes_washer,
                } => (
                    per_unit(*refrigerator, REFRIGERATOR_SAVINGS_PER_UNIT),
                    per_unit(*dishwasher, DISHWASHER_SAVINGS_PER_UNIT),
                    per_unit(*clothes_washer, CLOTHES_WASHER_SAVINGS_PER_UNIT),
                    0.,
                ),
                ApplianceChoices::Typed {
                    refrigerator,
                    dishwasher,
                    clothes_washer,
                    clothes_dryer_fuel,
                } => {
                    let (washer_kwh, washer_therm) = clothes_washer
                        .and_then(|washer| {
                            lookup(
                                CLOTHES_WASHER_SAVINGS_MAP,
                                (washer, water_heater_fuel.as_key(), clothes_dryer_fuel.as_key()),
                            )
                        })
                        .unwrap_or((0., 0.));
                    (
                        refrigerator
                            .and_then(|choice| lookup(REFRIGERATOR_SAVINGS_MAP, choice))
                            .unwrap_or(0.),
                        per_unit(*dishwasher, DISHWASHER_SAVINGS_PER_UNIT),
                        washer_kwh,
                        washer_therm,
                    )
                }
            };

        Self {
            choices: params.appliances.clone(),
            clothes_dryer_tier: params.clothes_dryer_tier,
            water_heater_fuel,
            refrigerator_kwh,
            dishwasher_kwh,
            clothes_washer_kwh,
            clothes_washer_therm,
            clothes_dryer_kwh: params
                .program
                .constants()
                .clothes_dryer_savings_for(params.clothes_dryer_tier),
        }
    }

    pub fn kwh(&self) -> f64 {
        self.refrigerator_kwh + self.dishwasher_kwh + self.clothes_washer_kwh + self.clothes_dryer_kwh
    }

    pub fn therm(&self) -> f64 {
        self.clothes_washer_therm
    }
}

/// Savings of every measure plus the totals the incentives are computed from.
#[derive(Clone, Debug, PartialEq)]
pub struct SavingsResult {
    pub program: ProgramVersion,
    pub heating_cooling: HeatingCoolingSavings,
    pub smart_thermostat: SmartThermostatSavings,
    pub water_heater: WaterHeaterSavings,
    pub showerhead: Option<ShowerheadSavings>,
    pub lighting: Option<LightingSavings>,
    pub appliances: ApplianceSavings,
    pub code_total_consumption_kwh: f64,
    pub code_total_consumption_mmbtu: f64,
    pub improved_total_consumption_mmbtu: f64,
}

impl SavingsResult {
    pub fn calculate(
        params: &NormalizedParameters,
        code: &dyn EnergyProfileSource,
        improved: &dyn EnergyProfileSource,
    ) -> Self {
        let water_heater = WaterHeaterSavings::new(params, improved);
        let water_heater_fuel = water_heater.fuel(improved);

        let (showerhead, lighting) = match params.program {
            ProgramVersion::V2 => (
                Some(ShowerheadSavings::new(params, water_heater.water_heater_type)),
                Some(LightingSavings::new(params)),
            ),
            ProgramVersion::V3 => (None, None),
        };

        Self {
            program: params.program,
            heating_cooling: HeatingCoolingSavings::new(code, improved),
            smart_thermostat: SmartThermostatSavings::new(params, improved),
            water_heater,
            showerhead,
            lighting,
            appliances: ApplianceSavings::new(params, water_heater_fuel),
            code_total_consumption_kwh: code.total_consumption_kwh(),
            code_total_consumption_mmbtu: code.total_consumption_mmbtu(),
            improved_total_consumption_mmbtu: improved.total_consumption_mmbtu(),
        }
    }

    pub fn showerhead_kwh(&self) -> f64 {
        self.showerhead.as_ref().map_or(0., |showerhead| showerhead.kwh)
    }

    pub fn showerhead_therm(&self) -> f64 {
        self.showerhead.as_ref().map_or(0., |showerhead| showerhead.therm)
    }

    pub fn lighting_kwh(&self) -> f64 {
        self.lighting.as_ref().map_or(0., |lighting| lighting.kwh)
    }

    pub fn lighting_therm(&self) -> f64 {
        0.
    }

    pub fn total_kwh(&self) -> f64 {
        self.heating_cooling.heating_kwh
            + self.heating_cooling.cooling_kwh
            + self.smart_thermostat.kwh()
            + self.water_heater.kwh
            + self.showerhead_kwh()
            + self.lighting_kwh()
            + self.appliances.kwh()
    }

    pub fn total_therm(&self) -> f64 {
        self.heating_cooling.heating_therm
            + self.heating_cooling.cooling_therm
            + self.smart_thermostat.therm()
            + self.water_heater.therm
            + self.showerhead_therm()
            + self.lighting_therm()
            + self.appliances.therm()
    }

    pub fn total_mmbtu(&self) -> f64 {
        self.total_therm() * THERMS_TO_MMBTU + self.total_kwh() * KWH_TO_MMBTU
    }

    pub fn improved_total_consumption_mmbtu_with_savings(&self) -> f64 {
        max_of_2(0., self.code_total_consumption_mmbtu - self.total_mmbtu())
    }

    pub fn revised_percent_improvement(&self) -> f64 {
        if self.code_total_consumption_mmbtu == 0. {
            return 0.;
        }
        max_of_2(0., self.total_mmbtu() / self.code_total_consumption_mmbtu)
    }
}
