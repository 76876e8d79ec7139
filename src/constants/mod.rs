//! Static lookup tables for the NEEA / BPA standard protocol.
//!
//! The large climate-keyed tables live in the generated `tables_v2` and `tables_v3` modules;
//! everything here is small enough to maintain by hand.

mod tables_v2;
mod tables_v3;

use indexmap::IndexMap;
use lazy_static::lazy_static;
use serde::Serialize;

/// (state, heating system config, home size, heating zone)
pub type ClimateKey = (&'static str, &'static str, &'static str, &'static str);
/// (state, heating fuel, heating system config, home size, water heater type)
pub type ShowerheadKey = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

pub const ELECTRICITY_ADJUSTMENT_FACTOR: f64 = 1.0;
pub const GAS_ADJUSTMENT_FACTOR: f64 = 1.0;

pub const KWH_TO_MMBTU: f64 = 3.412 / 1000.;
pub const THERMS_TO_MMBTU: f64 = 1. / 10.;

pub const ELECTRIC_RESISTANCE: &str = "Electric Resistance";
pub const HPWH_TIER_1: &str = "HPWH Tier 1";
pub const HPWH_TIER_2: &str = "HPWH Tier 2";
pub const HPWH_TIER_3: &str = "HPWH Tier 3";
pub const GAS_CONV_EF_LT_0P67: &str = "Gas Conventional EF < 0.67";
pub const GAS_TANKLESS_EF_GTE_0P82: &str = "Gas Tankless EF ≥ 0.82";
pub const GAS_TANKLESS_EF_GTE_0P90: &str = "Gas Tankless EF ≥ 0.90";
pub const PROPANE_TANK: &str = "Propane Tank";
pub const PROPANE_TANKLESS: &str = "Propane Tankless";

pub const NONE_LABEL: &str = "None";

pub const WEIGHTED_AVERAGE_HOU: f64 = 1.9339232560560600;
pub const WEIGHTED_AVERAGE_INEFFICIENT_WATTAGE: f64 = 30.92792464685660;
pub const WEIGHTED_AVERAGE_CFL_WATTAGE: f64 = 14.66922099937440;
pub const WEIGHTED_AVERAGE_LED_WATTAGE: f64 = 11.45098278344010;

pub const REFRIGERATOR_SAVINGS_PER_UNIT: f64 = 39.0;
pub const DISHWASHER_SAVINGS_PER_UNIT: f64 = 58.672;
pub const CLOTHES_WASHER_SAVINGS_PER_UNIT: f64 = 114.356863592187;

pub const DRYER_TIER_2: &str = "tier2";
pub const DRYER_TIER_3: &str = "tier3";
pub const ESTAR: &str = "estar";
pub const ESTAR_LABEL: &str = "ENERGY STAR®";

pub const CLOTHES_DRYER_TIER_MAP: &[(&str, &str)] = &[
    (DRYER_TIER_2, "Tier 2"),
    (DRYER_TIER_3, "Tier 3"),
    (ESTAR, ESTAR_LABEL),
];

pub const REFRIGERATOR_BOTTOM_FREEZER: &str = "refrigerator_bottom_freezer";
pub const REFRIGERATOR_SIDE_FREEZER: &str = "refrigerator_side_freezer";
pub const REFRIGERATOR_OTHER_FREEZER: &str = "refrigerator_other_freezer";

pub const REFRIGERATOR_CHOICE_MAP: &[(&str, &str)] = &[
    (
        REFRIGERATOR_BOTTOM_FREEZER,
        "ENERGY STAR® with bottom-mounted freezer",
    ),
    (
        REFRIGERATOR_SIDE_FREEZER,
        "ENERGY STAR® with side-mounted freezer",
    ),
    (
        REFRIGERATOR_OTHER_FREEZER,
        "ENERGY STAR® with other freezer type",
    ),
];

pub const REFRIGERATOR_SAVINGS_MAP: &[(&str, f64)] = &[
    (REFRIGERATOR_BOTTOM_FREEZER, 7.0),
    (REFRIGERATOR_SIDE_FREEZER, 45.0),
    (REFRIGERATOR_OTHER_FREEZER, 21.0),
];

pub const CLOTHES_WASHER_TOP: &str = "washer_top_load";
pub const CLOTHES_WASHER_SIDE: &str = "washer_side_load";

pub const CLOTHES_WASHER_CHOICE_MAP: &[(&str, &str)] = &[
    (CLOTHES_WASHER_TOP, "ENERGY STAR® with top load"),
    (CLOTHES_WASHER_SIDE, "ENERGY STAR® with front load"),
];

/// (washer, water heater fuel, dryer fuel) -> (kWh, therms)
pub const CLOTHES_WASHER_SAVINGS_MAP: &[((&str, &str, &str), (f64, f64))] = &[
    (
        (CLOTHES_WASHER_SIDE, "natural gas", "natural gas"),
        (-11.9108759078572, 8.49852989291145),
    ),
    (
        (CLOTHES_WASHER_SIDE, "natural gas", "electric"),
        (83.6743574540097, 4.84320043955111),
    ),
    (
        (CLOTHES_WASHER_SIDE, "electric", "natural gas"),
        (30.6426939541488, 3.65532945336034),
    ),
    (
        (CLOTHES_WASHER_SIDE, "electric", "electric"),
        (126.227927316016, 0.0),
    ),
    (
        (CLOTHES_WASHER_TOP, "natural gas", "natural gas"),
        (9.4623982277666, 1.67172711489918),
    ),
    (
        (CLOTHES_WASHER_TOP, "natural gas", "electric"),
        (-1.89143388090484, 2.1059154874715),
    ),
    (
        (CLOTHES_WASHER_TOP, "electric", "natural gas"),
        (27.9654981795631, -0.434188372572326),
    ),
    (
        (CLOTHES_WASHER_TOP, "electric", "electric"),
        (16.6116660708917, 0.0),
    ),
];

pub const MEDIUM_MEASURE_LIFE_PCT: f64 = 0.10;
pub const COOLING_INTERNAL_GAINS_PCT: f64 = 0.75;

pub const BPA_SHORT_RATE: f64 = 0.10;
pub const BPA_MEDIUM_RATE: f64 = 0.27;
pub const BPA_LONG_RATE: f64 = 0.45;

pub const BASELINE_PCT_LIGHTING_EFFICACY: &[((&str, &str, &str), f64)] = &[
    (("OR", "zonal", "all"), 1.0),
    (("OR", "central", "all"), 1.0),
    (("WA", "zonal", "small"), 0.75),
    (("WA", "zonal", "medium"), 0.75),
    (("WA", "zonal", "large"), 0.75),
    (("WA", "central", "small"), 0.75),
    (("WA", "central", "medium"), 0.75),
    (("WA", "central", "large"), 0.75),
    (("ID", "zonal", "all"), 0.50),
    (("ID", "central", "all"), 0.50),
    (("MT", "zonal", "all"), 0.75),
    (("MT", "central", "all"), 0.75),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmartThermostatRates {
    pub label: &'static str,
    pub heating_pct: f64,
    pub cooling_pct: f64,
}

const fn tstat(label: &'static str, heating_pct: f64, cooling_pct: f64) -> SmartThermostatRates {
    SmartThermostatRates {
        label,
        heating_pct,
        cooling_pct,
    }
}

/// (heating fuel, heating system config, is heat pump)
pub const SMART_TSTAT_SAVINGS: &[((&str, &str, bool), SmartThermostatRates)] = &[
    (("electric", "central", false), tstat("eFAF", 0.06, 0.06)),
    (("electric", "central", true), tstat("ASHP", 0.14, 0.06)),
    (("electric", "zonal", true), tstat("DHP", 0.0, 0.0)),
    (("electric", "zonal", false), tstat("eZonal", 0.0, 0.0)),
    (("gas", "central", false), tstat("GasFAF", 0.06, 0.06)),
    (("gas", "central", true), tstat("GasFAF", 0.06, 0.06)),
    (("gas", "zonal", false), tstat("Other", 0.0, 0.0)),
    (("gas", "zonal", true), tstat("Other", 0.0, 0.0)),
    (("all", "central", false), tstat("GasFAF", 0.06, 0.06)),
    (("all", "central", true), tstat("GasFAF", 0.06, 0.06)),
    (("all", "zonal", false), tstat("Other", 0.0, 0.0)),
    (("all", "zonal", true), tstat("Other", 0.0, 0.0)),
];

/// Used whenever a thermostat combination is not listed.
pub const SMART_TSTAT_NO_SAVINGS: SmartThermostatRates = tstat("Other", 0.0, 0.0);

/// (water heater type, showerhead gpm) -> (kWh, therms) consumption per head
pub const LOWFLOW_CONSUMPTION: &[((&str, &str), (f64, f64))] = &[
    (("electric resistance", "1.75"), (580.331853759892, 0.0)),
    (("electric resistance", "1.5"), (526.849123062258, 0.0)),
    (("hpwh", "1.75"), (290.165926879946, 0.0)),
    (("hpwh", "1.5"), (263.424561531129, 0.0)),
    (("gas", "1.75"), (0.0, 26.4023263899259)),
    (("gas", "1.5"), (0.0, 23.9691176957024)),
];

/// (heat pump water heater tier, heating zone) -> kWh
pub const HEAT_PUMP_WATER_HEATER_KWH: &[((&str, &str), f64)] = &[
    (("tier1", "hz1"), 1609.0),
    (("tier1", "hz2"), 1693.0),
    (("tier1", "hz3"), 1812.0),
    (("tier2", "hz1"), 1220.0),
    (("tier2", "hz2"), 1275.0),
    (("tier2", "hz3"), 1319.0),
    (("tier3", "hz1"), 1119.0),
    (("tier3", "hz2"), 1173.0),
    (("tier3", "hz3"), 1221.0),
];

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct UtilityRequirements {
    pub title: &'static str,
    pub requirements: &'static [&'static str],
}

pub const CLARK_REQUIREMENTS: UtilityRequirements = UtilityRequirements {
    title: "Clark PUD will only pay incentives for homes meeting ANY of the following criteria:",
    requirements: &[
        "Electrically heated homes with a percent improvement of 10% or greater.",
        "Gas heated homes with a percent improvement of 10% or greater and the gas utility is NW Natural",
    ],
};

pub const PUGET_REQUIREMENTS: UtilityRequirements = UtilityRequirements {
    title: "Puget Sound Energy will only pay incentives for homes meeting ANY of the following criteria:",
    requirements: &[
        "Electrically heated homes in which PSE is the electric utility (gas utility – if applicable – may be a utility other than PSE).",
        "Gas heated homes in which Puget Sound Energy is both the electric and gas utility.",
    ],
};

pub const CENTRAL_REQUIREMENTS: UtilityRequirements = UtilityRequirements {
    title: "Central Electric Cooperative will only pay incentives for homes meeting ALL of the following criteria:",
    requirements: &["Electrically heated homes and a percent improvement of 10% or greater."],
};

pub const PACIFIC_REQUIREMENTS: UtilityRequirements = UtilityRequirements {
    title: "Pacific Power will only pay incentives for homes in Washington state meeting ANY of the following criteria:",
    requirements: &[
        "Electrically heated homes with any percent improvement.",
        "Gas heated homes with electric cooling, a percent improvement of 10% or greater, and Cascade Natural Gas is the gas utility. Gas heating system must be gas furnace.",
    ],
};

pub const IDAHO_REQUIREMENTS: UtilityRequirements = UtilityRequirements {
    title: "Idaho Power will only pay incentives for homes meeting ALL of the following criteria:",
    requirements: &[
        "Electrically heated homes with a percent improvement of 10% or greater. Heating system must be heat pump technology.",
    ],
};

pub const BENTON_REA_REQUIREMENTS: UtilityRequirements = UtilityRequirements {
    title: "Benton REA will only pay incentives for homes meeting ALL of the following criteria:",
    requirements: &["Electrically heated homes with a percent improvement of 10% or greater."],
};

pub const INLAND_REQUIREMENTS: UtilityRequirements = UtilityRequirements {
    title: "Inland Power and Light will only pay incentives for homes meeting ALL of the following criteria:",
    requirements: &[
        "Electrically heated homes with an electric water heater and a percent improvement of 10% or greater.",
    ],
};

pub const RICHLAND_REQUIREMENTS: UtilityRequirements = UtilityRequirements {
    title: "City of Richland will only pay incentives for homes meeting ALL of the following criteria:",
    requirements: &["Electrically heated homes with a percent improvement of 10% or greater."],
};

pub const EWEB_REQUIREMENTS: UtilityRequirements = UtilityRequirements {
    title: " Eugene Water & Electric Board:",
    requirements: &[
        "Electrically heated homes with an electric water heater and a percent improvement of 10% or greater.",
        "Must be an Earth Advantage Certified Home. (Select certification level in the Annotations section below.)",
    ],
};

pub const TACOMA_REQUIREMENTS: UtilityRequirements = UtilityRequirements {
    title: "Tacoma Public Utilities will pay incentives for homes meeting ALL of the following criteria:",
    requirements: &[
        "Electrically heated homes with an electric water heater and a percent improvement of 10% or greater.",
    ],
};

pub const PENINSULA_REQUIREMENTS: UtilityRequirements = UtilityRequirements {
    title: "Peninsula Power & Light will pay incentives for homes meeting ALL of the following criteria:",
    requirements: &[
        "Electrically heated homes with a percent improvement of 10% or greater and the Electric Meter number is provided.",
    ],
};

/// The tables that differ between program versions.
#[derive(Debug)]
pub struct ProgramConstants {
    /// (tier key, display label) in display order.
    pub water_heater_tiers: &'static [(&'static str, &'static str)],
    water_heater_savings: IndexMap<ClimateKey, IndexMap<&'static str, f64>>,
    pub clothes_dryer_savings: &'static [(&'static str, f64)],
}

impl ProgramConstants {
    fn new(
        water_heater_tiers: &'static [(&'static str, &'static str)],
        savings_rates: &'static [(ClimateKey, &'static [(&'static str, f64)])],
        clothes_dryer_savings: &'static [(&'static str, f64)],
    ) -> Self {
        Self {
            water_heater_tiers,
            water_heater_savings: savings_rates
                .iter()
                .map(|(key, rates)| (*key, rates.iter().copied().collect()))
                .collect(),
            clothes_dryer_savings,
        }
    }

    /// Baseline water heater savings rate for a tier, 0 when the climate or tier is not listed.
    pub fn water_heater_savings_rate(&self, climate: &ClimateKey, tier: &str) -> f64 {
        self.water_heater_savings
            .get(climate)
            .and_then(|rates| rates.get(tier))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn water_heater_label(&self, tier: &str) -> Option<&'static str> {
        lookup(self.water_heater_tiers, tier)
    }

    pub fn clothes_dryer_savings_for(&self, tier: Option<&str>) -> f64 {
        tier.and_then(|tier| lookup(self.clothes_dryer_savings, tier))
            .unwrap_or(0.0)
    }

    #[cfg(test)]
    pub(crate) fn water_heater_climates(&self) -> impl Iterator<Item = &ClimateKey> {
        self.water_heater_savings.keys()
    }
}

/// Find the value for a key in a small static association list.
pub fn lookup<K: PartialEq, V: Copy>(table: &[(K, V)], key: K) -> Option<V> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, value)| *value)
}

const V2_WATER_HEATER_TIERS: &[(&str, &str)] = &[
    ("electric resistance", ELECTRIC_RESISTANCE),
    ("tier1", HPWH_TIER_1),
    ("tier2", HPWH_TIER_2),
    ("tier3", HPWH_TIER_3),
    ("gas_ef_lt_0p67", GAS_CONV_EF_LT_0P67),
    ("gas_ef_gte_0p67", "Gas Conventional EF ≥ 0.67"),
    ("gas_ef_gte_0p7", "Gas Conventional EF ≥ 0.70"),
    ("gas_tankless_ef_gte_0p82", GAS_TANKLESS_EF_GTE_0P82),
    ("gas_tankless_ef_gte_0p9", GAS_TANKLESS_EF_GTE_0P90),
    ("propane_tank", PROPANE_TANK),
    ("propane_tankless", PROPANE_TANKLESS),
];

const V3_WATER_HEATER_TIERS: &[(&str, &str)] = &[
    ("electric resistance", ELECTRIC_RESISTANCE),
    ("tier1", HPWH_TIER_1),
    ("tier2", HPWH_TIER_2),
    ("tier3", HPWH_TIER_3),
    ("gas_ef_lt_0p67", GAS_CONV_EF_LT_0P67),
    ("gas_ef_gte_0p67", "Gas Conventional EF 0.67-0.76"),
    ("gas_ef_gte_0p7", "Gas Conventional EF ≥ 0.77"),
    ("gas_tankless_ef_gte_0p82", GAS_TANKLESS_EF_GTE_0P82),
    ("gas_tankless_ef_gte_0p9", GAS_TANKLESS_EF_GTE_0P90),
    ("propane_tank", PROPANE_TANK),
    ("propane_tankless", PROPANE_TANKLESS),
];

const V2_CLOTHES_DRYER_SAVINGS: &[(&str, f64)] =
    &[(DRYER_TIER_2, 175.0), (DRYER_TIER_3, 350.0), (ESTAR, 125.0)];

const V3_CLOTHES_DRYER_SAVINGS: &[(&str, f64)] =
    &[(DRYER_TIER_2, 344.0), (DRYER_TIER_3, 485.0), (ESTAR, 68.0)];

lazy_static! {
    pub static ref V2_CONSTANTS: ProgramConstants = ProgramConstants::new(
        V2_WATER_HEATER_TIERS,
        tables_v2::WATER_HEATER_BASELINE_SAVINGS_RATES,
        V2_CLOTHES_DRYER_SAVINGS,
    );
    pub static ref V3_CONSTANTS: ProgramConstants = ProgramConstants::new(
        V3_WATER_HEATER_TIERS,
        tables_v3::WATER_HEATER_BASELINE_SAVINGS_RATES,
        V3_CLOTHES_DRYER_SAVINGS,
    );
    static ref HEAT_PUMP_WATER_HEATER_BASELINE_CONSUMPTION: IndexMap<ClimateKey, f64> =
        tables_v2::HEAT_PUMP_WATER_HEATER_BASELINE_CONSUMPTION_RATES
            .iter()
            .copied()
            .collect();
    static ref LOWFLOW_UEC: IndexMap<ShowerheadKey, f64> =
        tables_v2::LOWFLOW_UEC.iter().copied().collect();
}

/// Baseline hot water consumption (kWh) a heat pump water heater is compared against.
pub fn heat_pump_water_heater_baseline_consumption(climate: &ClimateKey) -> f64 {
    HEAT_PUMP_WATER_HEATER_BASELINE_CONSUMPTION
        .get(climate)
        .copied()
        .unwrap_or(0.0)
}

/// Baseline per-showerhead unit energy consumption.
pub fn lowflow_baseline_consumption(key: &ShowerheadKey) -> f64 {
    LOWFLOW_UEC.get(key).copied().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn should_have_same_climates_in_both_program_versions() {
        assert_eq!(
            V2_CONSTANTS.water_heater_climates().count(),
            V3_CONSTANTS.water_heater_climates().count()
        );
        assert_eq!(V3_CONSTANTS.water_heater_climates().count(), 36);
    }

    #[rstest]
    fn should_have_no_heat_pump_tier_1_or_2_savings_in_v3() {
        for climate in V3_CONSTANTS.water_heater_climates() {
            assert_eq!(V3_CONSTANTS.water_heater_savings_rate(climate, "tier1"), 0.0);
            assert_eq!(V3_CONSTANTS.water_heater_savings_rate(climate, "tier2"), 0.0);
            assert_eq!(
                V3_CONSTANTS.water_heater_savings_rate(climate, "electric resistance"),
                0.0
            );
            assert_eq!(
                V3_CONSTANTS.water_heater_savings_rate(climate, "gas_ef_lt_0p67"),
                0.0
            );
        }
    }

    #[rstest]
    #[case("gas_ef_gte_0p67", 25.2)]
    #[case("gas_ef_gte_0p7", 55.4)]
    #[case("gas_tankless_ef_gte_0p82", 46.1)]
    #[case("gas_tankless_ef_gte_0p9", 60.7)]
    fn should_have_flat_v3_gas_savings(#[case] tier: &str, #[case] expected: f64) {
        for climate in V3_CONSTANTS.water_heater_climates() {
            assert_relative_eq!(
                V3_CONSTANTS.water_heater_savings_rate(climate, tier),
                expected,
                epsilon = 0.05
            );
        }
    }

    #[rstest]
    fn should_default_to_zero_on_missing_climate() {
        let climate = ("WA", "central", "all", "hz1");
        assert_eq!(V2_CONSTANTS.water_heater_savings_rate(&climate, "tier3"), 0.0);
        assert_eq!(heat_pump_water_heater_baseline_consumption(&climate), 0.0);
        assert_eq!(
            lowflow_baseline_consumption(&("WA", "electric", "central", "all", "hpwh")),
            0.0
        );
    }

    #[rstest]
    fn should_default_to_zero_on_missing_tier() {
        let climate = ("OR", "central", "all", "hz2");
        assert_eq!(
            V2_CONSTANTS.water_heater_savings_rate(&climate, "propane_tank"),
            0.0
        );
        assert_relative_eq!(
            V2_CONSTANTS.water_heater_savings_rate(&climate, "tier3"),
            1735.56196696305
        );
    }

    #[rstest]
    fn should_label_tiers_per_program() {
        assert_eq!(
            V2_CONSTANTS.water_heater_label("gas_ef_gte_0p67"),
            Some("Gas Conventional EF ≥ 0.67")
        );
        assert_eq!(
            V3_CONSTANTS.water_heater_label("gas_ef_gte_0p67"),
            Some("Gas Conventional EF 0.67-0.76")
        );
        assert_eq!(V3_CONSTANTS.water_heater_label("foo"), None);
    }

    #[rstest]
    fn should_look_up_dryer_savings_per_program() {
        assert_eq!(V2_CONSTANTS.clothes_dryer_savings_for(Some("tier3")), 350.0);
        assert_eq!(V3_CONSTANTS.clothes_dryer_savings_for(Some("tier3")), 485.0);
        assert_eq!(V3_CONSTANTS.clothes_dryer_savings_for(Some("estar")), 68.0);
        assert_eq!(V3_CONSTANTS.clothes_dryer_savings_for(None), 0.0);
    }
}
