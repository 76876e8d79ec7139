use super::{IncentiveInputs, Incentives};
use crate::constants::{
    UtilityRequirements, BENTON_REA_REQUIREMENTS, CENTRAL_REQUIREMENTS, CLARK_REQUIREMENTS,
    EWEB_REQUIREMENTS, IDAHO_REQUIREMENTS, INLAND_REQUIREMENTS, PACIFIC_REQUIREMENTS,
    PENINSULA_REQUIREMENTS, PUGET_REQUIREMENTS, RICHLAND_REQUIREMENTS, TACOMA_REQUIREMENTS,
};
use crate::compare_floats::max_of_2;
use crate::normalize::{HeatingFuel, UsState};
use crate::savings::WaterHeaterType;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use tracing::debug;

/// Gas utility whose incentives can compete with the electric utility's.
const PUGET_SOUND_ENERGY: &str = "puget-sound-energy";
const NW_NATURAL_GAS: &str = "nw-natural-gas";
const CASCADE_GAS: &str = "cascade-gas";

const CLARK_BONUS_PCT_IMPROVEMENT: f64 = 0.30;
const CLARK_BONUS: f64 = 500.;
const PUGET_THERM_RATE: f64 = 5.;

// The Pacific Power, Idaho Power, Tacoma and EWEB payments below are program assumptions.
// None of them come from the BPA protocol tables.

const TACOMA_KWH_RATE: f64 = 0.7;
const PACIFIC_KWH_RATE: f64 = 0.5;
/// (minimum percent improvement, payment) for electric homes, highest tier first.
const PACIFIC_ELECTRIC_TIERS: [(f64, f64); 2] = [(0.2, 3125.), (0.1, 1875.)];
/// Paid when the home does not qualify on electric heating.
const PACIFIC_GAS_PAYMENT: f64 = 625.;
/// (minimum percent improvement, payment), highest tier first.
const IDAHO_TIERS: [(f64, f64); 2] = [(0.2, 2000.), (0.15, 1500.)];
const IDAHO_BASE_PAYMENT: f64 = 1200.;
const EWEB_HEAT_PUMP_PAYMENT: f64 = 1800.;
const EWEB_HEAT_PUMP_WATER_HEATER_PAYMENT: f64 = 800.;

/// The payment of the highest tier whose threshold is met.
fn tiered_payment(tiers: &[(f64, f64)], percent_improvement: f64) -> Option<f64> {
    tiers
        .iter()
        .find(|(threshold, _)| percent_improvement >= *threshold)
        .map(|(_, payment)| *payment)
}

/// The incentive policies on offer. `Bpa` applies when the electric utility runs no program of
/// its own.
#[derive(Clone, Copy, Debug, EnumIter, Eq, Hash, PartialEq)]
pub enum Utility {
    Bpa,
    ClarkPud,
    PugetSoundEnergy,
    CentralElectric,
    PacificPower,
    IdahoPower,
    BentonRea,
    CityOfRichland,
    InlandPower,
    EugeneWaterElectricBoard,
    TacomaPublicUtilities,
    PeninsulaPowerLight,
}

impl Utility {
    /// The company slug this policy is registered under.
    pub fn slug(&self) -> Option<&'static str> {
        Some(match self {
            Utility::Bpa => return None,
            Utility::ClarkPud => "clark-pud",
            Utility::PugetSoundEnergy => PUGET_SOUND_ENERGY,
            Utility::CentralElectric => "central-electric",
            Utility::PacificPower => "pacific-power",
            Utility::IdahoPower => "idaho-power",
            Utility::BentonRea => "benton-rea",
            Utility::CityOfRichland => "utility-city-of-richland",
            Utility::InlandPower => "inland-power",
            Utility::EugeneWaterElectricBoard => "utility-eugene-water-electric-board",
            Utility::TacomaPublicUtilities => "utility-tacoma-public-utilities",
            Utility::PeninsulaPowerLight => "utility-peninsula-power-light",
        })
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Utility::iter().find(|utility| utility.slug() == Some(slug))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Utility::Bpa => "BPA",
            Utility::ClarkPud => "Clark PUD",
            Utility::PugetSoundEnergy => "Puget Sound Energy",
            Utility::CentralElectric => "Central Electric Cooperative",
            Utility::PacificPower => "Pacific Power",
            Utility::IdahoPower => "Idaho Power",
            Utility::BentonRea => "Benton REA",
            Utility::CityOfRichland => "City of Richland",
            Utility::InlandPower => "Inland Power and Light",
            Utility::EugeneWaterElectricBoard => "Eugene Water & Electric Board",
            Utility::TacomaPublicUtilities => "Tacoma Public Utilities",
            Utility::PeninsulaPowerLight => "Peninsula Power & Light",
        }
    }

    pub fn requirements(&self) -> Option<UtilityRequirements> {
        match self {
            Utility::Bpa => None,
            Utility::ClarkPud => Some(CLARK_REQUIREMENTS),
            Utility::PugetSoundEnergy => Some(PUGET_REQUIREMENTS),
            Utility::CentralElectric => Some(CENTRAL_REQUIREMENTS),
            Utility::PacificPower => Some(PACIFIC_REQUIREMENTS),
            Utility::IdahoPower => Some(IDAHO_REQUIREMENTS),
            Utility::BentonRea => Some(BENTON_REA_REQUIREMENTS),
            Utility::CityOfRichland => Some(RICHLAND_REQUIREMENTS),
            Utility::InlandPower => Some(INLAND_REQUIREMENTS),
            Utility::EugeneWaterElectricBoard => Some(EWEB_REQUIREMENTS),
            Utility::TacomaPublicUtilities => Some(TACOMA_REQUIREMENTS),
            Utility::PeninsulaPowerLight => Some(PENINSULA_REQUIREMENTS),
        }
    }

    pub fn required_pct_improvement(&self) -> f64 {
        match self {
            Utility::PugetSoundEnergy => 0.,
            _ => 0.1,
        }
    }
}

impl Incentives {
    fn is_electrically_heated(&self) -> bool {
        self.inputs.heating_fuel == Some(HeatingFuel::Electric)
    }

    fn is_gas_heated(&self) -> bool {
        self.inputs.heating_fuel == Some(HeatingFuel::Gas)
    }

    fn has_electric_water_heater(&self) -> bool {
        self.inputs.water_heater_type != Some(WaterHeaterType::Gas)
    }

    fn meets_required_pct_improvement(&self) -> bool {
        self.percent_improvement() >= self.required_pct_improvement()
    }

    fn is_electric_utility(&self, slug: &str) -> bool {
        self.inputs.electric_utility.as_deref() == Some(slug)
    }

    fn is_gas_utility(&self, slug: &str) -> bool {
        self.inputs.gas_utility.as_deref() == Some(slug)
    }

    /// Electric homes (any improvement) and gas homes with electric cooling on Cascade gas,
    /// both in Washington only.
    fn pacific_power_eligibility(&self) -> (bool, bool) {
        let in_washington = self.inputs.us_state == Some(UsState::Wa);
        let electric = in_washington && self.is_electrically_heated() && self.has_electric_water_heater();
        let gas = in_washington
            && self.is_gas_heated()
            && self
                .inputs
                .cooling_fuel
                .as_deref()
                .is_some_and(|fuel| fuel.to_lowercase().contains("electric"))
            && self.meets_required_pct_improvement()
            && self.is_gas_utility(CASCADE_GAS);
        (electric, gas)
    }

    pub fn required_pct_improvement(&self) -> f64 {
        self.utility.required_pct_improvement()
    }

    /// Whether the utility pays anything. `None` when no utility program applies.
    pub fn has_incentive(&self) -> Option<bool> {
        let meets_improvement = self.meets_required_pct_improvement();
        let eligible = match self.utility {
            Utility::Bpa => return None,
            Utility::ClarkPud => {
                meets_improvement
                    && (self.is_electrically_heated()
                        || (self.is_gas_heated() && self.is_gas_utility(NW_NATURAL_GAS)))
            }
            Utility::PugetSoundEnergy => {
                self.is_electric_utility(PUGET_SOUND_ENERGY)
                    && (self.is_electrically_heated()
                        || (self.is_gas_heated() && self.is_gas_utility(PUGET_SOUND_ENERGY)))
            }
            Utility::PacificPower => {
                let (electric, gas) = self.pacific_power_eligibility();
                electric || gas
            }
            Utility::IdahoPower => {
                self.is_electrically_heated() && self.has_heat_pump() && meets_improvement
            }
            Utility::CentralElectric | Utility::BentonRea | Utility::CityOfRichland => {
                self.is_electrically_heated() && meets_improvement
            }
            Utility::InlandPower | Utility::TacomaPublicUtilities => {
                self.is_electrically_heated() && self.has_electric_water_heater() && meets_improvement
            }
            Utility::EugeneWaterElectricBoard => {
                self.is_electrically_heated()
                    && self.has_electric_water_heater()
                    && meets_improvement
                    && self.inputs.earth_advantage_certified.is_some()
            }
            Utility::PeninsulaPowerLight => {
                self.is_electrically_heated()
                    && meets_improvement
                    && self.inputs.electric_meter_number.is_some()
            }
        };
        Some(eligible)
    }

    /// Whether the BPA measure incentives are paid.
    pub fn has_bpa_incentive(&self) -> bool {
        match self.utility {
            Utility::PugetSoundEnergy => {
                self.has_incentive() == Some(true) && self.meets_required_pct_improvement()
            }
            _ => self.meets_required_pct_improvement(),
        }
    }

    /// What the utility pays the builder.
    pub fn builder_incentive(&self) -> f64 {
        if self.utility == Utility::Bpa || self.has_incentive() != Some(true) {
            return 0.;
        }
        let pct = self.percent_improvement();

        match self.utility {
            Utility::Bpa => 0.,
            Utility::ClarkPud if pct >= CLARK_BONUS_PCT_IMPROVEMENT => {
                self.total_incentive() + CLARK_BONUS
            }
            Utility::PugetSoundEnergy if self.is_gas_heated() => {
                PUGET_THERM_RATE * self.inputs.total_therm_savings
            }
            // everything but the HVAC and water heater measures
            Utility::PugetSoundEnergy => {
                self.lighting_kwh_incentive()
                    + self.appliance_kwh_incentive()
                    + self.windows_shell_kwh_incentive()
                    + self.smart_thermostat_kwh_incentive()
                    + self.showerhead_kwh_incentive()
            }
            Utility::PacificPower => match self.pacific_power_eligibility() {
                (true, _) => tiered_payment(&PACIFIC_ELECTRIC_TIERS, pct).unwrap_or_else(|| {
                    max_of_2(0., PACIFIC_KWH_RATE * self.inputs.total_kwh_savings)
                }),
                _ => PACIFIC_GAS_PAYMENT,
            },
            Utility::IdahoPower => tiered_payment(&IDAHO_TIERS, pct).unwrap_or(IDAHO_BASE_PAYMENT),
            Utility::TacomaPublicUtilities => TACOMA_KWH_RATE * self.inputs.total_kwh_savings,
            Utility::EugeneWaterElectricBoard
                if self.inputs.water_heater_type == Some(WaterHeaterType::HeatPump) =>
            {
                if self.has_heat_pump() {
                    EWEB_HEAT_PUMP_PAYMENT
                } else {
                    EWEB_HEAT_PUMP_WATER_HEATER_PAYMENT
                }
            }
            _ => self.total_incentive(),
        }
    }

    pub fn incentive_paying_organization(&self) -> Option<String> {
        match self.utility {
            Utility::Bpa => None,
            Utility::PugetSoundEnergy => Some(PUGET_SOUND_ENERGY.to_string()),
            _ => self.inputs.electric_utility.clone(),
        }
    }

    /// Requirement lines of the utility program, closing with whether the home meets them.
    pub fn utility_report(&self) -> Vec<String> {
        let Some(requirements) = self.utility.requirements() else {
            return vec![];
        };

        let mut data = vec![
            String::new(),
            format!("--- {} Incentives ----", self.utility.name()),
            requirements.title.trim().to_string(),
        ];
        data.extend(
            requirements
                .requirements
                .iter()
                .map(|requirement| format!("  - {requirement}")),
        );
        data.push(format!(
            "{:<56} {}",
            "Meets utility requirements",
            if self.has_incentive() == Some(true) {
                "Yes"
            } else {
                "No"
            }
        ));
        data
    }

    /// The requirements to show when the utility program does not pay.
    pub fn utility_requirements(&self) -> Option<UtilityRequirements> {
        match self.has_incentive() {
            Some(false) => self.utility.requirements(),
            _ => None,
        }
    }
}

/// Pick the one policy a home is paid under.
///
/// The electric utility's program (else plain BPA) competes with Puget Sound Energy's gas
/// program when Puget is the gas utility.
pub fn select_incentives(inputs: IncentiveInputs) -> Incentives {
    let electric_utility = inputs
        .electric_utility
        .as_deref()
        .and_then(Utility::from_slug)
        .unwrap_or(Utility::Bpa);
    let has_gas_program = inputs.gas_utility.as_deref() == Some(PUGET_SOUND_ENERGY);

    let electric = Incentives::new(electric_utility, inputs.clone());
    let gas = has_gas_program.then(|| Incentives::new(Utility::PugetSoundEnergy, inputs));

    let selected = match gas {
        None => electric,
        Some(gas) => arbitrate(electric, gas),
    };
    debug!(
        "Selected {} incentives for electric utility {:?}",
        selected.utility.name(),
        selected.inputs.electric_utility
    );
    selected
}

fn arbitrate(electric: Incentives, gas: Incentives) -> Incentives {
    let inputs = &gas.inputs;
    let shares_gas_utility = inputs.gas_utility.as_deref() == gas.utility.slug();

    if shares_gas_utility {
        if inputs.electric_utility.as_deref() == gas.utility.slug() {
            return electric;
        }
        let has_gas_water_heater = inputs
            .water_heater_tier
            .is_some_and(|tier| tier.contains("gas"));
        if has_gas_water_heater && (gas.is_gas_heated() || electric.utility == Utility::Bpa) {
            return gas;
        }
        return electric;
    }

    match (electric.has_incentive(), gas.has_incentive()) {
        (Some(true), Some(true)) if gas.builder_incentive() > electric.builder_incentive() => gas,
        (Some(true), Some(true)) => electric,
        (_, Some(true)) => gas,
        _ => electric,
    }
}
