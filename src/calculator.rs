//! One Standard Protocol calculation from input bag to result mapping.

use crate::constants::{ProgramConstants, UtilityRequirements, V2_CONSTANTS, V3_CONSTANTS};
use crate::data_models::{select_profiles, EnergyProfileSource, ProfilePair, SimulationStore};
use crate::errors::{CalculatorError, StructuralError};
use crate::incentives::{select_incentives, IncentiveInputs, Incentives};
use crate::input::{CalculationInput, HomeStatus};
use crate::normalize::{normalize_boolean, ApplianceChoices, IssueCollector, NormalizedParameters};
use crate::report::Reports;
use crate::result::{ResultCache, ResultData};
use crate::savings::SavingsResult;
use anyhow::anyhow;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{json, Map, Value};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::{debug, info, instrument, warn};

/// The Standard Protocol program a home is certified under.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    Eq,
    IntoStaticStr,
    PartialEq,
    Serialize,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum ProgramVersion {
    #[default]
    #[serde(rename = "neea-bpa")]
    #[strum(serialize = "neea-bpa")]
    V2,
    /// Drops the lighting and showerhead measures and keys washer savings by dryer fuel.
    #[serde(rename = "neea-bpa-v3")]
    #[strum(serialize = "neea-bpa-v3")]
    V3,
}

impl ProgramVersion {
    pub fn constants(&self) -> &'static ProgramConstants {
        match self {
            ProgramVersion::V2 => &*V2_CONSTANTS,
            ProgramVersion::V3 => &*V3_CONSTANTS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct CalculationFlags: u8 {
        const INCLUDE_REPORTS = 0b001;
        /// Ignore any stored result of a completed certification.
        const RECALCULATE = 0b010;
        /// Carry on past validation issues instead of failing with them.
        const PERMISSIVE = 0b100;
    }
}

const BUILDER_INCENTIVE_MANAGED_ELSEWHERE: &str =
    "Builder incentive is dependent upon partner utility and managed outside of Axis";

/// Inputs that only exist in the V2 program.
const V2_ONLY_INPUTS: [&str; 6] = [
    "cfl_installed",
    "led_installed",
    "total_installed_lamps",
    "qty_shower_head_1p5",
    "qty_shower_head_1p75",
    "estar_front_load_clothes_washer_installed",
];

#[derive(Debug)]
pub struct Calculator {
    input: CalculationInput,
    home_status: Option<HomeStatus>,
    profiles: ProfilePair,
    issues: IssueCollector,
    params: NormalizedParameters,
    savings: SavingsResult,
    incentives: Incentives,
}

impl Calculator {
    /// Normalize the input, pick the profiles and work out savings and incentives.
    ///
    /// Validation issues fail the calculation unless the input sets `raise_issues` to false
    /// or the flags include [`CalculationFlags::PERMISSIVE`].
    #[instrument(skip_all, fields(program = %program))]
    pub fn new(
        program: ProgramVersion,
        input: CalculationInput,
        home_status: Option<HomeStatus>,
        store: &dyn SimulationStore,
        flags: CalculationFlags,
    ) -> Result<Self, CalculatorError> {
        if let Some(id) = input.home_status_id {
            if home_status.as_ref().map(|home_status| home_status.id) != Some(id) {
                return Err(StructuralError::new(anyhow!("Home status {id} could not be found")).into());
            }
        }

        let mut issues = IssueCollector::default();
        let profiles = select_profiles(&input, home_status.as_ref(), store, &mut issues)?;
        debug!(
            "Using {} for code and improved data",
            profiles.improved.data_source()
        );

        let params =
            NormalizedParameters::new(program, &input, home_status.as_ref(), &profiles, &mut issues);

        let strict = !flags.contains(CalculationFlags::PERMISSIVE)
            && input
                .raise_issues
                .as_ref()
                .map_or(true, |raise_issues| normalize_boolean(Some(raise_issues)));
        if !strict {
            for issue in issues.issues() {
                warn!("Ignoring input issue: {issue}");
            }
        }
        issues.check(strict)?;

        let savings = SavingsResult::calculate(&params, &*profiles.code, &*profiles.improved);
        let incentives = select_incentives(IncentiveInputs::new(
            &params,
            &savings,
            &*profiles.improved,
        ));
        info!(
            "Calculated {:.2} kWh and {:.2} therms of savings",
            savings.total_kwh(),
            savings.total_therm()
        );

        Ok(Self {
            input,
            home_status,
            profiles,
            issues,
            params,
            savings,
            incentives,
        })
    }

    pub fn program(&self) -> ProgramVersion {
        self.params.program
    }

    pub fn input(&self) -> &CalculationInput {
        &self.input
    }

    pub fn home_status(&self) -> Option<&HomeStatus> {
        self.home_status.as_ref()
    }

    pub fn profiles(&self) -> &ProfilePair {
        &self.profiles
    }

    /// Issues collected while normalizing; only non-empty for permissive calculations.
    pub fn issues(&self) -> &[String] {
        self.issues.issues()
    }

    pub fn params(&self) -> &NormalizedParameters {
        &self.params
    }

    pub fn savings(&self) -> &SavingsResult {
        &self.savings
    }

    pub fn incentives(&self) -> &Incentives {
        &self.incentives
    }

    pub fn utility_requirements(&self) -> Option<UtilityRequirements> {
        self.incentives.utility_requirements()
    }

    pub fn builder_incentive_display(&self) -> String {
        match self.incentives.has_incentive() {
            Some(_) => format!("${:.2}", self.incentives.builder_incentive()),
            None => BUILDER_INCENTIVE_MANAGED_ELSEWHERE.to_string(),
        }
    }

    /// The input bag as it would have to be submitted to reproduce this calculation without
    /// the home status record.
    pub fn simulation_kwargs(&self) -> Map<String, Value> {
        let mut kwargs = self.input.raw().clone();
        let params = &self.params;

        if kwargs.contains_key("home_status_id") {
            let code: &dyn EnergyProfileSource = &*self.profiles.code;
            let improved: &dyn EnergyProfileSource = &*self.profiles.improved;
            kwargs.insert("us_state".into(), json!(params.us_state));
            kwargs.insert("heating_fuel".into(), json!(params.heating_fuel));
            kwargs.insert("home_size".into(), json!(params.home_size));
            kwargs.insert("heating_zone".into(), json!(params.heating_zone));
            kwargs.insert(
                "code_data".into(),
                json!({
                    "heating_therms": code.heating_therms(),
                    "heating_kwh": code.heating_kwh(),
                    "cooling_kwh": code.cooling_kwh(),
                    "total_consumption_kwh": code.total_consumption_kwh(),
                    "total_consumption_therms": code.total_consumption_therms(),
                }),
            );
            kwargs.insert(
                "improved_data".into(),
                json!({
                    "heating_therms": improved.heating_therms(),
                    "heating_kwh": improved.heating_kwh(),
                    "cooling_kwh": improved.cooling_kwh(),
                    "primary_heating_type": improved.primary_heating_type(),
                    "primary_cooling_type": improved.primary_cooling_type(),
                    "primary_cooling_fuel": improved.primary_cooling_fuel(),
                }),
            );
            kwargs.insert(
                "percent_improvement".into(),
                json!(params.default_percent_improvement),
            );
            kwargs.insert("electric_utility".into(), json!(params.electric_utility));
            kwargs.insert("gas_utility".into(), json!(params.gas_utility));
            kwargs.shift_remove("home_status_id");
        }

        if let ApplianceChoices::Typed {
            clothes_washer,
            clothes_dryer_fuel,
            ..
        } = &params.appliances
        {
            for key in V2_ONLY_INPUTS {
                kwargs.shift_remove(key);
            }
            kwargs
                .entry("clothes_dryer_fuel")
                .or_insert_with(|| json!(clothes_dryer_fuel.as_key()));
            kwargs
                .entry("estar_clothes_washer_installed")
                .or_insert_with(|| json!(clothes_washer));
        }

        kwargs
    }

    /// [`Self::simulation_kwargs`] rendered so it can be pasted back in as a test input.
    pub fn dump_simulation(&self) -> Result<String, serde_json::Error> {
        let mut buffer = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
        self.simulation_kwargs().serialize(&mut serializer)?;

        Ok(format!("kwargs = {}", String::from_utf8_lossy(&buffer)))
    }

    pub fn reports(&self) -> Result<Reports, serde_json::Error> {
        Ok(Reports::new(
            &self.input,
            self.home_status.as_ref().map(|home_status| home_status.id),
            self.profiles.input_simulation,
            &self.params,
            &self.savings,
            &self.incentives,
            self.dump_simulation()?,
        ))
    }

    fn savings_data(&self) -> ResultData {
        let savings = &self.savings;
        let mut data = ResultData::new();
        let mut put = |key: &str, value: Value| {
            data.insert(key.to_string(), value);
        };

        put("program", json!(self.program()));
        put("heating_kwh_savings", json!(savings.heating_cooling.heating_kwh));
        put("heating_therm_savings", json!(savings.heating_cooling.heating_therm));
        put("cooling_kwh_savings", json!(savings.heating_cooling.cooling_kwh));
        put("cooling_therm_savings", json!(savings.heating_cooling.cooling_therm));
        put(
            "smart_thermostat_kwh_savings",
            json!(savings.smart_thermostat.kwh()),
        );
        put(
            "smart_thermostat_therm_savings",
            json!(savings.smart_thermostat.therm()),
        );
        put("water_heater_kwh_savings", json!(savings.water_heater.kwh));
        put("showerhead_kwh_savings", json!(savings.showerhead_kwh()));
        put("showerhead_therm_savings", json!(savings.showerhead_therm()));
        put("lighting_kwh_savings", json!(savings.lighting_kwh()));
        put("appliance_kwh_savings", json!(savings.appliances.kwh()));
        put("appliance_therm_savings", json!(savings.appliances.therm()));
        put("total_kwh_savings", json!(savings.total_kwh()));
        put("total_therm_savings", json!(savings.total_therm()));
        put("total_mmbtu_savings", json!(savings.total_mmbtu()));
        put(
            "revised_percent_improvement",
            json!(savings.revised_percent_improvement()),
        );
        put(
            "code_total_consumption_mmbtu",
            json!(savings.code_total_consumption_mmbtu),
        );
        put(
            "improved_total_consumption_mmbtu",
            json!(savings.improved_total_consumption_mmbtu),
        );
        put(
            "improved_total_consumption_mmbtu_with_savings",
            json!(savings.improved_total_consumption_mmbtu_with_savings()),
        );
        put(
            "heat_pump_water_heater_kwh_savings",
            json!(savings.water_heater.heat_pump_kwh_savings),
        );
        put("water_heater_therm_savings", json!(savings.water_heater.therm));

        for (key, value) in self.incentives.data() {
            put(key, value);
        }
        put("builder_incentive", json!(self.builder_incentive_display()));
        put(
            "incentive_paying_organization",
            json!(self.incentives.incentive_paying_organization()),
        );

        data
    }

    /// The result mapping for this calculation.
    ///
    /// A completed certification answers from the cache unless recalculation is asked for;
    /// any fresh result linked to a home status is written back to the cache.
    #[instrument(skip_all)]
    pub fn result_data(
        &self,
        flags: CalculationFlags,
        cache: &dyn ResultCache,
    ) -> Result<ResultData, CalculatorError> {
        if let Some(home_status) = self.home_status.as_ref() {
            if home_status.complete && !flags.contains(CalculationFlags::RECALCULATE) {
                match cache.get(home_status.id) {
                    Some(mut data) => {
                        info!("Using stored result for home status {}", home_status.id);
                        data.insert("from_db".into(), json!(true));
                        return Ok(data);
                    }
                    None => warn!(
                        "Updating stored result for home status {} as it doesn't exist",
                        home_status.id
                    ),
                }
            }
        }

        let mut data = self.savings_data();
        data.insert("from_db".into(), json!(false));
        data.insert(
            "utility_requirements".into(),
            serde_json::to_value(self.utility_requirements())?,
        );
        if flags.contains(CalculationFlags::INCLUDE_REPORTS) {
            data.insert("reports".into(), serde_json::to_value(self.reports()?)?);
        }

        if let Some(home_status) = self.home_status.as_ref() {
            cache.put(home_status.id, data.clone());
        }

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_models::{Analysis, AnalysisType, SimulationCatalog, StructuredSimulation};
    use crate::input::Floorplan;
    use crate::result::{InMemoryResultCache, NoResultCache};
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::str::FromStr;

    fn input(value: Value) -> CalculationInput {
        let Value::Object(map) = value else {
            panic!("test input should be an object")
        };
        CalculationInput::from_map(map).unwrap()
    }

    #[fixture]
    fn base_home() -> Value {
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
            "certified_earth_advantage": null,
        })
    }

    fn calculator_for(program: ProgramVersion, kwargs: Value) -> Calculator {
        Calculator::new(
            program,
            input(kwargs),
            None,
            &SimulationCatalog::default(),
            CalculationFlags::empty(),
        )
        .unwrap()
    }

    #[fixture]
    fn catalog() -> SimulationCatalog {
        let analysis = |analysis_type, heating_kwh| Analysis {
            analysis_type,
            heating_kwh,
            cooling_kwh: 2000.,
            total_consumption_kwh: heating_kwh + 6000.,
            ..Default::default()
        };
        SimulationCatalog {
            structured: vec![StructuredSimulation {
                id: 10,
                analyses: vec![
                    analysis(AnalysisType::Reference, 10000.),
                    analysis(AnalysisType::Design, 8000.),
                ],
                ..Default::default()
            }],
            legacy: vec![],
        }
    }

    fn home_status(complete: bool) -> HomeStatus {
        HomeStatus {
            id: 3,
            complete,
            us_state: Some("OR".into()),
            heating_zone: Some("HZ2".into()),
            electric_utility: Some("foo".into()),
            gas_utility: None,
            floorplan: Some(Floorplan {
                simulation_id: Some(10),
                remrate_target_id: None,
            }),
        }
    }

    fn linked_input() -> CalculationInput {
        input(json!({
            "home_status_id": 3,
            "heating_fuel": "electric",
            "heating_system_config": "central",
            "home_size": "small",
            "heating_zone": "hz2",
            "water_heater_tier": "tier3",
            "smart_thermostat_installed": false,
            "percent_improvement": 0.2,
        }))
    }

    #[rstest]
    #[case("neea-bpa", ProgramVersion::V2)]
    #[case("neea-bpa-v3", ProgramVersion::V3)]
    fn should_parse_program_slugs(#[case] slug: &str, #[case] expected: ProgramVersion) {
        assert_eq!(ProgramVersion::from_str(slug).unwrap(), expected);
        assert_eq!(expected.as_str(), slug);
        assert_eq!(json!(expected), json!(slug));
    }

    #[rstest]
    fn should_order_result_keys(base_home: Value) {
        let calculator = calculator_for(ProgramVersion::V2, base_home);
        let data = calculator
            .result_data(CalculationFlags::empty(), &NoResultCache)
            .unwrap();
        let keys = data.keys().map(String::as_str).collect::<Vec<_>>();

        assert_eq!(
            keys[..4],
            [
                "program",
                "heating_kwh_savings",
                "heating_therm_savings",
                "cooling_kwh_savings"
            ]
        );
        assert_eq!(
            keys[keys.len() - 5..],
            [
                "bpa_smart_thermostat_kwh_savings",
                "smart_thermostat_kwh_incentive",
                "incentive_paying_organization",
                "from_db",
                "utility_requirements"
            ]
        );
        assert!(!data.contains_key("reports"));
        assert_eq!(data["program"], json!("neea-bpa"));
        assert_eq!(data["from_db"], json!(false));
        assert_eq!(data["has_incentive"], Value::Null);
        assert_eq!(
            data["builder_incentive"],
            json!(BUILDER_INCENTIVE_MANAGED_ELSEWHERE)
        );
        assert_eq!(data["utility_requirements"], Value::Null);
        assert_relative_eq!(
            data["total_kwh_savings"].as_f64().unwrap(),
            calculator.savings().total_kwh()
        );
    }

    #[rstest]
    fn should_include_reports_when_asked(base_home: Value) {
        let calculator = calculator_for(ProgramVersion::V2, base_home);
        let data = calculator
            .result_data(CalculationFlags::INCLUDE_REPORTS, &NoResultCache)
            .unwrap();

        let reports = data["reports"].as_object().unwrap();
        assert_eq!(
            reports.keys().map(String::as_str).collect::<Vec<_>>(),
            [
                "summary",
                "heating_cooling",
                "hot_water",
                "lighting",
                "appliances",
                "thermostat",
                "shower_head",
                "incentives",
                "total",
                "simulation_dump"
            ]
        );
    }

    #[rstest]
    fn should_show_requirements_of_ineligible_utility(mut base_home: Value) {
        base_home["electric_utility"] = json!("utility-peninsula-power-light");
        let calculator = calculator_for(ProgramVersion::V2, base_home.clone());
        let requirements = calculator.utility_requirements().unwrap();
        assert!(requirements.title.contains("Peninsula Power & Light"));

        base_home["electric_meter_number"] = json!("FOO BAR");
        let calculator = calculator_for(ProgramVersion::V2, base_home);
        assert_eq!(calculator.utility_requirements(), None);
        assert!(calculator.builder_incentive_display().starts_with('$'));
    }

    #[rstest]
    fn should_fail_with_every_issue_unless_permissive(mut base_home: Value) {
        base_home["us_state"] = json!("CA");
        base_home["heating_zone"] = json!("hz9");

        let error = Calculator::new(
            ProgramVersion::V2,
            input(base_home.clone()),
            None,
            &SimulationCatalog::default(),
            CalculationFlags::empty(),
        )
        .unwrap_err();
        assert_eq!(error.issues().map(|issues| issues.len()), Some(2));

        let calculator = Calculator::new(
            ProgramVersion::V2,
            input(base_home.clone()),
            None,
            &SimulationCatalog::default(),
            CalculationFlags::PERMISSIVE,
        )
        .unwrap();
        assert_eq!(calculator.issues().len(), 2);
        assert_eq!(calculator.params().us_state, None);

        base_home["raise_issues"] = json!(false);
        assert!(Calculator::new(
            ProgramVersion::V2,
            input(base_home),
            None,
            &SimulationCatalog::default(),
            CalculationFlags::empty(),
        )
        .is_ok());
    }

    #[rstest]
    fn should_fail_structurally_without_home_status_record(base_home: Value) {
        let mut base_home = base_home;
        base_home["home_status_id"] = json!(42);

        let error = Calculator::new(
            ProgramVersion::V2,
            input(base_home),
            None,
            &SimulationCatalog::default(),
            CalculationFlags::empty(),
        )
        .unwrap_err();
        assert!(matches!(error, CalculatorError::Structural(_)));
    }

    #[rstest]
    fn should_write_through_and_answer_completed_homes_from_cache(catalog: SimulationCatalog) {
        let cache = InMemoryResultCache::default();

        let calculator = Calculator::new(
            ProgramVersion::V2,
            linked_input(),
            Some(home_status(false)),
            &catalog,
            CalculationFlags::empty(),
        )
        .unwrap();
        let fresh = calculator
            .result_data(CalculationFlags::empty(), &cache)
            .unwrap();
        assert_eq!(fresh["from_db"], json!(false));
        assert_eq!(cache.len(), 1);

        let calculator = Calculator::new(
            ProgramVersion::V2,
            linked_input(),
            Some(home_status(true)),
            &catalog,
            CalculationFlags::empty(),
        )
        .unwrap();
        let stored = calculator
            .result_data(CalculationFlags::empty(), &cache)
            .unwrap();
        assert_eq!(stored["from_db"], json!(true));
        assert_eq!(stored["total_kwh_savings"], fresh["total_kwh_savings"]);

        let recalculated = calculator
            .result_data(CalculationFlags::RECALCULATE, &cache)
            .unwrap();
        assert_eq!(recalculated["from_db"], json!(false));
    }

    #[rstest]
    fn should_dump_home_status_values_into_kwargs(catalog: SimulationCatalog) {
        let calculator = Calculator::new(
            ProgramVersion::V2,
            linked_input(),
            Some(home_status(false)),
            &catalog,
            CalculationFlags::empty(),
        )
        .unwrap();
        let kwargs = calculator.simulation_kwargs();

        assert!(!kwargs.contains_key("home_status_id"));
        assert_eq!(kwargs["us_state"], json!("OR"));
        assert_eq!(kwargs["home_size"], json!("all"));
        assert_eq!(kwargs["electric_utility"], json!("foo"));
        assert_eq!(kwargs["code_data"]["heating_kwh"], json!(10000.));
        assert_eq!(kwargs["improved_data"]["heating_kwh"], json!(8000.));
        assert_eq!(kwargs["percent_improvement"], json!(0.2));

        let dump = calculator.dump_simulation().unwrap();
        assert!(dump.starts_with("kwargs = {\n    \""));
    }

    #[rstest]
    fn should_dump_v3_appliance_inputs(mut base_home: Value) {
        base_home["estar_std_refrigerators_installed"] = json!("refrigerator_bottom_freezer");
        base_home["estar_clothes_washer_installed"] = json!("washer_top_load");
        base_home.as_object_mut().unwrap().shift_remove("estar_front_load_clothes_washer_installed");
        let calculator = calculator_for(ProgramVersion::V3, base_home);
        let kwargs = calculator.simulation_kwargs();

        for key in V2_ONLY_INPUTS {
            assert!(!kwargs.contains_key(key), "{key} should not be dumped");
        }
        assert_eq!(kwargs["clothes_dryer_fuel"], json!("electric"));
        assert_eq!(kwargs["estar_clothes_washer_installed"], json!("washer_top_load"));
    }

    #[rstest]
    fn should_calculate_identically_twice(base_home: Value) {
        let first = calculator_for(ProgramVersion::V2, base_home.clone())
            .result_data(CalculationFlags::INCLUDE_REPORTS, &NoResultCache)
            .unwrap();
        let second = calculator_for(ProgramVersion::V2, base_home)
            .result_data(CalculationFlags::INCLUDE_REPORTS, &NoResultCache)
            .unwrap();

        assert_eq!(first, second);
    }
}
