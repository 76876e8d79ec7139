mod compare_floats;
pub mod calculator;
pub mod constants;
pub mod data_models;
pub mod errors;
pub mod incentives;
pub mod input;
pub mod normalize;
pub mod output;
pub mod report;
pub mod result;
pub mod savings;

extern crate lazy_static;

pub use crate::calculator::{CalculationFlags, Calculator, ProgramVersion};
pub use crate::errors::CalculatorError;
pub use crate::result::{InMemoryResultCache, NoResultCache, ResultCache, ResultData};
use crate::input::CalculationRequest;
use crate::output::Output;
use serde_json::Value;
use std::io::{Read, Write};
use tracing::{info, instrument};

/// Run one calculation request read as JSON.
///
/// `program` overrides the program named in the request. The request's `include_reports`
/// and `recalculate` switches are folded into `flags`.
#[instrument(skip_all)]
pub fn calculate(
    input: impl Read,
    program: Option<ProgramVersion>,
    flags: CalculationFlags,
    cache: &dyn ResultCache,
) -> Result<ResultData, CalculatorError> {
    let request = CalculationRequest::from_json(input)?;
    let calculation_input = request.calculation_input()?;
    let flags = request_flags(&request, flags);

    let CalculationRequest {
        program: requested_program,
        home_status,
        simulations,
        ..
    } = request;
    let program = program.unwrap_or(requested_program);
    info!("Calculating {program} savings and incentives");

    let calculator = Calculator::new(program, calculation_input, home_status, &simulations, flags)?;
    calculator.result_data(flags, cache)
}

fn request_flags(request: &CalculationRequest, flags: CalculationFlags) -> CalculationFlags {
    let mut flags = flags;
    if let Some(include_reports) = request.include_reports {
        flags.set(CalculationFlags::INCLUDE_REPORTS, include_reports);
    }
    if request.recalculate {
        flags.insert(CalculationFlags::RECALCULATE);
    }
    flags
}

/// Calculate and write the result mapping (and the reports, when present) to `output`.
pub fn run_project(
    input: impl Read,
    output: impl Output,
    program: Option<ProgramVersion>,
    flags: CalculationFlags,
    cache: &dyn ResultCache,
) -> anyhow::Result<ResultData> {
    let data = calculate(input, program, flags, cache)?;

    if !output.is_noop() {
        let mut writer = output.writer_for_location_key("results", "json")?;
        serde_json::to_writer_pretty(&mut writer, &data)?;
        writer.flush()?;

        if let Some(Value::Object(reports)) = data.get("reports") {
            let mut writer = output.writer_for_location_key("reports", "txt")?;
            for report in reports.values().filter_map(Value::as_str) {
                writeln!(writer, "{report}\n")?;
            }
            writer.flush()?;
        }
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::SinkOutput;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use serde_json::json;
    use std::fs::File;
    use std::io::{BufReader, Cursor};
    use walkdir::WalkDir;

    fn request() -> Value {
        json!({
            "include_reports": false,
            "inputs": {
                "us_state": "WA",
                "heating_fuel": "gas",
                "heating_system_config": "central",
                "home_size": "medium",
                "heating_zone": "hz1",
                "water_heater_tier": "gas_tankless_ef_gte_0p9",
                "estar_dishwasher_installed": true,
                "code_data": {"heating_therms": 400.0, "heating_kwh": 500.0, "cooling_kwh": 1500.0},
                "improved_data": {
                    "heating_therms": 300.0,
                    "heating_kwh": 450.0,
                    "cooling_kwh": 1400.0,
                    "primary_heating_type": "furnace",
                },
                "electric_utility": "puget-sound-energy",
                "gas_utility": "puget-sound-energy",
            },
        })
    }

    #[rstest]
    fn should_calculate_request() {
        let body = serde_json::to_vec(&request()).unwrap();
        let data = calculate(Cursor::new(body), None, CalculationFlags::INCLUDE_REPORTS, &NoResultCache)
            .unwrap();

        assert_eq!(data["program"], json!("neea-bpa"));
        assert!(!data.contains_key("reports"));
        assert_eq!(data["from_db"], json!(false));
    }

    #[rstest]
    fn should_override_requested_program() {
        let body = serde_json::to_vec(&request()).unwrap();
        let data = calculate(
            Cursor::new(body),
            Some(ProgramVersion::V3),
            CalculationFlags::empty(),
            &NoResultCache,
        )
        .unwrap();

        assert_eq!(data["program"], json!("neea-bpa-v3"));
        assert_eq!(data["lighting_kwh_savings"], json!(0.));
    }

    #[rstest]
    fn should_reject_malformed_request() {
        let result = calculate(
            Cursor::new(b"{\"inputs\": 3}".to_vec()),
            None,
            CalculationFlags::empty(),
            &NoResultCache,
        );

        assert!(matches!(result, Err(CalculatorError::InvalidRequest(_))));
    }

    #[rstest]
    fn should_report_every_issue_of_request() {
        let mut request = request();
        request["inputs"]["us_state"] = json!("CA");
        request["inputs"]["heating_system_config"] = json!("radiant");
        let body = serde_json::to_vec(&request).unwrap();

        let error = calculate(Cursor::new(body), None, CalculationFlags::empty(), &NoResultCache)
            .unwrap_err();

        assert_eq!(
            error.issues().map(|issues| issues.to_vec()),
            Some(vec![
                "State must be either 'OR', 'WA', 'ID', or 'MT'".to_string(),
                "Invalid heating system config identified 'radiant' must be one of central, zonal, all"
                    .to_string(),
            ])
        );
    }

    #[rstest]
    fn should_successfully_calculate_all_demo_files() {
        for entry in WalkDir::new("./demos")
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| {
                !e.file_type().is_dir() && e.file_name().to_str().unwrap().ends_with("json")
            })
        {
            let result = run_project(
                BufReader::new(File::open(entry.path()).unwrap()),
                SinkOutput,
                None,
                CalculationFlags::INCLUDE_REPORTS,
                &InMemoryResultCache::default(),
            );
            assert!(
                result.is_ok(),
                "error was {:?} when calculating file {}",
                result.err().unwrap(),
                entry.file_name().to_str().unwrap()
            );
        }
    }
}
