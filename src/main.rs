extern crate neea_rtf;

use anyhow::anyhow;
use clap::Parser;
use csv::WriterBuilder;
use neea_rtf::output::FileOutput;
use neea_rtf::{run_project, CalculationFlags, InMemoryResultCache, ProgramVersion, ResultData};
use rayon::prelude::*;
use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, error};
use tracing_subscriber::fmt::format::FmtSpan;

const SUMMARY_KEYS: [&str; 8] = [
    "program",
    "total_kwh_savings",
    "total_therm_savings",
    "total_mmbtu_savings",
    "revised_percent_improvement",
    "total_incentive",
    "builder_incentive",
    "incentive_paying_organization",
];

#[derive(Parser, Default, Debug)]
#[clap(author, version, about, long_about = None)]
struct CalculatorArgs {
    #[arg(required = true, help = "Paths to calculation requests in .json format")]
    input_files: Vec<String>,
    #[arg(
        long,
        value_parser = ProgramVersion::from_str,
        help = "Program to calculate under (neea-bpa or neea-bpa-v3), overriding the request"
    )]
    program: Option<ProgramVersion>,
    #[clap(long, default_value_t = false, help = "Leave the text reports out of the results")]
    no_reports: bool,
    #[clap(
        long,
        default_value_t = false,
        help = "Ignore stored results of completed certifications"
    )]
    recalculate: bool,
    #[clap(
        long,
        default_value_t = false,
        help = "Calculate in spite of input issues, logging them instead"
    )]
    permissive: bool,
    #[arg(long, short, help = "Directory to write results into")]
    output_dir: Option<PathBuf>,
    #[clap(long, default_value_t = false, help = "Whether to log out spans")]
    log_spans: bool,
}

fn main() -> anyhow::Result<()> {
    let args = CalculatorArgs::parse();

    // set up basic tracing
    let tracing_subscriber = {
        let mut builder = tracing_subscriber::fmt::fmt().with_max_level(tracing::Level::TRACE);

        if args.log_spans {
            builder = builder.with_span_events(FmtSpan::CLOSE);
        }

        builder.finish()
    };
    tracing::subscriber::set_global_default(tracing_subscriber)?;

    let flags = (&args).into();
    let cache = InMemoryResultCache::default();

    let results = args
        .input_files
        .par_iter()
        .map(|input_file| {
            let result = calculate_file(input_file, &args, flags, &cache);
            if let Err(ref e) = result {
                error!("Unable to calculate {input_file}: {e}");
            }
            (input_file.as_str(), result)
        })
        .collect::<Vec<_>>();

    let output_path = args.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_path)?;
    write_summary_file(&output_path.join("summary.csv"), &results)?;

    let failures = results.iter().filter(|(_, result)| result.is_err()).count();
    if failures > 0 {
        return Err(anyhow!(
            "{failures} of {} calculations failed",
            results.len()
        ));
    }

    Ok(())
}

fn calculate_file(
    input_file: &str,
    args: &CalculatorArgs,
    flags: CalculationFlags,
    cache: &InMemoryResultCache,
) -> anyhow::Result<ResultData> {
    let input_path = Path::new(input_file);
    let input_file_stem = input_path
        .file_stem()
        .and_then(OsStr::to_str)
        .ok_or_else(|| anyhow!("Input file {input_file} has no usable name"))?;

    let output_path = match &args.output_dir {
        Some(output_dir) => output_dir.clone(),
        None => input_path
            .with_file_name(format!("{input_file_stem}__results")),
    };
    fs::create_dir_all(&output_path)?;
    let file_output = FileOutput::new(output_path, format!("{input_file_stem}__{{}}.{{}}"));

    let data = run_project(
        BufReader::new(File::open(input_path)?),
        &file_output,
        args.program,
        flags,
        cache,
    )?;
    debug!(
        "JSON response: {}",
        serde_json::to_string_pretty(&data)?
    );

    Ok(data)
}

/// One row per input file with the headline figures, or the error for a failed file.
fn write_summary_file(
    path: &Path,
    results: &[(&str, anyhow::Result<ResultData>)],
) -> anyhow::Result<()> {
    let mut writer = WriterBuilder::new().flexible(true).from_path(path)?;

    let mut headings = vec!["input_file"];
    headings.extend(SUMMARY_KEYS);
    writer.write_record(&headings)?;

    for (input_file, result) in results {
        let mut row = vec![input_file.to_string()];
        match result {
            Ok(data) => row.extend(SUMMARY_KEYS.iter().map(|key| match data.get(*key) {
                Some(Value::String(text)) => text.clone(),
                Some(Value::Null) | None => String::new(),
                Some(value) => value.to_string(),
            })),
            Err(e) => row.push(format!("error: {e}")),
        }
        writer.write_record(&row)?;
    }

    writer.flush()?;

    Ok(())
}

impl From<&CalculatorArgs> for CalculationFlags {
    fn from(args: &CalculatorArgs) -> Self {
        let mut flags = CalculationFlags::empty();
        if !args.no_reports {
            flags.insert(CalculationFlags::INCLUDE_REPORTS);
        }
        if args.recalculate {
            flags.insert(CalculationFlags::RECALCULATE);
        }
        if args.permissive {
            flags.insert(CalculationFlags::PERMISSIVE);
        }
        flags
    }
}
