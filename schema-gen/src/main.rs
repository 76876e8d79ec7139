use neea_rtf::input::CalculationInput;
use schemars::schema_for;

fn main() -> anyhow::Result<()> {
    let schema = schema_for!(CalculationInput);
    println!("{}", serde_json::to_string_pretty(&schema)?);

    Ok(())
}
