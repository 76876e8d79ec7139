#![no_main]

use libfuzzer_sys::fuzz_target;
use neea_rtf::output::SinkOutput;
use neea_rtf::{run_project, CalculationFlags, NoResultCache};
use std::io::{BufReader, Cursor};

fuzz_target!(|data: &[u8]| {
    let _run = run_project(
        BufReader::new(Cursor::new(data)),
        SinkOutput,
        None,
        CalculationFlags::all(),
        &NoResultCache,
    );
});
