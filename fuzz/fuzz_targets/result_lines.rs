#![no_main]

use itl_harness::parser::{SolverVerdict, parse_result_line, parse_verdict};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Solver output is decoded lossily by the adapter, so do the same here
    let text = String::from_utf8_lossy(data);
    let verdict = parse_verdict(text.lines());

    // The verdict must be the one of the first recognised line
    let first = text.lines().find_map(parse_result_line);
    assert_eq!(verdict, first.unwrap_or(SolverVerdict::Unknown));
});
