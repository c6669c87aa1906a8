use std::time::Instant;
use clap::Parser;
use cachecheck::fixtures::get_tests;
use cachecheck::runner::run_test;

#[cfg(debug_assertions)]
const DEBUG_DEFAULT: bool = true;

#[cfg(not(debug_assertions))]
const DEBUG_DEFAULT: bool = false;

#[derive(Parser, Debug)]
#[command(about = String::from("Test harness for the cache simulator"))]
struct Args {
    /// The directory holding the testcase fixtures
    #[arg(default_value = "testcases")]
    testcases: String,

    /// Path to the simulator binary under test
    #[arg(short, long, default_value = "./cache_sim")]
    simulator: String,

    #[arg(short, long)]
    performance: bool,

    #[arg(short, long, default_value_t = DEBUG_DEFAULT)]
    debug: bool,
}

fn main() -> Result<(), String> {
    let start = Instant::now();
    let args = Args::parse();
    let tests = get_tests(&args.testcases).map_err(|e| format!("Couldn't collect the tests from {}: {e}", args.testcases))?;
    if args.debug {
        #[cfg(debug_assertions)]
        println!("Running the debug binary, debug mode is enabled by default. If timing the simulator, re-compile with the --release argument");
        println!("Parsed test cases: {tests:?}");
    }
    for test in &tests {
        run_test(&args.simulator, test)?;
    }
    if args.performance {
        let end = Instant::now();
        let total_time = end - start;
        println!("Total harness time (includes discovery, parsing, and every simulator run): {}s", total_time.as_nanos() as f64 / 1e9)
    }
    Ok(())
}
