use std::io;
use std::io::Write;
use std::process::Command;
use crate::fixtures::TestCase;
use crate::stats::Counters;

/// Runs the simulator for a single test case and prints the verdict
///
/// The progress line is printed before the simulator starts, then finished
/// with ` OK` or ` ERROR` plus one detail line per mismatched counter.
/// Counter mismatches are only reported; a simulator which can't be started
/// or exits non-zero is an error for the caller, which stops the batch
///
/// # Arguments
///
/// * `simulator`: Path to the simulator binary
/// * `test`: The case to run
///
/// returns: Result<(), String>
pub fn run_test(simulator: &str, test: &TestCase) -> Result<(), String> {
    print!("running test {}...", test.name);
    // No newline yet, flush so the name shows while the simulator runs
    io::stdout().flush().map_err(|e| format!("Couldn't flush standard output: {e}"))?;
    let output = Command::new(simulator)
        .args(test.args.iter().flatten())
        .output()
        .map_err(|e| format!("Couldn't run the simulator at path {simulator}: {e}"))?;
    if !output.status.success() {
        return Err(format!("The simulator failed on test {} with {}: {}", test.name, output.status, String::from_utf8_lossy(&output.stderr)));
    }
    let observed = Counters::scan(String::from_utf8_lossy(&output.stdout).lines());
    let errors = verdict(test, &observed);
    if errors.is_empty() {
        println!(" OK");
    } else {
        println!(" ERROR");
        print!("{errors}");
    }
    Ok(())
}

/// Builds the mismatch report for a case, one line per differing counter,
/// hits first. Empty means the case passed. An expectation which was never
/// annotated can't match anything the simulator reports
pub(crate) fn verdict(test: &TestCase, observed: &Counters) -> String {
    let mut errors = String::new();
    if observed.hits != test.expected_hits {
        errors.push_str(&format!("hits {}, want {}\n", format_count(observed.hits), format_count(test.expected_hits)));
    }
    if observed.accesses != test.expected_accesses {
        errors.push_str(&format!("accesses {}, want {}\n", format_count(observed.accesses), format_count(test.expected_accesses)));
    }
    errors
}

fn format_count(count: Option<u64>) -> String {
    match count {
        Some(count) => count.to_string(),
        None => String::from("none"),
    }
}
