use std::collections::BTreeSet;
use std::error::Error;
use std::fs;
use std::fs::File;
use std::io::{BufRead, BufReader};
use lazy_static::lazy_static;
use regex::Regex;
use crate::stats::{parse_count, ACCESSES_LINE, HITS_LINE};

lazy_static! {
    /// Matches a parameter annotation, e.g. `#> 128 dm uc`: the cache size,
    /// mapping, and organization to pass to the simulator
    static ref PARAMS_LINE: Regex = Regex::new(r"^#>\s*(?P<size>\S+)\s+(?P<mapping>\S+)\s+(?P<org>\S+)").unwrap();
}

/// A single simulator invocation with its expected statistics
///
/// Built entirely by the loader and never mutated afterwards; the runner only
/// reads it
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TestCase {
    /// The fixture base name plus a 1-based index within its expectation file
    pub name: String,
    /// The simulator's command line: the three configuration tokens from the
    /// last `#>` annotation, then the trace file path. None if no annotation
    /// preceded this case
    pub args: Option<[String; 4]>,
    pub expected_accesses: Option<u64>,
    pub expected_hits: Option<u64>,
}

/// The fields of the next case to be finalised, overwritten as annotation
/// lines are scanned
#[derive(Default)]
struct Pending {
    args: Option<[String; 4]>,
    accesses: Option<u64>,
    hits: Option<u64>,
}

impl Pending {
    /// Copies the current field values into a finalised case
    fn snapshot(&self, base: &str, counter: u32) -> TestCase {
        TestCase {
            name: format!("{base} #{counter}"),
            args: self.args.clone(),
            expected_accesses: self.accesses,
            expected_hits: self.hits,
        }
    }
}

/// Collects the test cases for every fixture in a testcase directory
///
/// A fixture is a `<base>.txt` trace next to a `<base>.out` expectation file;
/// cases are returned in lexicographic order of base name. A missing or
/// unreadable expectation file fails the whole collection
///
/// # Arguments
///
/// * `testcase_dir`: The directory holding the fixture files
///
/// returns: Result<Vec<TestCase>, Box<dyn Error>>
pub fn get_tests(testcase_dir: &str) -> Result<Vec<TestCase>, Box<dyn Error>> {
    let mut names = BTreeSet::new();
    for entry in fs::read_dir(testcase_dir)? {
        let file_name = entry?.file_name().into_string().map_err(|e| format!("Can't convert OS string ({e:?}) to standard string"))?;
        // Everything before the last dot, so a .txt/.out pair collapses to
        // one base name
        let base = match file_name.rsplit_once('.') {
            Some((stem, _)) => stem.to_string(),
            None => file_name,
        };
        names.insert(base);
    }
    let mut tests = Vec::new();
    for name in &names {
        let trace = format!("{testcase_dir}/{name}.txt");
        let out = format!("{testcase_dir}/{name}.out");
        let out_file = File::open(&out).map_err(|e| format!("Couldn't open the expected output file at path {out}: {e}"))?;
        tests.append(&mut parse_expectations(name, &trace, BufReader::new(out_file))?);
    }
    Ok(tests)
}

/// Parses one expectation file into test cases
///
/// Annotation lines update a pending accumulator; each `Hits:` line finalises
/// a case from a copy of it. One extra case is always finalised after the
/// last line, even when the file ends right after a `Hits:` line. The
/// duplicate that produces is a known quirk inherited from the original
/// harness; existing fixture counts depend on it
///
/// # Arguments
///
/// * `base`: The fixture base name, used to build case names
/// * `trace`: Path of the trace file passed to the simulator for every case
/// * `reader`: The expectation file contents
///
/// returns: Result<Vec<TestCase>, Box<dyn Error>>
pub fn parse_expectations(base: &str, trace: &str, reader: impl BufRead) -> Result<Vec<TestCase>, Box<dyn Error>> {
    let mut cases = Vec::new();
    let mut pending = Pending::default();
    let mut counter = 1;
    for line in reader.lines() {
        let line = line?;
        if let Some(tokens) = PARAMS_LINE.captures(&line) {
            pending.args = Some([
                tokens["size"].to_string(),
                tokens["mapping"].to_string(),
                tokens["org"].to_string(),
                trace.to_string(),
            ]);
        } else if let Some(count) = parse_count(&ACCESSES_LINE, &line) {
            pending.accesses = Some(count);
        } else if let Some(count) = parse_count(&HITS_LINE, &line) {
            pending.hits = Some(count);
            cases.push(pending.snapshot(base, counter));
            counter += 1;
        }
    }
    cases.push(pending.snapshot(base, counter));
    Ok(cases)
}
