use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches an access count line, e.g. `Accesses: 8`
    pub static ref ACCESSES_LINE: Regex = Regex::new(r"^Accesses:\s*(?P<count>\d+)").unwrap();
    /// Matches a hit count line, e.g. `Hits:\t5`. The simulator pads after
    /// the colon with tabs; annotations usually don't pad at all
    pub static ref HITS_LINE: Regex = Regex::new(r"^Hits:\s*(?P<count>\d+)").unwrap();
}

/// The statistics counters the simulator reports
///
/// Both fields are optional, as the same pair is used for partially annotated
/// expectation files where either counter may never have been given
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Counters {
    pub accesses: Option<u64>,
    pub hits: Option<u64>,
}

impl Counters {
    /// Scans lines of text for counter lines. If a counter appears on
    /// multiple lines, the last one wins
    pub fn scan<'a>(lines: impl Iterator<Item = &'a str>) -> Self {
        let mut counters = Self::default();
        for line in lines {
            if let Some(count) = parse_count(&ACCESSES_LINE, line) {
                counters.accesses = Some(count);
            } else if let Some(count) = parse_count(&HITS_LINE, line) {
                counters.hits = Some(count);
            }
        }
        counters
    }
}

/// Extracts the counter value from a line, or None if the line doesn't match
/// the pattern. Lines with a counter prefix but no integer after the colon
/// count as non-matching
pub(crate) fn parse_count(pattern: &Regex, line: &str) -> Option<u64> {
    pattern.captures(line).and_then(|tokens| tokens["count"].parse().ok())
}
