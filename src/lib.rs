//! # CacheCheck
//!
//! Cachecheck is a test harness for the cache simulator coursework
//!
//! It walks a directory of testcase fixtures, parses the expected statistics
//! annotated in each `.out` file, runs the simulator binary once per derived
//! case, and checks the counters the simulator reports against the
//! expectations
//!
//! The simulator itself is a separate program; the harness only ever talks to
//! it over its command line and standard output

/// Contains testcase discovery and the expectation file parser
pub mod fixtures;

/// Contains the runner used to execute the simulator for a single test case
pub mod runner;

/// Contains the line format for the statistics the simulator reports
pub mod stats;

#[cfg(test)]
mod test;
