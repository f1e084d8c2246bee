//! Bond number normalization and match computation.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{BondMatch, MatchResult};

/// Prize label attached to every match. Extracted draw tokens carry no tier
/// information, so membership is all that can be reported.
const PRIZE_LABEL: &str = "Matched";

/// Bond numbers are exactly six digits.
const BOND_NUMBER_LEN: usize = 6;

static DIGIT_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// Extract the canonical bond number from a raw token.
///
/// The first maximal digit run of exactly six digits wins, so "BD123456X"
/// normalizes to "123456". Tokens without such a run yield nothing; in
/// particular an unbroken run of seven or more digits is not a bond number.
pub fn normalize(token: &str) -> Option<String> {
    DIGIT_RUNS
        .find_iter(token)
        .find(|m| m.as_str().len() == BOND_NUMBER_LEN)
        .map(|m| m.as_str().to_string())
}

/// Compare a user bond list against draw results.
///
/// Draw numbers are collapsed into a set, while user numbers keep their
/// order and duplicates. A bond held twice that won is reported twice.
pub fn compute_matches(user_tokens: &[String], draw_tokens: &[String]) -> MatchResult {
    let user_bonds: Vec<String> = user_tokens.iter().filter_map(|t| normalize(t)).collect();
    let draw_numbers: HashSet<String> = draw_tokens.iter().filter_map(|t| normalize(t)).collect();

    let matches = user_bonds
        .iter()
        .filter(|bond| draw_numbers.contains(*bond))
        .map(|bond| BondMatch {
            bond_number: bond.clone(),
            prize: PRIZE_LABEL.to_string(),
        })
        .collect();

    MatchResult {
        matches,
        total_user_bonds: user_bonds.len(),
    }
}
