//! Normalization of raw upstream members into per-chamber record sets.
//!
//! For each member: select the term with the latest end date, sanitize the
//! name fields down to letters and spaces, expand the state abbreviation,
//! and route the record into the house or senate set based on the latest
//! term's type. Members with no terms are dropped entirely.

use cap_core::{Chamber, Legislator, state_name};

use crate::models::{RawMember, RawTerm};

/// The two normalized record sets produced by one transformation pass.
#[derive(Debug, Default)]
pub struct ChamberSets {
    pub house: Vec<Legislator>,
    pub senate: Vec<Legislator>,
}

impl ChamberSets {
    /// Records destined for the given chamber's table.
    #[must_use]
    pub fn records(&self, chamber: Chamber) -> &[Legislator] {
        match chamber {
            Chamber::House => &self.house,
            Chamber::Senate => &self.senate,
        }
    }

    /// Total records across both chambers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.house.len() + self.senate.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.house.is_empty() && self.senate.is_empty()
    }
}

/// Strip everything but letters and whitespace from a name field.
///
/// Upstream names carry accents, periods, quotes, and hyphens
/// (`"Á. \"Chick\" Smith-Jones III."`); the mirror stores plain ASCII
/// letters and spaces only.
#[must_use]
pub fn sanitize_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect()
}

/// The term with the latest end date, or `None` when the member has none.
///
/// End dates are ISO `YYYY-MM-DD`, so lexicographic comparison is
/// temporal comparison. On equal end dates the earlier-listed term wins.
#[must_use]
pub fn latest_term(terms: &[RawTerm]) -> Option<&RawTerm> {
    terms
        .iter()
        .reduce(|best, term| if term.end > best.end { term } else { best })
}

/// Normalize one raw member into a [`Legislator`] and its target chamber.
///
/// Returns `None` when the member has no terms or the latest term's type
/// is neither `"rep"` nor `"sen"`.
#[must_use]
pub fn normalize_member(member: &RawMember) -> Option<(Chamber, Legislator)> {
    let term = latest_term(&member.terms)?;
    let chamber = Chamber::from_term_type(&term.term_type)?;

    let firstname = sanitize_name(&member.name.first);
    let lastname = sanitize_name(&member.name.last);
    let fullname = member.name.official_full.as_ref().map_or_else(
        || format!("{firstname} {lastname}"),
        |full| sanitize_name(full),
    );

    let record = Legislator {
        fullname,
        firstname,
        lastname,
        id: member.id.bioguide.clone(),
        party: term.party.clone(),
        state: state_name(&term.state).to_string(),
        position: term.term_type.clone(),
        start_term: term.start.clone(),
        end_term: term.end.clone(),
    };
    Some((chamber, record))
}

/// Transform the full upstream member list into house and senate sets.
#[must_use]
pub fn split_chambers(members: &[RawMember]) -> ChamberSets {
    let mut sets = ChamberSets::default();
    for member in members {
        match normalize_member(member) {
            Some((Chamber::House, record)) => sets.house.push(record),
            Some((Chamber::Senate, record)) => sets.senate.push(record),
            None => {}
        }
    }
    sets
}
