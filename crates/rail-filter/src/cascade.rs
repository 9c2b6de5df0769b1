//! The four-step cascading filter: Currency → IO Module → Denomination →
//! Emission. Each step's valid options depend on all prior selections.
//!
//! Pure and deterministic: same dataset and selection, same result.

use std::collections::BTreeSet;

use rail_model::{Dataset, Record, SelectionState};

/// Result of one resolution pass: per-step option lists, the resolved
/// selection, and the matching rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cascade {
    pub currency_options: Vec<String>,
    pub io_options: Vec<String>,
    pub denomination_options: Vec<String>,
    pub emission_options: Vec<String>,
    /// The input selection with invalid or unset fields replaced by the
    /// first sorted option of their step. Fields of steps with empty
    /// option lists stay unset.
    pub resolved: SelectionState,
    /// Indices of matching records, in original load order.
    pub matches: Vec<usize>,
}

impl Cascade {
    /// The record shown on the specification panel: the first match in
    /// load order. Ambiguous 4-tuples keep that order on purpose, so the
    /// displayed values stay stable across recomputations.
    pub fn first_match<'a>(&self, dataset: &'a Dataset) -> Option<&'a Record> {
        self.matches.first().and_then(|&index| dataset.records.get(index))
    }

    /// True when the cascade produced no matching rows. Not an error:
    /// surfaced as a notice, with export unavailable.
    pub fn has_no_match(&self) -> bool {
        self.matches.is_empty()
    }
}

fn sorted_options<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let distinct: BTreeSet<&str> = values.collect();
    distinct.into_iter().map(str::to_string).collect()
}

/// Keep the current value when it is a member of the step's option set,
/// otherwise default to the first (sorted-ascending) option. Never leaves
/// a dangling invalid selection.
fn resolve_step(options: &[String], current: Option<&String>) -> Option<String> {
    match current {
        Some(value) if options.iter().any(|option| option == value) => Some(value.clone()),
        _ => options.first().cloned(),
    }
}

/// Run the cascade over `dataset` with the requested `selection`.
pub fn resolve(dataset: &Dataset, selection: &SelectionState) -> Cascade {
    let records = &dataset.records;

    let currency_options = sorted_options(records.iter().map(|r| r.currency_code.as_str()));
    let currency = resolve_step(&currency_options, selection.currency.as_ref());
    let by_currency: Vec<usize> = currency.as_ref().map_or_else(Vec::new, |currency| {
        (0..records.len())
            .filter(|&index| records[index].currency_code == *currency)
            .collect()
    });

    let io_options = sorted_options(by_currency.iter().map(|&i| records[i].io_module.as_str()));
    let io_module = resolve_step(&io_options, selection.io_module.as_ref());
    let by_io: Vec<usize> = io_module.as_ref().map_or_else(Vec::new, |io_module| {
        by_currency
            .iter()
            .copied()
            .filter(|&index| records[index].io_module == *io_module)
            .collect()
    });

    let denomination_options =
        sorted_options(by_io.iter().map(|&i| records[i].denomination.as_str()));
    let denomination = resolve_step(&denomination_options, selection.denomination.as_ref());
    let by_denomination: Vec<usize> =
        denomination.as_ref().map_or_else(Vec::new, |denomination| {
            by_io
                .iter()
                .copied()
                .filter(|&index| records[index].denomination == *denomination)
                .collect()
        });

    let emission_options = sorted_options(
        by_denomination
            .iter()
            .map(|&i| records[i].emission.as_str()),
    );
    let emission = resolve_step(&emission_options, selection.emission.as_ref());
    let matches: Vec<usize> = emission.as_ref().map_or_else(Vec::new, |emission| {
        by_denomination
            .iter()
            .copied()
            .filter(|&index| records[index].emission == *emission)
            .collect()
    });

    Cascade {
        currency_options,
        io_options,
        denomination_options,
        emission_options,
        resolved: SelectionState {
            currency,
            io_module,
            denomination,
            emission,
        },
        matches,
    }
}
