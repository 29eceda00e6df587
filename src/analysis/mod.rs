/// Aggregation utilities for the precipitation chart service.
///
/// Submodules:
/// - `monthly` — folds the archive's daily series into calendar-month totals.

pub mod monthly;
