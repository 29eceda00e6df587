//! Monthly precipitation chart service.
//!
//! Fetches one calendar year of daily precipitation totals for a single
//! geographic point from the Open-Meteo archive, folds the daily values
//! into twelve monthly totals, and renders them as an SVG bar chart with
//! hover tooltips.
//!
//! Pipeline: fetch → aggregate → render. Single-threaded, one request,
//! no retries; any failure ends the run with nothing written.

pub mod analysis;
pub mod chart;
pub mod config;
pub mod ingest;
pub mod logging;
pub mod model;
