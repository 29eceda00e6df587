/// Data source adapters.
///
/// One adapter per upstream API. The service currently ingests from a
/// single source, the Open-Meteo historical weather archive.

pub mod open_meteo;
