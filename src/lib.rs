pub mod config;
pub mod export;
pub mod gdp;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{load_config, load_config_from, Config};
pub use gdp::{load_and_prepare_gdp_data, load_gdp_from, TidyRecord, TidyTable};
