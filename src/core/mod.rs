//! VIN validation, check digit verification and decoding.
//!
//! This module provides the whole decoding pipeline: structural validation,
//! the ISO 3779 check digit, and region/country/manufacturer/model year
//! lookups against static tables.

mod alphabet;
mod checksum;
pub mod countries;
mod decode;
mod error;
pub mod manufacturers;
mod model_year;
mod regions;
mod types;
mod validation;

pub use alphabet::{CHECK_DIGIT_INDEX, VIN_LENGTH, is_vin_char};
pub use checksum::*;
pub use countries::country_for;
pub use decode::*;
pub use error::*;
pub use manufacturers::manufacturer_for;
pub use model_year::{FIRST_MODEL_YEAR, YEAR_CODES, model_year_horizon, model_years_through};
pub use regions::*;
pub use types::*;
pub use validation::*;
