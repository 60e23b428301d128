//! # vinparse
//!
//! Vehicle Identification Number (VIN) validation and decoding.
//!
//! A VIN is a 17-character identifier made of digits and capital letters
//! other than `I`, `O` and `Q`. This crate checks that structure, verifies
//! the check digit in position 9, and decodes the World Manufacturer
//! Identifier into region, country and manufacturer names. The model year
//! code in position 10 is decoded into the candidate years it can stand for.
//!
//! ## Quick Start
//!
//! ```rust
//! use vinparse::*;
//!
//! let vin = get_info("WBA8H8108JA857577").unwrap();
//! assert_eq!(vin.manufacturer(), "BMW");
//! assert_eq!(vin.country(), "Germany/West Germany");
//! assert_eq!(vin.region(), Some(Region::Europe));
//! assert_eq!(vin.wmi(), "WBA");
//! assert_eq!(vin.model_years_through(2030), vec![1988, 2018]);
//!
//! assert!(check_validity("00000000000000000").is_ok());
//! assert!(verify_checksum("1M8GDM9AXKP042788").is_ok());
//! ```
//!
//! The check digit is only enforced for North American VINs by default;
//! see [`DecodeOptions`] to change that.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Validation, check digit, decoding |
//!
//! Decoding emits [`tracing`] events at `debug` and `trace` level; install a
//! subscriber to see them.

#[cfg(feature = "core")]
pub mod core;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
