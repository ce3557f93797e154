//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `cli_loading`: Command-line flag parsing
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `operation_mode`: Operation mode determination tests
//! - `field_resolution`: Token and username resolution tests
//! - `validation`: Presentation-layer bound checks

mod helpers;
