//! Test modules for the temp-tracker binary crate.
