//! Various utility functions, structs and traits

pub mod git;
