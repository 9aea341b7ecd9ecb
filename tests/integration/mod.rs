//! Integration tests for the DCIB terminal

mod cli_parse;
mod properties;
mod scenarios;
mod support;
