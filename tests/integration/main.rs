//! Integration tests for cuesheet

mod helpers;

mod cli_test;
mod playback_test;
mod store_test;
mod timing_test;
