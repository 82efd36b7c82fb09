//! Headless runs of the `crombo` binary.

mod common;
mod headless_test;
mod navigation_test;
