//! Shell behaviour through the public library API.

mod commands_test;
mod config_test;
mod editing_test;
