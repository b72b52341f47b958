//! Test doubles for aligner integration

mod mock;

pub use mock::{install_fake_tool, MockRunner};
