//! Test utilities for pipeline and conversation tests.
//!
//! This module provides mock collaborators that count calls and record
//! what they were asked to do.

pub mod mocks;

#[allow(unused_imports)]
pub use mocks::{
    MockAssistantBackend, MockAssistantSession, MockParser, MockSynthesizer, ObservedState,
    image_for, scene,
};
