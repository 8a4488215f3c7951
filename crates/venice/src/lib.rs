//! Venice.ai client library for QuillQuest.
//!
//! Wraps the two Venice primitives (chat-style text completion and image
//! generation) behind [`client::VeniceClient`], exposes them through the
//! [`provider::GenerationProvider`] trait so callers can swap in the
//! scripted [`mock::MockProvider`], and composes them into the five
//! domain operations in [`studio::StoryStudio`].

pub mod client;
pub mod error;
pub mod mock;
pub mod provider;
pub mod studio;

pub use client::{ImageOptions, TextOptions, VeniceClient, VeniceConfig};
pub use error::VeniceError;
pub use provider::GenerationProvider;
pub use studio::{Generated, StoryStudio};
