//! Domain types and pure helpers for the QuillQuest backend.
//!
//! No IO lives here. The crate holds the wire entities returned to the
//! browser, the prompt templates sent to the text model, and the
//! best-effort extraction of JSON objects embedded in free-form model
//! output.

pub mod character;
pub mod extract;
pub mod prompts;
pub mod scene;
pub mod world;
pub mod writing;

pub use character::Character;
pub use scene::ScenePainting;
pub use world::World;
pub use writing::{Continuation, WritingPrompt};
