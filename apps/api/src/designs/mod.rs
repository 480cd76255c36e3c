// Design Registry and the designs themselves. Each design is a pure render
// function mapping the same inputs (profile, settings, section list) onto a
// distinct HTML layout; the registry resolves a design id to its render
// function and metadata, falling back to the default on unknown ids.

pub mod creative;
pub mod elegant;
pub mod handlers;
pub mod html;
pub mod minimal;
pub mod professional;
pub mod registry;
pub mod studio;

pub use registry::{DesignMetadata, DesignRegistry, RenderContext, RenderFn, DEFAULT_DESIGN};
