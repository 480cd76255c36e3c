pub mod content;
pub mod profile;
pub mod settings;
