pub mod dict;
pub mod document;
pub mod profile;
pub mod select;
pub mod settings;
