// ChatScribe - ui/panels/mod.rs

pub mod about;
pub mod drop_zone;
pub mod summary;
pub mod transcript;
