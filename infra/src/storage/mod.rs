//! Storage module - uploaded image files

pub mod local;

#[cfg(test)]
mod tests;

pub use local::LocalImageStore;
