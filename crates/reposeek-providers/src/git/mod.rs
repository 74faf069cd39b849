//! Repository cloning

pub mod cloner;

pub use cloner::GitCliCloner;
