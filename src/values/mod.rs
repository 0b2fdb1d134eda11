pub mod binder;
pub mod error;
pub mod nested;
pub mod normalize;
pub mod submission;
pub mod tracker;
