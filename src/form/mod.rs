pub mod element_model;
pub mod identity;
pub mod path;
pub mod registry;
