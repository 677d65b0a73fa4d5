pub mod update;
pub mod validate;
