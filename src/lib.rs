pub mod analysis;
pub mod command;
pub mod constants;
pub mod helpers;
pub mod interfaces;
