//! Document action module

pub mod action;

pub use action::DocumentAction;
