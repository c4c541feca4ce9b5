//! Core NeuralLink library (interaction state machines, view composition, config).

pub mod config;
pub mod core;
pub mod view;
