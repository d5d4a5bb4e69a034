pub mod api;
pub mod chord;
pub mod config;
pub mod consts;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod firmware;
pub mod keycodes;
pub mod macros;
pub mod mapping;
pub mod pivot;
pub mod scorer;
pub mod tables;
// cmd and reports are binary modules (in main.rs or distinct files).
