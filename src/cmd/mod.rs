pub mod chords;
pub mod firmware;
pub mod macros;
pub mod mappings;
pub mod pivots;
