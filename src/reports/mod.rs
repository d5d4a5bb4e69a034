mod tables;

pub use self::tables::{
    chords as print_chord_listing, mappings as print_mapping_listing,
    pivots as print_pivot_report,
};
