use crate::reports;
use chordforge::api;
use chordforge::config::Config;
use chordforge::error::CfResult;

pub fn run(config: &Config) -> CfResult<()> {
    let map = api::build_chord_map(config)?;
    reports::print_mapping_listing(&map);
    Ok(())
}
