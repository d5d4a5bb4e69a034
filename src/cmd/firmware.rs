use chordforge::api;
use chordforge::config::Config;
use chordforge::error::CfResult;
use chordforge::firmware::render_chord_table;

pub fn run(config: &Config) -> CfResult<()> {
    let map = api::build_chord_map(config)?;
    let scancodes = api::load_scancodes(&config.tables)?;
    print!("{}", render_chord_table(&map, &scancodes)?);
    Ok(())
}
