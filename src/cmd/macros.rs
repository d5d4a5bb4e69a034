use chordforge::api;
use chordforge::config::Config;
use chordforge::error::CfResult;
use chordforge::firmware::render_macro_switch;

pub fn run(config: &Config) -> CfResult<()> {
    let map = api::build_chord_map(config)?;
    let macros = api::load_macros(&config.tables, &map)?;
    print!("{}", render_macro_switch(&macros));
    Ok(())
}
