use chordforge::api::RankedChord;
use chordforge::mapping::{display_key, ChordMap};
use chordforge::pivot::PivotReport;
use chordforge::scorer::ComfortFeature;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use strum::IntoEnumIterator;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, cols: impl IntoIterator<Item = usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn chords(ranked: &[RankedChord], show_features: bool) {
    let mut table = new_table();

    let mut header = vec![
        Cell::new("#"),
        Cell::new("Chord").add_attribute(Attribute::Bold),
        Cell::new("Comfort").fg(Color::Cyan),
    ];
    if show_features {
        header.extend(ComfortFeature::iter().map(|f| Cell::new(f.short_label())));
    }
    table.set_header(header);
    align_right(&mut table, [0, 2]);

    for (i, r) in ranked.iter().enumerate() {
        let mut row = vec![
            Cell::new(i),
            Cell::new(r.chord.to_string()),
            Cell::new(r.comfort).fg(Color::Cyan),
        ];
        if show_features {
            row.extend(r.features.iter().map(|&on| {
                let cell = Cell::new(if on { "x" } else { "" });
                cell.set_alignment(CellAlignment::Center)
            }));
        }
        table.add_row(row);
    }
    println!("{}", table);
}

pub fn mappings(map: &ChordMap) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("#"),
        Cell::new("Key").add_attribute(Attribute::Bold),
        Cell::new("Chord"),
        Cell::new("Bits"),
    ]);
    align_right(&mut table, [0]);

    for (i, m) in map.sorted_by_key().into_iter().enumerate() {
        table.add_row(vec![
            Cell::new(i),
            Cell::new(display_key(&m.key)).add_attribute(Attribute::Bold),
            Cell::new(m.chord.to_string()),
            Cell::new(m.chord.encode()),
        ]);
    }
    println!("{}", table);
}

pub fn pivots(report: &PivotReport, top: usize, sample: usize) {
    let shown = report.top(top);
    println!(
        "\n🔁 === TOP {} PIVOTS ({} words scanned) === 🔁",
        shown.len(),
        report.word_count
    );

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("#"),
        Cell::new("Pivot").add_attribute(Attribute::Bold),
        Cell::new("Count").fg(Color::Green),
        Cell::new("Words"),
    ]);
    align_right(&mut table, [0, 2]);

    for (i, stat) in shown.iter().enumerate() {
        let mut examples: Vec<&str> = Vec::new();
        for w in &stat.words {
            if examples.len() >= sample {
                break;
            }
            if !examples.contains(&w.as_str()) {
                examples.push(w);
            }
        }
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&stat.pivot).add_attribute(Attribute::Bold),
            Cell::new(stat.occurrences()).fg(Color::Green),
            Cell::new(examples.join(", ")),
        ]);
    }
    println!("{}", table);
}
