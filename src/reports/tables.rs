use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use gearforge::filter::InventoryStats;
use gearforge::matching::MatchCriteria;
use gearforge::model::{Effect, Item, SlotCategory};
use gearforge::optimizer::OptimizationResult;
use gearforge::presets::PresetBook;
use gearforge::util::format_value;

/// Effects shown per row before collapsing into "+N more".
const MAX_EFFECTS_COMPACT: usize = 4;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn compact_effects(effects: &[Effect]) -> String {
    let mut parts: Vec<String> = effects
        .iter()
        .take(MAX_EFFECTS_COMPACT)
        .map(|e| format!("{}: {}", e.name, format_value(e.value)))
        .collect();
    if effects.len() > MAX_EFFECTS_COMPACT {
        parts.push(format!("+{} more", effects.len() - MAX_EFFECTS_COMPACT));
    }
    parts.join(" • ")
}

pub fn stats(s: &InventoryStats) {
    let mut table = new_table();
    let mut header = vec![
        Cell::new("Items").add_attribute(Attribute::Bold),
        Cell::new("Commander"),
        Cell::new("Castellan"),
    ];
    header.extend(SlotCategory::all().map(|slot| Cell::new(slot.to_string())));
    table.add_row(header);

    let mut row = vec![
        Cell::new(s.total).add_attribute(Attribute::Bold),
        Cell::new(s.commander),
        Cell::new(s.castellan),
    ];
    row.extend(SlotCategory::all().map(|slot| Cell::new(s.slot_count(slot))));
    table.add_row(row);
    println!("\n{}", table);
}

pub fn items(rows: &[&Item], filtered: usize, page: usize, total_pages: usize) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Type").add_attribute(Attribute::Bold),
        Cell::new("Side"),
        Cell::new("Effects"),
    ]);
    for item in rows {
        table.add_row(vec![
            Cell::new(&item.slot).add_attribute(Attribute::Bold),
            Cell::new(&item.side),
            Cell::new(compact_effects(&item.effects)),
        ]);
    }
    println!("\n{}", table);
    println!(
        "Showing {} of {} filtered items (page {}/{})",
        rows.len(),
        filtered,
        page,
        total_pages
    );
}

pub fn result(res: &OptimizationResult) {
    let criteria = match &res.criteria {
        MatchCriteria::Keywords { label, .. } => format!("{} • keywords", label),
        MatchCriteria::FreeText { target_label } => format!("target \"{}\"", target_label),
    };
    println!(
        "\n=== 🏆 {} • {} • {}: {} ===",
        res.side,
        criteria,
        res.strategy,
        res.phrases.join(", ")
    );

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Slot").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Matched effects"),
        Cell::new("Unknown"),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for slot in &res.slots {
        let name = Cell::new(slot.slot.to_string()).add_attribute(Attribute::Bold);
        let Some(pick) = &slot.pick else {
            table.add_row(vec![
                name,
                Cell::new("missing").fg(Color::Red),
                Cell::new("No items available for this slot."),
                Cell::new(""),
            ]);
            continue;
        };

        let matched = if pick.contributions.is_empty() {
            "No matching effects.".to_string()
        } else {
            pick.contributions
                .iter()
                .map(|c| {
                    format!(
                        "{} (match: {}) {}",
                        c.effect_name,
                        c.matched_by,
                        format_value(c.value)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        };
        let unknown = if pick.unknown_ignored > 0 {
            pick.unknown_ignored.to_string()
        } else {
            String::new()
        };

        table.add_row(vec![
            name,
            Cell::new(format_value(pick.score)).fg(Color::Cyan),
            Cell::new(matched),
            Cell::new(unknown),
        ]);
    }

    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(format_value(res.total))
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
    ]);
    println!("{}", table);

    if !res.warnings.is_empty() {
        println!("⚠️  {}", res.warnings.join(" • "));
    }
}

pub fn presets(book: &PresetBook) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Side").add_attribute(Attribute::Bold),
        Cell::new("Mode"),
        Cell::new("Keywords"),
    ]);
    for (side, preset) in book.iter() {
        table.add_row(vec![
            Cell::new(side.to_string()).add_attribute(Attribute::Bold),
            Cell::new(&preset.mode),
            Cell::new(preset.keywords.join(", ")),
        ]);
    }
    println!("\n{}", table);
}
