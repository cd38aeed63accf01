use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use abp_model::{InterventionRef, Specialty};

pub fn print_specialties(specialties: &[Specialty]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Specialty"),
        header_cell("Interventions"),
        header_cell("No ABP"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    let mut total = 0usize;
    let mut total_without = 0usize;
    for specialty in specialties {
        let without = specialty
            .interventions
            .iter()
            .filter(|i| i.no_prophylaxis)
            .count();
        total += specialty.interventions.len();
        total_without += without;
        table.add_row(vec![
            id_cell(&specialty.id),
            Cell::new(&specialty.name),
            Cell::new(specialty.interventions.len()),
            count_cell(without),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} specialties", specialties.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total).add_attribute(Attribute::Bold),
        count_cell(total_without).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_interventions(matches: &[InterventionRef<'_>]) {
    if matches.is_empty() {
        println!("No matching interventions.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Intervention"),
        header_cell("Specialty"),
        header_cell("Molecule"),
        header_cell("Strength"),
    ]);
    apply_table_style(&mut table);
    for found in matches {
        let intervention = found.intervention;
        let molecule = match &intervention.protocol {
            Some(protocol) => Cell::new(&protocol.molecule),
            None => dim_cell("no ABP"),
        };
        table.add_row(vec![
            id_cell(&intervention.id),
            Cell::new(&intervention.name),
            Cell::new(&found.specialty.name),
            molecule,
            Cell::new(&intervention.recommendation_strength),
        ]);
    }
    println!("{table}");
}

pub fn print_intervention(found: &InterventionRef<'_>) {
    let intervention = found.intervention;
    let mut table = Table::new();
    apply_detail_style(&mut table);
    add_field(&mut table, "Id", id_cell(&intervention.id));
    add_field(&mut table, "Intervention", Cell::new(&intervention.name));
    add_field(&mut table, "Specialty", Cell::new(&found.specialty.name));
    match &intervention.protocol {
        Some(protocol) => {
            add_field(&mut table, "Molecule", Cell::new(&protocol.molecule));
            add_field(&mut table, "Dosage", Cell::new(&protocol.dosage));
            add_field(&mut table, "Reinjection", optional_cell(protocol.reinjection.as_deref()));
            add_field(&mut table, "Duration", Cell::new(&protocol.duration));
        }
        None => add_field(
            &mut table,
            "Protocol",
            Cell::new("No prophylaxis").fg(Color::Yellow),
        ),
    }
    for (idx, alternative) in intervention.allergy_alternatives.iter().enumerate() {
        let mut text = format!("{} {}", alternative.molecule, alternative.dosage);
        if let Some(reinjection) = &alternative.reinjection {
            text.push_str(&format!(" (reinjection: {reinjection})"));
        }
        add_field(&mut table, &format!("Allergy #{}", idx + 1), Cell::new(text));
    }
    add_field(
        &mut table,
        "Strength",
        Cell::new(&intervention.recommendation_strength),
    );
    add_field(
        &mut table,
        "Source",
        Cell::new(format!(
            "p. {} - {}",
            intervention.source_page, intervention.source_table
        )),
    );
    add_field(&mut table, "Notes", optional_cell(intervention.notes.as_deref()));
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_detail_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn add_field(table: &mut Table, label: &str, value: Cell) {
    table.add_row(vec![header_cell(label), value]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn id_cell(id: &str) -> Cell {
    Cell::new(id)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        dim_cell(count)
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(text) => Cell::new(text),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
