//! Text rendering for the client list and sort state

use std::io::{self, Write};

use roster_core::query::sorting::{SortOption, sort_option, sort_options};
use roster_model::{ActiveSortList, Client, FieldPriorityOrder, SortCriterion};

const DATE_FORMAT: &str = "%Y-%m-%d";
const HEADERS: [&str; 7] = [
    "ID",
    "Name",
    "Email",
    "Type",
    "Status",
    "Created On",
    "Updated On",
];

fn cells(client: &Client) -> [String; 7] {
    [
        client.id.to_string(),
        client.name.clone(),
        client.email.clone(),
        client.kind.to_string(),
        client.status.to_string(),
        client.created_at.format(DATE_FORMAT).to_string(),
        client.updated_at.format(DATE_FORMAT).to_string(),
    ]
}

pub fn table(out: &mut impl Write, rows: &[Client]) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "No clients found");
    }

    let body: Vec<[String; 7]> = rows.iter().map(cells).collect();
    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    write_row(out, &header, &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(out, &rule, &widths)?;
    for row in &body {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row(
    out: &mut impl Write,
    row: &[String],
    widths: &[usize],
) -> io::Result<()> {
    let line: Vec<String> = row
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    writeln!(out, "{}", line.join("  ").trim_end())
}

pub fn cards(out: &mut impl Write, rows: &[Client]) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "No clients found");
    }

    for (i, client) in rows.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{} (#{})", client.name, client.id)?;
        writeln!(out, "  Email:   {}", client.email)?;
        writeln!(out, "  Type:    {}", client.kind)?;
        writeln!(out, "  Status:  {}", client.status)?;
        writeln!(
            out,
            "  Created: {}",
            client.created_at.format(DATE_FORMAT)
        )?;
        writeln!(
            out,
            "  Updated: {}",
            client.updated_at.format(DATE_FORMAT)
        )?;
    }
    Ok(())
}

pub fn json(out: &mut impl Write, rows: &[Client]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, rows)?;
    writeln!(out)?;
    Ok(())
}

/// "Name: A-Z" style label for a criterion
pub fn criterion_label(criterion: &SortCriterion) -> String {
    let option = sort_option(criterion.field);
    format!("{}: {}", option.label, option.choice_label(criterion.direction))
}

pub fn active_sorts(
    out: &mut impl Write,
    active: &ActiveSortList,
) -> io::Result<()> {
    if active.is_empty() {
        return writeln!(out, "No active sorts");
    }
    for (i, criterion) in active.iter().enumerate() {
        writeln!(
            out,
            "{}. {:<16} {}",
            i,
            criterion.key(),
            criterion_label(criterion)
        )?;
    }
    Ok(())
}

pub fn priority(
    out: &mut impl Write,
    order: &FieldPriorityOrder,
    active: &ActiveSortList,
) -> io::Result<()> {
    for (i, field) in order.iter().enumerate() {
        let option = sort_option(*field);
        let marker = match active.get(*field) {
            Some(criterion) => format!("  [{}]", criterion.direction),
            None => String::new(),
        };
        writeln!(
            out,
            "{}. {:<10} {}{marker}",
            i,
            field.as_str(),
            option.label
        )?;
    }
    Ok(())
}

pub fn options(
    out: &mut impl Write,
    order: &FieldPriorityOrder,
    active: &ActiveSortList,
) -> io::Result<()> {
    for option in sort_options(order) {
        writeln!(out, "{}", option_line(&option, active))?;
    }
    Ok(())
}

fn option_line(option: &SortOption, active: &ActiveSortList) -> String {
    let choices: Vec<String> = option
        .choices
        .iter()
        .map(|choice| {
            let key = SortCriterion::new(option.field, choice.direction).key();
            let mark = if active.contains(option.field, choice.direction) {
                "*"
            } else {
                " "
            };
            format!("{mark}{} ({key})", choice.label)
        })
        .collect();
    format!("{:<12} {}", option.label, choices.join("  "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::demo::mock_clients;
    use roster_model::{SortDirection, SortField};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn table_aligns_columns() {
        let clients = mock_clients();
        let text = render(|out| table(out, &clients[..2]));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID  Name       Email"));
        assert!(lines[2].starts_with("20  John Doe   johndoe@email.com"));
        assert!(lines[3].ends_with("2023-02-10  2023-05-15"));
    }

    #[test]
    fn empty_list_says_so() {
        assert_eq!(render(|out| table(out, &[])), "No clients found\n");
        assert_eq!(render(|out| cards(out, &[])), "No clients found\n");
    }

    #[test]
    fn cards_show_every_attribute() {
        let clients = mock_clients();
        let text = render(|out| cards(out, &clients[2..3]));
        assert_eq!(
            text,
            "Acme Corp (#22)\n  \
             Email:   info@acme.com\n  \
             Type:    Company\n  \
             Status:  active\n  \
             Created: 2023-03-05\n  \
             Updated: 2023-07-01\n"
        );
    }

    #[test]
    fn criterion_labels_use_option_wording() {
        assert_eq!(
            criterion_label(&SortCriterion::desc(SortField::UpdatedAt)),
            "Updated On: Newest First"
        );
        assert_eq!(
            criterion_label(&SortCriterion::asc(SortField::Name)),
            "Name: A-Z"
        );
    }

    #[test]
    fn options_mark_active_choices() {
        let mut active = ActiveSortList::new();
        active.toggle(SortField::Name, SortDirection::Descending);
        let text = render(|out| {
            options(out, &FieldPriorityOrder::default(), &active)
        });
        let first = text.lines().next().unwrap();
        assert_eq!(first, "Name          A-Z (name-asc)  *Z-A (name-desc)");
    }
}
