use colored::Colorize;

/// Print rows under aligned column headers
pub fn format_table(headers: Vec<&str>, rows: Vec<Vec<String>>) {
    let col_widths = column_widths(&headers, &rows);

    let header_line = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:width$}", h, width = col_widths[i]))
        .collect::<Vec<_>>()
        .join(" | ");

    println!("{}", header_line.bold());
    println!("{}", "-".repeat(header_line.len()));

    for row in rows {
        let row_line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:width$}", cell, width = col_widths.get(i).copied().unwrap_or(20)))
            .collect::<Vec<_>>()
            .join(" | ");
        println!("{}", row_line);
    }
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .fold(header.len(), usize::max)
        })
        .collect()
}

pub fn format_json<T: serde::Serialize>(data: &T) -> String {
    match serde_json::to_string_pretty(data) {
        Ok(json) => json,
        Err(_) => "Unable to format as JSON".to_string(),
    }
}

/// Print a single record as key-value pairs
pub fn format_record(data: Vec<(&str, String)>) {
    let max_key_len = data.iter().map(|(k, _)| k.len()).max().unwrap_or(20);

    for (key, value) in data {
        let padded_key = format!("{:width$}", key, width = max_key_len);
        println!("  {}: {}", padded_key.bright_cyan(), value);
    }
}

pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

pub fn print_header(text: &str) {
    println!();
    println!("{}", text.bold().bright_cyan());
    println!("{}", "=".repeat(text.len()));
    println!();
}

pub fn print_section(text: &str) {
    println!();
    println!("{}", text.bold().bright_white());
    println!("{}", "-".repeat(text.len()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_widths_fit_longest_cell() {
        let rows = vec![
            vec!["1".to_string(), "Vaccine: Rabies".to_string()],
            vec!["12".to_string(), "Toy".to_string()],
        ];

        assert_eq!(column_widths(&["ID", "Description"], &rows), vec![2, 15]);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(150.0), "150.00");
        assert_eq!(format_amount(12.5), "12.50");
    }
}
