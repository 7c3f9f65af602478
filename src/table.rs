/// Grid table rendering. Pure presentation: takes strings, returns a table.
///
/// Layout: every cell padded to its column width with one space of margin,
/// a `=`-filled separator under the header, and a `-`-filled border row
/// above the header and after every data row.

/// Render `rows` under `headers` as a grid table. Column widths follow the
/// widest cell; rows shorter than the header are padded with empty cells.
pub fn grid(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(2 * rows.len() + 4);
    lines.push(rule(&widths, '-'));
    lines.push(cells_line(&widths, headers));
    lines.push(rule(&widths, '='));
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        lines.push(cells_line(&widths, &cells));
        lines.push(rule(&widths, '-'));
    }
    if rows.is_empty() {
        lines.push(rule(&widths, '-'));
    }
    lines.join("\n")
}

fn rule(widths: &[usize], fill: char) -> String {
    let mut line = String::from("+");
    for &w in widths {
        line.extend(std::iter::repeat(fill).take(w + 2));
        line.push('+');
    }
    line
}

fn cells_line(widths: &[usize], cells: &[&str]) -> String {
    let mut line = String::from("|");
    for (i, &w) in widths.iter().enumerate() {
        let cell = cells.get(i).copied().unwrap_or("");
        line.push(' ');
        line.push_str(cell);
        for _ in cell.chars().count()..w {
            line.push(' ');
        }
        line.push_str(" |");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_single_row() {
        let headers = ["Country Name", "Capital", "Flag URL"];
        let rows = vec![row(&[
            "Testland",
            "Test City",
            "https://flagcdn.com/w320/test.png",
        ])];
        let expected = "\
+--------------+-----------+-----------------------------------+
| Country Name | Capital   | Flag URL                          |
+==============+===========+===================================+
| Testland     | Test City | https://flagcdn.com/w320/test.png |
+--------------+-----------+-----------------------------------+";
        assert_eq!(grid(&headers, &rows), expected);
    }

    #[test]
    fn test_multiple_rows_bordered_individually() {
        let headers = ["Country Name", "Capital", "Flag URL"];
        let rows = vec![
            row(&["Testland", "Test City", "https://flagcdn.com/w320/test.png"]),
            row(&["X", "N/A", "N/A"]),
        ];
        let expected = "\
+--------------+-----------+-----------------------------------+
| Country Name | Capital   | Flag URL                          |
+==============+===========+===================================+
| Testland     | Test City | https://flagcdn.com/w320/test.png |
+--------------+-----------+-----------------------------------+
| X            | N/A       | N/A                               |
+--------------+-----------+-----------------------------------+";
        assert_eq!(grid(&headers, &rows), expected);
    }

    #[test]
    fn test_headers_set_minimum_width() {
        let table = grid(&["Long Header Name", "B"], &[row(&["x", "y"])]);
        let first = table.lines().next().unwrap();
        assert_eq!(first, "+------------------+---+");
    }

    #[test]
    fn test_short_row_padded_with_empty_cells() {
        let table = grid(&["A", "B"], &[row(&["x"])]);
        assert!(table.contains("| x | "));
    }

    #[test]
    fn test_no_rows_still_renders_header() {
        let table = grid(&["A"], &[]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines, vec!["+---+", "| A |", "+===+", "+---+"]);
    }
}
