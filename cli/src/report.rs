use salary_analyzer::LanguageStatistics;

pub const HEADER: [&str; 4] = [
    "Programming language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Column of `HEADER` holding the processed vacancy count
const PROCESSED_COLUMN: usize = 2;

/// A console table with single line box borders.
/// The first row is the header and is ruled off from the rest.
#[derive(Debug, Clone)]
pub struct Table {
    title: String,
    rows: Vec<Vec<String>>,
    right_aligned: Vec<usize>,
}

impl Table {
    pub fn new(title: impl Into<String>, header: Vec<String>) -> Self {
        Self {
            title: title.into(),
            rows: vec![header],
            right_aligned: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn justify_right(mut self, column: usize) -> Self {
        self.right_aligned.push(column);
        self
    }

    fn column_widths(&self) -> Vec<usize> {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        (0..columns)
            .map(|column| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(column))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn border(widths: &[usize], left: char, junction: char, right: char) -> String {
        let segments = widths
            .iter()
            .map(|width| "─".repeat(width + 2))
            .collect::<Vec<_>>()
            .join(&junction.to_string());
        format!("{}{}{}", left, segments, right)
    }

    fn line(&self, row: &[String], widths: &[usize]) -> String {
        let cells = widths
            .iter()
            .enumerate()
            .map(|(column, width)| {
                let cell = row.get(column).map(String::as_str).unwrap_or("");
                if self.right_aligned.contains(&column) {
                    format!(" {:>width$} ", cell, width = width)
                } else {
                    format!(" {:<width$} ", cell, width = width)
                }
            })
            .collect::<Vec<_>>()
            .join("│");
        format!("│{}│", cells)
    }

    /// The title replaces the start of the top border, it is left out when it doesn't fit
    fn top_border(&self, widths: &[usize]) -> String {
        let border = Self::border(widths, '┌', '┬', '┐');
        let border_len = border.chars().count();
        let title_len = self.title.chars().count();
        if title_len == 0 || title_len > border_len - 2 {
            return border;
        }
        let mut top = String::from('┌');
        top.push_str(&self.title);
        top.extend(border.chars().skip(1 + title_len));
        top
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut lines = Vec::with_capacity(self.rows.len() + 3);
        lines.push(self.top_border(&widths));
        for (index, row) in self.rows.iter().enumerate() {
            lines.push(self.line(row, &widths));
            if index == 0 && self.rows.len() > 1 {
                lines.push(Self::border(&widths, '├', '┼', '┤'));
            }
        }
        lines.push(Self::border(&widths, '└', '┴', '┘'));
        lines.join("\n")
    }
}

pub fn statistics_table(title: String, rows: &[(String, LanguageStatistics)]) -> Table {
    let header = HEADER.iter().map(|label| label.to_string()).collect();
    let mut table = Table::new(title, header).justify_right(PROCESSED_COLUMN);
    for (language, statistics) in rows {
        table.push_row(vec![
            language.clone(),
            statistics.vacancies_found.to_string(),
            statistics.vacancies_processed.to_string(),
            statistics.average_salary.to_string(),
        ]);
    }
    table
}
