use crate::error::Result;
use crate::models::{LanguageStatistics, Report};

const HEADERS: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
}

pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => format_text(report),
        OutputFormat::Markdown => format_markdown(report),
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
    })
}

fn row(language: &str, stats: &LanguageStatistics) -> [String; 4] {
    [
        language.to_string(),
        stats
            .vacancies_found
            .map(|found| found.to_string())
            .unwrap_or_else(|| "-".to_string()),
        stats.vacancies_processed.to_string(),
        stats.average_salary.to_string(),
    ]
}

fn title(report: &Report) -> String {
    format!("{} {}", report.source, report.city)
}

pub fn format_text(report: &Report) -> String {
    let rows: Vec<[String; 4]> = report
        .entries
        .iter()
        .map(|e| row(&e.language, &e.statistics))
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = format!(
        "+{}+\n",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );
    let line = |cells: &[String]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let pad = width - cell.chars().count();
                format!(" {}{} ", cell, " ".repeat(pad))
            })
            .collect();
        format!("|{}|\n", padded.join("|"))
    };

    let mut output = String::new();
    output.push_str(&format!("{}\n", title(report)));
    output.push_str(&separator);
    output.push_str(&line(&HEADERS.map(str::to_string)[..]));
    output.push_str(&separator);
    for cells in &rows {
        output.push_str(&line(&cells[..]));
    }
    output.push_str(&separator);
    output
}

pub fn format_markdown(report: &Report) -> String {
    let mut output = String::new();

    output.push_str(&format!("## {}\n\n", title(report)));
    output.push_str(&format!("| {} |\n", HEADERS.join(" | ")));
    output.push_str("|----------|-----------------|---------------------|----------------|\n");

    for entry in &report.entries {
        output.push_str(&format!(
            "| {} |\n",
            row(&entry.language, &entry.statistics).join(" | ")
        ));
    }

    output.push_str(&format!(
        "\n*Generated on {}*\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> Report {
        Report::ranked(
            "headhunter",
            "Moscow",
            vec![
                (
                    "Go".to_string(),
                    LanguageStatistics {
                        vacancies_found: Some(1200),
                        vacancies_processed: 400,
                        average_salary: 250000,
                    },
                ),
                (
                    "C++".to_string(),
                    LanguageStatistics {
                        vacancies_found: None,
                        vacancies_processed: 12,
                        average_salary: 310000,
                    },
                ),
            ],
        )
    }

    #[test]
    fn test_text_table() {
        let text = format_text(&report());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "headhunter Moscow");
        assert!(lines[2].starts_with("| Language | Vacancies found |"));
        assert_eq!(
            lines[4],
            "| C++      | -               | 12                  | 310000         |"
        );
        assert_eq!(
            lines[5],
            "| Go       | 1200            | 400                 | 250000         |"
        );
        assert_eq!(lines[1], lines[6]);
    }

    #[test]
    fn test_markdown_rows() {
        let markdown = format_markdown(&report());
        assert!(markdown.starts_with("## headhunter Moscow"));
        assert!(markdown.contains("| C++ | - | 12 | 310000 |"));
        assert!(markdown.contains("| Go | 1200 | 400 | 250000 |"));
    }

    #[test]
    fn test_json_output() {
        let json = render(&report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["source"], "headhunter");
        assert_eq!(value["entries"][0]["language"], "C++");
        assert!(value["entries"][0]["vacancies_found"].is_null());
        assert_eq!(value["entries"][1]["vacancies_found"], 1200);
    }
}
