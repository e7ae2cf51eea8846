//! Mapping between sheet rows and roster records.

use crate::config::CellPolicy;
use crate::core::record::{Roster, StudentRecord};
use crate::error::{Error, Result};
use crate::roster::cell::{Cell, populated_width};
use tracing::{debug, warn};

/// Columns a data row must populate to be loaded.
pub const REQUIRED_COLUMNS: usize = 7;

/// Header row of the adjusted output.
pub const OUTPUT_HEADER: [&str; 8] = [
    "学号",
    "学生",
    "性别",
    "客观题得分",
    "主观题得分",
    "对分易总分",
    "平时分",
    "总分",
];

/// Numeric input columns by position.
const NUMERIC_COLUMNS: [(usize, &str); 4] = [
    (3, "ObjectiveScore"),
    (4, "SubjectiveScore"),
    (5, "PeerReviewTotal"),
    (6, "DailyScore"),
];

/// Build a roster from raw sheet rows.
///
/// The first row is a header and is skipped, as is every row with fewer
/// than [`REQUIRED_COLUMNS`] populated cells.
///
/// # Errors
///
/// Returns [`Error::MalformedCell`] for an unparseable numeric cell when
/// `policy` is [`CellPolicy::Reject`].
pub fn records_from_rows(rows: &[Vec<Cell>], policy: CellPolicy) -> Result<Roster> {
    let mut records = Vec::new();

    for (index, row) in rows.iter().enumerate().skip(1) {
        let line = index + 1;
        if populated_width(row) < REQUIRED_COLUMNS {
            debug!(row = line, "skipping short row");
            continue;
        }

        let mut numbers = [0.0; NUMERIC_COLUMNS.len()];
        for (slot, (column, name)) in numbers.iter_mut().zip(NUMERIC_COLUMNS) {
            *slot = match row[column].as_number() {
                Ok(value) => value,
                Err(e) => match policy {
                    CellPolicy::Coerce => {
                        warn!(row = line, column = name, raw = %e.raw, "non-numeric cell read as 0");
                        0.0
                    }
                    CellPolicy::Reject => {
                        return Err(Error::MalformedCell {
                            row: line,
                            column: name,
                            value: e.raw,
                        });
                    }
                },
            };
        }
        let [objective, subjective, peer_review, daily] = numbers;

        records.push(StudentRecord::new(
            row[0].to_string(),
            row[1].to_string(),
            row[2].to_string(),
            objective,
            subjective,
            peer_review,
            daily,
        ));
    }

    Ok(Roster::new(records))
}

/// Render a roster as output rows, header first, in roster order.
#[must_use]
pub fn rows_from_roster(roster: &Roster) -> Vec<Vec<Cell>> {
    let mut rows = Vec::with_capacity(roster.len() + 1);
    rows.push(OUTPUT_HEADER.iter().map(|h| Cell::text(*h)).collect());

    for record in roster.records() {
        rows.push(vec![
            Cell::text(record.id.as_str()),
            Cell::text(record.name.as_str()),
            Cell::text(record.gender.as_str()),
            Cell::Number(record.objective_score),
            Cell::Number(record.subjective_score),
            Cell::Number(record.peer_review_total()),
            Cell::Text(format!("{:.0}", record.daily_score())),
            Cell::Text(format!("{:.1}", record.final_score())),
        ]);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> Vec<Cell> {
        ["ID", "Name", "Gender", "Obj", "Subj", "Peer", "Daily"]
            .into_iter()
            .map(Cell::text)
            .collect()
    }

    fn data_row(id: &str, peer: Cell, daily: Cell) -> Vec<Cell> {
        vec![
            Cell::text(id),
            Cell::text("李雷"),
            Cell::text("男"),
            Cell::Number(30.0),
            Cell::text("40"),
            peer,
            daily,
        ]
    }

    #[test]
    fn loads_rows_after_header() {
        let rows = vec![
            header(),
            data_row("1001", Cell::Number(80.0), Cell::Number(70.0)),
            data_row("1002", Cell::text("65.5"), Cell::text("90")),
        ];
        let roster = records_from_rows(&rows, CellPolicy::Coerce).unwrap();

        assert_eq!(roster.len(), 2);
        let first = &roster.records()[0];
        assert_eq!(first.id, "1001");
        assert_eq!(first.name, "李雷");
        assert!((first.subjective_score - 40.0).abs() < 1e-12);
        assert!((first.final_score() - (32.0 + 42.0)).abs() < 1e-9);

        let second = &roster.records()[1];
        assert!((second.peer_review_total() - 65.5).abs() < 1e-12);
    }

    #[test]
    fn numeric_ids_keep_integer_form() {
        let mut row = data_row("", Cell::Number(80.0), Cell::Number(70.0));
        row[0] = Cell::Number(2_021_001.0);
        let roster = records_from_rows(&[header(), row], CellPolicy::Coerce).unwrap();
        assert_eq!(roster.records()[0].id, "2021001");
    }

    #[test]
    fn short_rows_are_skipped() {
        let mut short = data_row("1001", Cell::Number(80.0), Cell::Empty);
        short.push(Cell::Empty);
        let rows = vec![header(), short, vec![Cell::text("note")]];

        let roster = records_from_rows(&rows, CellPolicy::Coerce).unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn header_only_yields_empty_roster() {
        let roster = records_from_rows(&[header()], CellPolicy::Coerce).unwrap();
        assert!(roster.is_empty());
        let roster = records_from_rows(&[], CellPolicy::Coerce).unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn coerce_policy_reads_bad_numbers_as_zero() {
        let rows = vec![header(), data_row("1001", Cell::text("n/a"), Cell::Number(70.0))];
        let roster = records_from_rows(&rows, CellPolicy::Coerce).unwrap();

        let record = &roster.records()[0];
        assert!(record.peer_review_total().abs() < 1e-12);
        assert!((record.final_score() - 42.0).abs() < 1e-9);
    }

    #[test]
    fn coerce_policy_reads_padded_numbers_as_zero() {
        let rows = vec![header(), data_row("1001", Cell::text(" 80 "), Cell::Number(70.0))];
        let roster = records_from_rows(&rows, CellPolicy::Coerce).unwrap();

        assert!(roster.records()[0].peer_review_total().abs() < 1e-12);
    }

    #[test]
    fn reject_policy_reports_the_cell() {
        let rows = vec![
            header(),
            data_row("1001", Cell::Number(80.0), Cell::Number(70.0)),
            data_row("1002", Cell::Number(80.0), Cell::text("absent")),
        ];
        let err = records_from_rows(&rows, CellPolicy::Reject).unwrap_err();

        match err {
            Error::MalformedCell { row, column, value } => {
                assert_eq!(row, 3);
                assert_eq!(column, "DailyScore");
                assert_eq!(value, "absent");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn output_rows_format_scores() {
        let roster = Roster::new(vec![StudentRecord::new(
            "1001", "韩梅梅", "女", 30.0, 40.5, 50.0, 55.0 / 0.6 + 20.0 / 0.6,
        )]);
        let rows = rows_from_roster(&roster);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], Cell::text("学号"));
        assert_eq!(rows[0][7], Cell::text("总分"));

        let row = &rows[1];
        assert_eq!(row[0], Cell::text("1001"));
        assert_eq!(row[4], Cell::Number(40.5));
        assert_eq!(row[5], Cell::Number(50.0));
        assert_eq!(row[6], Cell::text("125"));
        assert_eq!(row[7], Cell::text("95.0"));
    }
}
