use chrono::{FixedOffset, TimeZone};
use stampchart::config::Config;
use stampchart::core::{PairingIndex, build_chart};
use stampchart::export::{CellValue, MemorySink, SheetSink, col_name, plan};
use stampchart::models::{InterviewEvent, Member, StarChart};

fn example_chart() -> StarChart {
    build_chart(
        vec![Member::new("a", "Alice", Some(1.0)), Member::new("b", "Bob", None)],
        &PairingIndex::build(&[
            InterviewEvent::new("a", "b", true),
            InterviewEvent::new("b", "a", false),
        ]),
    )
}

fn render(chart: &StarChart) -> MemorySink {
    let cfg = Config::default();
    let now = FixedOffset::east_opt(9 * 3600)
        .expect("offset")
        .with_ymd_and_hms(2025, 1, 2, 3, 4, 5)
        .unwrap();

    let mut sheet = MemorySink::new(&cfg.sheet.name);
    for w in plan(chart, &cfg, &now) {
        sheet.write(&w).expect("write");
    }
    sheet
}

#[test]
fn test_col_name() {
    assert_eq!(col_name(1), "A");
    assert_eq!(col_name(4), "D");
    assert_eq!(col_name(26), "Z");
    assert_eq!(col_name(27), "AA");
    assert_eq!(col_name(52), "AZ");
    assert_eq!(col_name(53), "BA");
    assert_eq!(col_name(702), "ZZ");
    assert_eq!(col_name(703), "AAA");
}

#[test]
fn test_grid_cells_start_at_e6() {
    let sheet = render(&example_chart());

    assert_eq!(sheet.text(6, 5), "-"); // E6
    assert_eq!(sheet.text(6, 6), "◎"); // F6
    assert_eq!(sheet.text(7, 5), "予"); // E7
    assert_eq!(sheet.text(7, 6), "-"); // F7
}

#[test]
fn test_row_and_column_headers() {
    let sheet = render(&example_chart());

    // rows: name in D, rank in C, given count in B
    assert_eq!(sheet.text(6, 4), "Alice");
    assert_eq!(sheet.text(6, 3), "1");
    assert_eq!(sheet.text(6, 2), "1");
    assert_eq!(sheet.text(7, 4), "Bob");
    assert_eq!(sheet.get(7, 3), None);
    assert_eq!(sheet.text(7, 2), "0");

    // columns: name on row 4, rank on row 3, received count on row 2
    assert_eq!(sheet.text(4, 5), "Alice");
    assert_eq!(sheet.text(3, 5), "1");
    assert_eq!(sheet.text(2, 5), "0");
    assert_eq!(sheet.text(4, 6), "Bob");
    assert_eq!(sheet.get(3, 6), None);
    assert_eq!(sheet.text(2, 6), "1");
}

#[test]
fn test_fixed_labels() {
    let sheet = render(&example_chart());

    assert_eq!(sheet.text(1, 1), "更新日時：2025-01-02 03:04:05");
    assert_eq!(sheet.text(3, 4), "社員番号"); // D3
    assert_eq!(sheet.text(4, 3), "社員番号"); // C4
    assert_eq!(sheet.text(4, 2), "もらったスタンプの数"); // B4
    assert_eq!(sheet.text(2, 4), "あげたスタンプの数"); // D2
    assert_eq!(sheet.text(5, 4), "interviewer"); // D5
    assert_eq!(
        sheet.get(4, 4),
        Some(&CellValue::Formula("=CHAR(HEX2DEC(\"1F4AE\"))".to_string()))
    );
}

#[test]
fn test_counts_are_numbers() {
    let sheet = render(&example_chart());
    assert_eq!(sheet.get(6, 2), Some(&CellValue::Number(1.0)));
}

#[test]
fn test_empty_cells_are_not_written() {
    let chart = build_chart(
        vec![Member::new("a", "A", Some(1.0)), Member::new("b", "B", Some(2.0))],
        &PairingIndex::default(),
    );
    let sheet = render(&chart);

    assert_eq!(sheet.get(6, 6), None);
    assert_eq!(sheet.get(7, 5), None);
    // 2 diagonal + 2×3 row headers + 2×3 column headers + 7 labels
    assert_eq!(sheet.write_count(), 21);
}

#[test]
fn test_empty_roster_still_writes_labels() {
    let chart = build_chart(Vec::new(), &PairingIndex::default());
    let sheet = render(&chart);
    assert_eq!(sheet.write_count(), 7);
    assert!(sheet.text(1, 1).starts_with("更新日時："));
}

#[test]
fn test_custom_markers() {
    let mut cfg = Config::default();
    cfg.markers.done = "OK".to_string();
    cfg.markers.scheduled = "TBD".to_string();

    let now = FixedOffset::east_opt(0)
        .expect("offset")
        .with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
        .unwrap();
    let mut sheet = MemorySink::new(&cfg.sheet.name);
    for w in plan(&example_chart(), &cfg, &now) {
        sheet.write(&w).expect("write");
    }

    assert_eq!(sheet.text(6, 6), "OK");
    assert_eq!(sheet.text(7, 5), "TBD");
}

#[test]
fn test_render_table_aligns_wide_characters() {
    let sheet = render(&example_chart());
    let table = sheet.render_table();
    assert!(table.contains("Alice"));
    assert!(table.contains("◎"));
    assert_eq!(table.lines().count(), 7);
}
