// tests/csv_records.rs
//
// Parser behaviour on export-shaped input.
//
use routine_pages::{Error, ParseOptions, parse_records};
use routine_pages::csv::{parse_rows, split_line};

const EXPORT: &str = "\
이름,Title,Date,Checklist,VelogBody,Status
Day 1,\"Setup, tooling\",2024-01-01,\"[ ] node
[ ] vite\",\"## Goals
- [ ] install
He said \"\"go\"\"\",Done
Intro,About,,,,

Day 2,Props,2024-01-02,[ ] props,short,
Day two,Typo,,,,
Day 03,State,2024-01-03,,,
";

#[test]
fn retained_rows_in_file_order() {
    let recs = parse_records(EXPORT, ParseOptions::default()).unwrap();
    let names: Vec<&str> = recs.iter().map(|r| r.get("이름").unwrap()).collect();
    assert_eq!(names, vec!["Day 1", "Day 2", "Day 03"]);
}

#[test]
fn multi_line_fields_keep_their_newlines() {
    let recs = parse_records(EXPORT, ParseOptions::default()).unwrap();
    let day1 = &recs[0];
    assert_eq!(day1.get("Title"), Some("Setup, tooling"));
    assert_eq!(day1.get("Checklist"), Some("[ ] node\n[ ] vite"));
    assert_eq!(day1.get("VelogBody"), Some("## Goals\n- [ ] install\nHe said \"go\""));
    assert_eq!(day1.get("Status"), Some("Done"));
}

#[test]
fn every_record_has_one_value_per_header() {
    let rows = parse_rows(EXPORT, ParseOptions::default()).unwrap();
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|r| r.len() == 6));
    assert_eq!(rows[2].get("Status"), Some(""));
}

#[test]
fn header_row_round_trip() {
    let header = EXPORT.lines().next().unwrap();
    assert_eq!(split_line(header).join(","), header);
}

#[test]
fn documented_examples() {
    let r = parse_rows("a,b,c\n1,2,3", ParseOptions::default()).unwrap();
    let pairs: Vec<(&str, &str)> = r[0].iter().collect();
    assert_eq!(pairs, vec![("a", "1"), ("b", "2"), ("c", "3")]);

    let r = parse_rows("x,y\n\"a,b\",2024-01-01", ParseOptions::default()).unwrap();
    assert_eq!(r[0].values(), ["a,b", "2024-01-01"]);
}

#[test]
fn empty_and_strict_failures() {
    assert!(matches!(parse_records("", ParseOptions::default()), Err(Error::EmptyInput)));

    let open = "이름,VelogBody\nDay 1,\"never closed\n";
    let lenient = parse_records(open, ParseOptions::default()).unwrap();
    assert_eq!(lenient[0].get("VelogBody"), Some("never closed\n\n"));
    assert!(matches!(
        parse_records(open, ParseOptions { strict: true }),
        Err(Error::UnterminatedQuote { line: 2 })
    ));
}
