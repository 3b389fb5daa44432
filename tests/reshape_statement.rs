use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use statement_reshaper::csv_format::CsvStatement;
use statement_reshaper::{
    reshape, LeadingGroup, Pipeline, PipelineOptions, RawRow, TransactionRecord,
};
use std::io::Cursor;

const EXPORT: &str = r#"Extras de cont RO49AAAA1B31007593840000,,,,
Data,Detalii tranzactie,Debit,Credit,Balanta
,Sold initial,,,
15 martie 2023,Plata la POS,"1.234,56",,"8.765,44"
,MEGA IMAGE 0123,,,
,"ref, 44521",,,
,,,,
16 martie 2023,Incasare,,"2.000,00","10.765,44"
17 martie 2023,Comision,"N/A",,"10.760,44"
"#;

fn record(
    date: Option<NaiveDate>,
    balance: f64,
    credit: f64,
    debit: f64,
    details: &str,
) -> TransactionRecord {
    TransactionRecord {
        date,
        balance,
        credit,
        debit,
        details: details.to_string(),
    }
}

#[test]
fn reshape_export_end_to_end() {
    let statement = CsvStatement::from_read(&mut Cursor::new(EXPORT)).unwrap();
    let table = statement.reshape(&PipelineOptions::default());

    assert_eq!(
        table.records(),
        &[
            record(None, 0.0, 0.0, 0.0, "Sold initial"),
            record(
                NaiveDate::from_ymd_opt(2023, 3, 15),
                8765.44,
                0.0,
                1234.56,
                "Plata la POS ; MEGA IMAGE 0123 ; ref, 44521",
            ),
            record(NaiveDate::from_ymd_opt(2023, 3, 16), 10765.44, 2000.0, 0.0, "Incasare"),
            record(NaiveDate::from_ymd_opt(2023, 3, 17), 10760.44, 0.0, 0.0, "Comision"),
        ]
    );
}

#[test]
fn leading_note_with_keep_policy() {
    let rows = vec![
        RawRow::new("", "fee note", "", "", ""),
        RawRow::new("1 ianuarie 2023", "deposit", "", "100,00", "1.100,00"),
    ];

    let table = reshape(&rows);
    assert_eq!(
        table.records(),
        &[
            record(None, 0.0, 0.0, 0.0, "fee note"),
            record(NaiveDate::from_ymd_opt(2023, 1, 1), 1100.0, 100.0, 0.0, "deposit"),
        ]
    );
}

#[test]
fn leading_note_with_merge_policy() {
    let rows = vec![
        RawRow::new("", "fee note", "", "", ""),
        RawRow::new("1 ianuarie 2023", "deposit", "", "100,00", "1.100,00"),
    ];

    let pipeline = Pipeline::new(PipelineOptions {
        leading_group: LeadingGroup::Merge,
    });
    let table = pipeline.run(&rows);
    assert_eq!(
        table.into_records(),
        vec![record(
            NaiveDate::from_ymd_opt(2023, 1, 1),
            1100.0,
            100.0,
            0.0,
            "fee note ; deposit"
        )]
    );
}

#[test]
fn unparseable_dates_become_missing_index_keys() {
    let rows = vec![
        RawRow::new("15 martie", "a", "", "", "1,00"),
        RawRow::new("15 brumar 2023", "b", "", "", "2,00"),
        RawRow::new("15 martie 2023", "c", "", "", "3,00"),
    ];

    let table = reshape(&rows);
    let index: Vec<_> = table.index().collect();
    assert_eq!(index, vec![None, None, NaiveDate::from_ymd_opt(2023, 3, 15)]);
    assert_eq!(table.by_date(None).count(), 2);
}

#[test]
fn csv_output_is_reproducible() {
    let render = || {
        let statement = CsvStatement::from_read(&mut Cursor::new(EXPORT)).unwrap();
        let mut out = Vec::new();
        statement.reshape(&PipelineOptions::default()).write_to(&mut out).unwrap();
        out
    };

    let first = render();
    assert_eq!(first, render());

    let text = String::from_utf8(first).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "date,balance,credit,debit,details");
    assert_eq!(lines[1], ",0.0,0.0,0.0,Sold initial");
    assert_eq!(
        lines[2],
        "2023-03-15,8765.44,0.0,1234.56,\"Plata la POS ; MEGA IMAGE 0123 ; ref, 44521\""
    );
}

#[test]
fn drop_policy_removes_opening_rows() {
    let statement = CsvStatement::from_read(&mut Cursor::new(EXPORT)).unwrap();
    let table = statement.reshape(&PipelineOptions {
        leading_group: LeadingGroup::Drop,
    });
    assert_eq!(table.len(), 3);
    assert!(table.index().all(|date| date.is_some()));
}

#[test]
fn short_years_and_odd_spacing_in_export() {
    let input = "meta\n\
                 Data,Detalii tranzactie,Debit,Credit,Balanta\n\
                 15 martie 23,a,,,\"1,00\"\n\
                 15 Martie 2023,b,,,\"2,00\"\n\
                 \" 15 martie 2023\",c,,,\"3,00\"\n\
                 15 martie 023,d,,,\"4,00\"\n";
    let statement = CsvStatement::from_read(&mut Cursor::new(input)).unwrap();
    let table = statement.reshape(&PipelineOptions::default());

    let index: Vec<_> = table.index().collect();
    assert_eq!(index, vec![NaiveDate::from_ymd_opt(2023, 3, 15), None, None, None]);
}

#[test]
fn empty_export_still_writes_header() {
    let input = "meta\nData,Detalii tranzactie,Debit,Credit,Balanta\n,,,,\n";
    let statement = CsvStatement::from_read(&mut Cursor::new(input)).unwrap();
    let table = statement.reshape(&PipelineOptions::default());
    assert!(table.is_empty());

    let mut out = Vec::new();
    table.write_to(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "date,balance,credit,debit,details\n");
}
