//! Integration tests for loading CSV and XLSX files as datasets.

use std::io::Write;

use limpa_ingest::{IngestError, IngestOptions, read_dataset};
use chrono::NaiveDate;
use limpa_model::{Cell, OpaqueValue};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use tempfile::NamedTempFile;

fn csv_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp file");
    file.write_all(content.as_bytes()).expect("write csv");
    file
}

#[test]
fn text_and_numeric_columns_are_classified() {
    let file = csv_file("Descricao,Peso,Qtd\nProduto Nº 10kg,1.5,3\n,3.2,4\n");
    let dataset = read_dataset(file.path(), &IngestOptions::default()).expect("read");

    assert_eq!(dataset.column_names(), vec!["Descricao", "Peso", "Qtd"]);
    assert_eq!(dataset.height(), 2);

    let descricao = dataset.column("Descricao").unwrap();
    assert!(descricao.is_text_eligible());
    assert_eq!(descricao.cells(), &[Cell::text("Produto Nº 10kg"), Cell::Null]);

    let peso = dataset.column("Peso").unwrap();
    assert!(!peso.is_text_eligible());
    assert_eq!(peso.cells(), &[Cell::float(1.5), Cell::float(3.2)]);

    let qtd = dataset.column("Qtd").unwrap();
    assert_eq!(qtd.cells(), &[Cell::int(3), Cell::int(4)]);
    assert!(qtd.is_integer());
}

#[test]
fn integer_ids_keep_full_precision() {
    let file = csv_file("Nome,Qtd,Id\nAna,5,9007199254740993\n");
    let dataset = read_dataset(file.path(), &IngestOptions::default()).expect("read");

    assert_eq!(dataset.column("Qtd").unwrap().cells(), &[Cell::int(5)]);
    assert_eq!(
        dataset.column("Id").unwrap().cells(),
        &[Cell::int(9_007_199_254_740_993)]
    );
    assert_eq!(dataset.column("Id").unwrap().cells()[0].to_string(), "9007199254740993");
}

#[test]
fn dates_and_booleans_become_opaque_values() {
    let file = csv_file("Data,Ativo\n2024-01-31,true\n2024-02-01,false\n");
    let dataset = read_dataset(file.path(), &IngestOptions::default()).expect("read");

    let data = dataset.column("Data").unwrap();
    assert!(!data.is_text_eligible());
    assert!(matches!(data.cells()[0], Cell::Other(OpaqueValue::Date(_))));
    assert_eq!(data.cells()[0].to_string(), "2024-01-31");

    let ativo = dataset.column("Ativo").unwrap();
    assert_eq!(ativo.cells()[1], Cell::Other(OpaqueValue::Boolean(false)));
}

#[test]
fn dates_stay_text_when_parsing_is_off() {
    let file = csv_file("Data\n2024-01-31\n");
    let options = IngestOptions::default().with_try_parse_dates(false);
    let dataset = read_dataset(file.path(), &options).expect("read");

    assert_eq!(dataset.column("Data").unwrap().cells(), &[Cell::text("2024-01-31")]);
}

#[test]
fn header_only_file_yields_empty_columns() {
    let file = csv_file("A,B\n");
    let dataset = read_dataset(file.path(), &IngestOptions::default()).expect("read");

    assert_eq!(dataset.width(), 2);
    assert_eq!(dataset.height(), 0);
}

#[test]
fn oversize_file_is_rejected_before_parsing() {
    let file = csv_file("Descricao\nalgum texto longo\n");
    let options = IngestOptions::default().with_max_file_size(8);
    let err = read_dataset(file.path(), &options).unwrap_err();

    assert!(matches!(err, IngestError::FileTooLarge { max_size: 8, .. }));
}

#[test]
fn unsupported_extension_is_rejected() {
    let mut file = tempfile::Builder::new()
        .suffix(".xls")
        .tempfile()
        .expect("create temp file");
    file.write_all(b"A\n1\n").expect("write");

    let err = read_dataset(file.path(), &IngestOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedExtension { .. }));
    assert!(err.to_string().starts_with("unsupported file type"));
}

#[test]
fn missing_file_is_reported() {
    let err = read_dataset(
        std::path::Path::new("/nonexistent/dados.csv"),
        &IngestOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

fn xlsx_file() -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".xlsx")
        .tempfile()
        .expect("create temp file");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    for (col, name) in ["Descricao", "Qtd", "Peso", "Data", "Ativo"].into_iter().enumerate() {
        sheet.write_string(0, col as u16, name).unwrap();
    }
    sheet.write_string(1, 0, "Produto Nº 10kg").unwrap();
    sheet.write_number(1, 1, 3.0).unwrap();
    sheet.write_number(1, 2, 1.5).unwrap();
    let date = ExcelDateTime::from_ymd(2024, 1, 31).unwrap();
    sheet.write_datetime_with_format(1, 3, &date, &date_format).unwrap();
    sheet.write_boolean(1, 4, true).unwrap();
    sheet.write_number(2, 1, 4.0).unwrap();
    sheet.write_number(2, 2, 3.2).unwrap();
    workbook.save(file.path()).expect("save workbook");
    file
}

#[test]
fn xlsx_first_sheet_is_loaded() {
    let file = xlsx_file();
    let dataset = read_dataset(file.path(), &IngestOptions::default()).expect("read");

    assert_eq!(
        dataset.column_names(),
        vec!["Descricao", "Qtd", "Peso", "Data", "Ativo"]
    );
    assert_eq!(dataset.height(), 2);

    let descricao = dataset.column("Descricao").unwrap();
    assert!(descricao.is_text_eligible());
    assert_eq!(descricao.cells(), &[Cell::text("Produto Nº 10kg"), Cell::Null]);

    let qtd = dataset.column("Qtd").unwrap();
    assert!(qtd.is_integer());
    assert_eq!(qtd.cells(), &[Cell::int(3), Cell::int(4)]);

    assert_eq!(
        dataset.column("Peso").unwrap().cells(),
        &[Cell::float(1.5), Cell::float(3.2)]
    );
    assert_eq!(
        dataset.column("Data").unwrap().cells()[0],
        Cell::Other(OpaqueValue::Date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()))
    );
    assert_eq!(
        dataset.column("Ativo").unwrap().cells()[0],
        Cell::Other(OpaqueValue::Boolean(true))
    );
}

#[test]
fn xlsx_size_limit_applies() {
    let file = xlsx_file();
    let options = IngestOptions::default().with_max_file_size(16);
    let err = read_dataset(file.path(), &options).unwrap_err();

    assert!(matches!(err, IngestError::FileTooLarge { max_size: 16, .. }));
}

#[test]
fn corrupt_xlsx_is_reported() {
    let mut file = tempfile::Builder::new()
        .suffix(".xlsx")
        .tempfile()
        .expect("create temp file");
    file.write_all(b"A\n1\n").expect("write");

    let err = read_dataset(file.path(), &IngestOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::SheetRead { .. }));
}
