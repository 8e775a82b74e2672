//! End-to-end tests for dataset cleaning.

use limpa_model::{Cell, Column, Dataset, NormalizationConfig, OpaqueValue};
use limpa_normalization::normalization::{
    collapse_whitespace, fold_diacritics, split_alnum_boundary,
};
use limpa_normalization::{NormalizationError, clean, clean_with_report, classify};

fn single_cell(value: &str) -> Dataset {
    Dataset::new(vec![Column::new("Valor", vec![Cell::text(value)])]).unwrap()
}

fn cell_of(dataset: &Dataset) -> &Cell {
    &dataset.columns()[0].cells()[0]
}

#[test]
fn cleans_product_descriptions_and_keeps_numeric_columns() {
    let dataset = Dataset::new(vec![
        Column::new("Descricao", vec![Cell::text("Produto Nº 10kg"), Cell::Null]),
        Column::new("Peso", vec![Cell::float(1.5), Cell::float(3.2)]),
    ])
    .unwrap();

    let cleaned = clean(&dataset, &NormalizationConfig::default()).unwrap();

    assert_eq!(
        cleaned.column("Descricao").unwrap().cells(),
        &[Cell::text("produto n 10 kg"), Cell::Null]
    );
    assert_eq!(
        cleaned.column("Peso").unwrap().cells(),
        &[Cell::float(1.5), Cell::float(3.2)]
    );
    assert_eq!(cleaned.column_names(), vec!["Descricao", "Peso"]);
}

#[test]
fn compatibility_capitals_are_cleaned_once() {
    let config = NormalizationConfig::default();
    let once = clean(&single_cell("Produto™"), &config).unwrap();
    let twice = clean(&once, &config).unwrap();

    assert_eq!(cell_of(&once), &Cell::text("produtotm"));
    assert_eq!(twice, once);

    let once = clean(&single_cell("№ 5 ℌ ᴬ"), &config).unwrap();
    assert_eq!(cell_of(&once), &Cell::text("no 5 h a"));
}

#[test]
fn decomposed_accent_before_digit_is_kept() {
    let config = NormalizationConfig::default().with_fold_diacritics(false);
    let cleaned = clean(&single_cell("e\u{301}5"), &config).unwrap();

    assert_eq!(cell_of(&cleaned), &Cell::text("e\u{301} 5"));
}

#[test]
fn input_dataset_is_left_untouched() {
    let dataset = single_cell("ÁGUA");
    let snapshot = dataset.clone();
    let _ = clean(&dataset, &NormalizationConfig::default()).unwrap();
    assert_eq!(dataset, snapshot);
}

#[test]
fn hyphen_and_slash_become_separators() {
    let cleaned = clean(&single_cell("NF-12345/AB"), &NormalizationConfig::default()).unwrap();
    assert_eq!(cell_of(&cleaned), &Cell::text("nf 12345 ab"));
}

#[test]
fn standalone_stages_match_documented_examples() {
    assert_eq!(fold_diacritics("Café Açaí"), "Cafe Acai");
    assert_eq!(split_alnum_boundary("Lote42X"), "Lote 42 X");
    assert_eq!(collapse_whitespace("  a    b\tc  "), "a b c");
}

#[test]
fn split_without_substitution_keeps_case() {
    let config = NormalizationConfig::default()
        .with_strip_special(false)
        .with_lowercase(false);
    let cleaned = clean(&single_cell("Lote42X"), &config).unwrap();
    assert_eq!(cell_of(&cleaned), &Cell::text("Lote 42 X"));
}

#[test]
fn connector_collapse_runs_when_substitution_is_off() {
    let config = NormalizationConfig::default().with_strip_special(false);
    let cleaned = clean(&single_cell("Caixa 12-kg"), &config).unwrap();
    assert_eq!(cell_of(&cleaned), &Cell::text("caixa 12 kg"));
}

#[test]
fn extra_chars_are_matched_literally() {
    let config = NormalizationConfig::default().with_extra_chars("€§");
    let cleaned = clean(&single_cell("Preço€10 §3"), &config).unwrap();
    assert_eq!(cell_of(&cleaned), &Cell::text("preco 10 3"));
}

#[test]
fn invalid_extra_chars_reject_the_whole_run() {
    let config = NormalizationConfig::default().with_extra_chars("§\u{301}");
    let err = clean(&single_cell("x"), &config).unwrap_err();
    assert!(matches!(
        err,
        NormalizationError::InvalidConfig {
            character: '\u{301}',
            ..
        }
    ));
}

#[test]
fn all_null_and_all_other_columns_are_copied() {
    let date = "2024-01-31".parse().unwrap();
    let dataset = Dataset::new(vec![
        Column::new("Vazio", vec![Cell::Null, Cell::Null]),
        Column::new(
            "Data",
            vec![Cell::Other(OpaqueValue::Date(date)), Cell::Null],
        ),
    ])
    .unwrap();
    assert!(!classify(dataset.columns()[0].cells()));
    assert!(!classify(dataset.columns()[1].cells()));

    let cleaned = clean(&dataset, &NormalizationConfig::default()).unwrap();
    assert_eq!(cleaned, dataset);
}

#[test]
fn mixed_text_and_number_column_is_not_touched() {
    let dataset = Dataset::new(vec![Column::new(
        "Codigo",
        vec![Cell::text("ABC-1"), Cell::float(2.0)],
    )])
    .unwrap();
    let cleaned = clean(&dataset, &NormalizationConfig::default()).unwrap();
    assert_eq!(cleaned, dataset);
}

#[test]
fn stale_classification_is_a_type_mismatch() {
    let dataset = Dataset::new(vec![Column::with_eligibility(
        "Codigo",
        vec![Cell::text("A"), Cell::Null, Cell::float(1.0)],
        true,
    )])
    .unwrap();
    let err = clean(&dataset, &NormalizationConfig::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "column 'Codigo' row 2: number cell in a text column"
    );
}

#[test]
fn empty_strings_stay_text() {
    let cleaned = clean(&single_cell("   "), &NormalizationConfig::default()).unwrap();
    assert_eq!(cell_of(&cleaned), &Cell::text(""));
}

#[test]
fn report_counts_rewritten_cells() {
    let dataset = Dataset::new(vec![
        Column::new(
            "Nome",
            vec![Cell::text("JOSÉ"), Cell::text("maria"), Cell::Null],
        ),
        Column::new("Idade", vec![Cell::float(30.0), Cell::Null, Cell::float(41.0)]),
    ])
    .unwrap();

    let outcome = clean_with_report(&dataset, &NormalizationConfig::default()).unwrap();

    assert_eq!(outcome.report.rows, 3);
    assert_eq!(outcome.report.columns_cleaned(), 1);
    assert_eq!(outcome.report.columns_skipped(), 1);
    assert_eq!(outcome.report.cells_rewritten(), 1);
    let nome = outcome.report.column("Nome").unwrap();
    assert_eq!(nome.nulls, 1);
    assert_eq!(outcome.report.column("Idade").unwrap().nulls, 1);
    assert_eq!(
        outcome.dataset.column("Nome").unwrap().cells()[0],
        Cell::text("jose")
    );
}
