//! Property tests for the cleaning pipeline.

use limpa_model::{Cell, Column, Dataset, NormalizationConfig};
use limpa_normalization::clean;
use proptest::prelude::*;

const TEXT_PATTERN: &str =
    "[a-zA-Z0-9àáâãçéêíóôõúÀÁÂÃÇÉÊÍÓÔÕÚñÑºª™№ℌᴬ .,;:!?@#$%&*_+=|/<>()\\[\\]{}\"'`~\\-\t\n]{0,24}";

/// Letters with decomposed accents next to digits and hyphens.
const DECOMPOSED_PATTERN: &str = "[a-zA-Z0-9\u{301}\u{327} \\-]{0,24}";

fn cell_strategy() -> impl Strategy<Value = Cell> {
    prop_oneof![
        3 => TEXT_PATTERN.prop_map(Cell::Text),
        1 => Just(Cell::Null),
    ]
}

fn dataset_strategy() -> impl Strategy<Value = Dataset> {
    (1usize..6).prop_flat_map(|rows| {
        (
            prop::collection::vec(cell_strategy(), rows),
            prop::collection::vec(prop::option::of(-1.0e6f64..1.0e6), rows),
        )
            .prop_map(|(text, numbers)| {
                let numbers = numbers.into_iter().map(Cell::from).collect();
                Dataset::new(vec![
                    Column::new("Texto", text),
                    Column::new("Numero", numbers),
                ])
                .expect("equal lengths")
            })
    })
}

fn config_strategy() -> impl Strategy<Value = NormalizationConfig> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(lowercase, strip_special, split, collapse)| {
            NormalizationConfig::default()
                .with_lowercase(lowercase)
                .with_strip_special(strip_special)
                .with_split_alnum_boundary(split)
                .with_collapse_whitespace(collapse)
        },
    )
}

proptest! {
    #[test]
    fn cleaning_is_idempotent(dataset in dataset_strategy()) {
        let config = NormalizationConfig::default();
        let once = clean(&dataset, &config).unwrap();
        let twice = clean(&once, &config).unwrap();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn cleaning_keeps_decomposed_accents_stable(value in DECOMPOSED_PATTERN) {
        let config = NormalizationConfig::default().with_fold_diacritics(false);
        let dataset = Dataset::new(vec![Column::new("Texto", vec![Cell::Text(value)])]).unwrap();
        let once = clean(&dataset, &config).unwrap();
        let twice = clean(&once, &config).unwrap();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn nulls_survive_any_config(dataset in dataset_strategy(), config in config_strategy()) {
        let cleaned = clean(&dataset, &config).unwrap();
        for (before, after) in dataset.columns().iter().zip(cleaned.columns()) {
            for (a, b) in before.cells().iter().zip(after.cells()) {
                prop_assert_eq!(a.is_null(), b.is_null());
            }
        }
    }

    #[test]
    fn ineligible_columns_are_identical(dataset in dataset_strategy(), config in config_strategy()) {
        let cleaned = clean(&dataset, &config).unwrap();
        for (before, after) in dataset.columns().iter().zip(cleaned.columns()) {
            if !before.is_text_eligible() {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn default_output_has_no_separators_or_double_spaces(value in TEXT_PATTERN) {
        let dataset = Dataset::new(vec![Column::new("Texto", vec![Cell::Text(value)])]).unwrap();
        let cleaned = clean(&dataset, &NormalizationConfig::default()).unwrap();
        let text = cleaned.columns()[0].cells()[0].as_text().unwrap().to_string();
        prop_assert!(!text.contains("  "));
        prop_assert_eq!(text.trim(), text.as_str());
        prop_assert!(!text.chars().any(|ch| limpa_model::DEFAULT_SPECIAL_CHARS.contains(ch)));
        prop_assert!(!text.chars().any(char::is_uppercase));
    }
}
