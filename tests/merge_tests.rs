use impexp_chart::data::{WideRow, combine};
use impexp_chart::error::ChartError;

#[test]
fn exports_weave_into_the_imports_spine() {
    let imports = vec![
        WideRow::new("France")
            .with_cell("1999", "10")
            .with_cell("2000", "20"),
    ];
    let exports = vec![WideRow::new("France").with_cell("1999", "5")];

    let dataset = combine(&imports, &exports).expect("combine");
    let france = dataset.get("France").expect("France present");

    assert_eq!(france.values.len(), 2);
    assert_eq!(france.values[0].year, 1999);
    assert_eq!(france.values[0].imports, Some(10.0));
    assert_eq!(france.values[0].exports, Some(5.0));
    assert_eq!(france.values[1].year, 2000);
    assert_eq!(france.values[1].imports, Some(20.0));
    assert_eq!(france.values[1].exports, None);
}

#[test]
fn empty_cells_mean_missing_not_zero() {
    let imports = vec![
        WideRow::new("UK")
            .with_cell("1999", "")
            .with_cell("2000", "18"),
    ];
    let exports = vec![
        WideRow::new("UK")
            .with_cell("1999", "16")
            .with_cell("2000", ""),
    ];

    let dataset = combine(&imports, &exports).expect("combine");
    let uk = dataset.get("UK").expect("UK present");

    // An empty imports cell keeps the year but reports no value.
    assert_eq!(uk.values[0].imports, None);
    assert_eq!(uk.values[0].exports, Some(16.0));
    // An empty exports cell for an existing pair is also missing, not 0.
    assert_eq!(uk.values[1].imports, Some(18.0));
    assert_eq!(uk.values[1].exports, None);
}

#[test]
fn export_only_entities_are_dropped() {
    let imports = vec![WideRow::new("France").with_cell("1999", "10")];
    let exports = vec![
        WideRow::new("France").with_cell("1999", "5"),
        WideRow::new("Germany").with_cell("1999", "44"),
    ];

    let dataset = combine(&imports, &exports).expect("combine");
    assert!(dataset.get("Germany").is_none());
    assert_eq!(dataset.len(), 1);
}

#[test]
fn source_column_order_does_not_leak_into_series_order() {
    let imports = vec![
        WideRow::new("China")
            .with_cell("2005", "30")
            .with_cell("1999", "10")
            .with_cell("2001", "20"),
    ];

    let dataset = combine(&imports, &[]).expect("combine");
    let years: Vec<i32> = dataset
        .get("China")
        .expect("China present")
        .values
        .iter()
        .map(|point| point.year)
        .collect();
    assert_eq!(years, vec![1999, 2001, 2005]);
}

#[test]
fn combine_is_deterministic() {
    let imports = vec![
        WideRow::new("France")
            .with_cell("1999", "10")
            .with_cell("2000", "20"),
        WideRow::new("UK").with_cell("1999", "16"),
    ];
    let exports = vec![WideRow::new("UK").with_cell("1999", "11")];

    let first = combine(&imports, &exports).expect("first combine");
    let second = combine(&imports, &exports).expect("second combine");
    assert_eq!(first, second);
}

#[test]
fn dataset_preserves_imports_row_order() {
    let imports = vec![
        WideRow::new("UK").with_cell("1999", "1"),
        WideRow::new("France").with_cell("1999", "2"),
        WideRow::new("China").with_cell("1999", "3"),
    ];

    let dataset = combine(&imports, &[]).expect("combine");
    let names: Vec<&str> = dataset.entity_names().collect();
    assert_eq!(names, vec!["UK", "France", "China"]);
}

#[test]
fn non_integer_year_label_fails_fast() {
    let imports = vec![WideRow::new("France").with_cell("Country Code", "FR")];
    let result = combine(&imports, &[]);
    assert!(matches!(result, Err(ChartError::DataFormat(_))));
}

#[test]
fn junk_value_cell_fails_fast() {
    let imports = vec![WideRow::new("France").with_cell("1999", "n/a")];
    let result = combine(&imports, &[]);
    assert!(matches!(result, Err(ChartError::DataFormat(_))));
}

#[test]
fn duplicate_year_in_one_row_fails_fast() {
    let imports = vec![
        WideRow::new("France")
            .with_cell("1999", "10")
            .with_cell("1999", "11"),
    ];
    let result = combine(&imports, &[]);
    assert!(matches!(result, Err(ChartError::DataFormat(_))));
}

#[test]
fn scientific_notation_values_parse() {
    let imports = vec![WideRow::new("US").with_cell("2016", "2.25E+12")];
    let dataset = combine(&imports, &[]).expect("combine");
    let us = dataset.get("US").expect("US present");
    assert_eq!(us.values[0].imports, Some(2.25e12));
}
