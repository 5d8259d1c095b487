use crate::api::format::format_billions;
use crate::data::YearPoint;

/// Hover-tooltip text for one entity at one year.
///
/// Four lines: entity, year, imports, exports; values print as grouped
/// billions, unreported fields as `n/a`.
#[must_use]
pub fn tooltip_text(entity_name: &str, point: YearPoint) -> String {
    format!(
        "{entity_name}\n{}\nImports: {}\nExports: {}",
        point.year,
        money_line(point.imports),
        money_line(point.exports),
    )
}

fn money_line(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("${} billion", format_billions(value)),
        None => "n/a".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::tooltip_text;
    use crate::data::YearPoint;

    #[test]
    fn tooltip_has_entity_year_and_both_values() {
        let point = YearPoint::new(2004, Some(150.0e9), Some(92.5e9));
        assert_eq!(
            tooltip_text("France", point),
            "France\n2004\nImports: $150 billion\nExports: $92.50 billion"
        );
    }

    #[test]
    fn unreported_fields_say_na() {
        let point = YearPoint::new(2000, Some(20.0e9), None);
        assert_eq!(
            tooltip_text("UK", point),
            "UK\n2000\nImports: $20 billion\nExports: n/a"
        );
    }
}
