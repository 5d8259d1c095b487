use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One yearly sample of paired trade values.
///
/// `None` means the source reported no value for that year. It is distinct
/// from `0.0`, which is a reported value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearPoint {
    pub year: i32,
    pub imports: Option<f64>,
    pub exports: Option<f64>,
}

impl YearPoint {
    #[must_use]
    pub fn new(year: i32, imports: Option<f64>, exports: Option<f64>) -> Self {
        Self {
            year,
            imports,
            exports,
        }
    }

    /// True when both fields carry a reported value.
    #[must_use]
    pub fn is_fully_defined(self) -> bool {
        self.imports.is_some() && self.exports.is_some()
    }

    /// Largest reported value at this point, if any field is reported.
    #[must_use]
    pub fn max_value(self) -> Option<f64> {
        match (self.imports, self.exports) {
            (Some(imports), Some(exports)) => Some(imports.max(exports)),
            (Some(imports), None) => Some(imports),
            (None, Some(exports)) => Some(exports),
            (None, None) => None,
        }
    }
}

/// Named yearly time series, strictly increasing by year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySeries {
    pub name: String,
    pub values: Vec<YearPoint>,
}

impl EntitySeries {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<YearPoint>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// First and last year carried by the series.
    #[must_use]
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let first = self.values.first()?.year;
        let last = self.values.last()?.year;
        Some((first, last))
    }

    /// Largest reported value across both fields.
    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        self.values
            .iter()
            .filter_map(|point| point.max_value())
            .fold(None, |acc, value| Some(acc.map_or(value, |a| a.max(value))))
    }

    /// Latest point where both imports and exports are reported.
    ///
    /// This is the label anchor point; a series with no such point gets no
    /// label.
    #[must_use]
    pub fn last_fully_defined(&self) -> Option<YearPoint> {
        self.values
            .iter()
            .rev()
            .copied()
            .find(|point| point.is_fully_defined())
    }
}

/// Entity name → series, in imports-source row order.
///
/// Built once by [`crate::data::combine`] and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombinedDataset {
    entities: IndexMap<String, EntitySeries>,
}

impl CombinedDataset {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EntitySeries> {
        self.entities.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entities.contains_key(name)
    }

    /// Entity names in dataset order, for populating a picker.
    pub fn entity_names(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EntitySeries)> {
        self.entities
            .iter()
            .map(|(name, series)| (name.as_str(), series))
    }

    pub(crate) fn insert(&mut self, series: EntitySeries) {
        self.entities.insert(series.name.clone(), series);
    }
}
