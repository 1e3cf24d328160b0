use serde::{Deserialize, Serialize};

use crate::core::{BarGeometry, Category, Series};
use crate::error::{ChartError, ChartResult};

/// Chart-ready categories and series plus the spacing used to lay them out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub categories: Vec<Category>,
    pub series: Vec<Series>,
    pub geometry: BarGeometry,
}

impl ChartSpec {
    pub fn new(
        categories: Vec<Category>,
        series: Vec<Series>,
        geometry: BarGeometry,
    ) -> ChartResult<Self> {
        let spec = Self {
            categories,
            series,
            geometry,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Spec with no categories and one empty series per name.
    pub fn empty<S: AsRef<str>>(series_names: &[S], geometry: BarGeometry) -> ChartResult<Self> {
        let series = series_names
            .iter()
            .enumerate()
            .map(|(position, name)| Series::new(name.as_ref(), position, Vec::new()))
            .collect();
        Self::new(Vec::new(), series, geometry)
    }

    #[must_use]
    pub fn tick_step(&self) -> f64 {
        self.geometry.tick_step
    }

    #[must_use]
    pub fn group_gap(&self) -> f64 {
        self.geometry.group_gap
    }

    #[must_use]
    pub fn bar_gap(&self) -> f64 {
        self.geometry.bar_gap
    }

    #[must_use]
    pub fn category_labels(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.label.clone()).collect()
    }

    /// Checks that every series has exactly one value per category.
    pub fn validate(&self) -> ChartResult<()> {
        let expected = self.categories.len();
        for series in &self.series {
            if series.values.len() != expected {
                return Err(ChartError::DataShape {
                    series: series.name.clone(),
                    expected,
                    actual: series.values.len(),
                });
            }
        }
        for (position, category) in self.categories.iter().enumerate() {
            if category.index != position {
                return Err(ChartError::InvalidData(format!(
                    "category `{}` has index {} at position {position}",
                    category.label, category.index
                )));
            }
        }
        Ok(())
    }
}
