use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One project record supplied by the data provider.
///
/// Metric columns keep their insertion order so serialized rows read back
/// the way they were written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub manager: String,
    pub project_name: String,
    pub project_code: String,
    #[serde(default)]
    pub metrics: IndexMap<String, f64>,
}

impl Row {
    #[must_use]
    pub fn new(
        manager: impl Into<String>,
        project_name: impl Into<String>,
        project_code: impl Into<String>,
    ) -> Self {
        Self {
            manager: manager.into(),
            project_name: project_name.into(),
            project_code: project_code.into(),
            metrics: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_metric(mut self, column: impl Into<String>, value: f64) -> Self {
        self.metrics.insert(column.into(), value);
        self
    }

    #[must_use]
    pub fn metric(&self, column: &str) -> Option<f64> {
        self.metrics.get(column).copied()
    }
}

/// One x-axis group of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub label: String,
    pub index: usize,
}

impl Category {
    #[must_use]
    pub fn new(label: impl Into<String>, index: usize) -> Self {
        Self {
            label: label.into(),
            index,
        }
    }
}

/// Named values drawn as one bar per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub color_index: usize,
    pub values: Vec<f64>,
}

impl Series {
    #[must_use]
    pub fn new(name: impl Into<String>, color_index: usize, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            color_index,
            values,
        }
    }
}
