//! Card bindings for Python.

use pyo3::prelude::*;

use crate::cards::{Card, Property};
use crate::rules::is_valid_set;

/// Python wrapper for Card.
#[pyclass(name = "Card")]
#[derive(Clone, Copy, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Raw property values (number, shape, color, fill), `None` for an
    /// absent property. Values are 0-based.
    #[getter]
    fn values(&self) -> Vec<Option<u8>> {
        self.0.values().to_vec()
    }

    /// Named value of a property, e.g. `card.value("color") == "red"`.
    fn value(&self, property: &str) -> Option<&'static str> {
        let property = Property::from_name(property)?;
        self.0.value(property).map(|v| property.value_name(v))
    }

    fn __repr__(&self) -> String {
        format!("Card({})", self.0)
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}

/// Check whether three cards form a set.
#[pyfunction]
#[pyo3(name = "is_valid_set")]
pub fn py_is_valid_set(a: &PyCard, b: &PyCard, c: &PyCard) -> bool {
    is_valid_set(&a.0, &b.0, &c.0)
}
