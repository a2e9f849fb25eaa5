//! # Field Module - *Column Typing for CSV Schemas*
//!
//! A `Field` names one column and its declared dtype; a `Schema` is the
//! ordered collection handed to the CSV reader. This module carries only
//! the schema description, never row data.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::enums::dtype::DType;
use crate::enums::error::MinvecError;

/// One named, typed column.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub dtype: DType,
}

impl Field {
    /// Constructs a new `Field`.
    pub fn new<T: Into<String>>(name: T, dtype: DType) -> Self {
        Field {
            name: name.into(),
            dtype,
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Field \"{}\": {}", self.name, self.dtype)
    }
}

/// Ordered column schema.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    pub fields: Vec<Field>,
}

impl Schema {
    /// Constructs a schema from fields, preserving order.
    pub fn new(fields: Vec<Field>) -> Self {
        Schema { fields }
    }

    /// Constructs a schema from `(name, dtype-name)` pairs, parsing each
    /// dtype name (aliases included). An unknown name is an
    /// `InvalidDtype` error.
    pub fn from_pairs<N: Into<String>>(
        pairs: impl IntoIterator<Item = (N, &'static str)>,
    ) -> Result<Self, MinvecError> {
        let mut fields = Vec::new();
        for (name, dtype) in pairs {
            fields.push(Field::new(name, DType::from_str(dtype)?));
        }
        Ok(Schema { fields })
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterator over the fields in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }
}
