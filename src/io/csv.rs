//! # **CSV Reader** - *Schema-Driven Column Ingestion*
//!
//! Parses a delimited text file into one typed vector per schema column.
//! Decoding is delegated to the `csv` crate, so quoted fields may contain
//! embedded commas and newlines per RFC 4180.
//!
//! ## Rules
//! - Columns are matched to the header row by name. A schema column absent
//!   from the file comes back as an empty vector of its declared dtype;
//!   file columns absent from the schema are ignored.
//! - An empty field is a null for that row.
//! - Content that does not coerce into the declared dtype is a type
//!   mismatch error naming the column and offending value.
//! - Integer columns roundtrip the full-width extremes of their declared
//!   width exactly; `float32` columns parse at f32 precision by design.
//! - A missing or unreadable file is an I/O error.

use std::path::Path;

use crate::enums::array::Array;
use crate::enums::dtype::DType;
use crate::enums::error::MinvecError;
use crate::structs::field::Schema;
use crate::structs::variants::boolean::BooleanArray;
use crate::structs::variants::float::FloatArray;
use crate::structs::variants::integer::IntegerArray;
use crate::structs::variants::string::StringArray;
use crate::traits::masked_array::MaskedArray;

/// Per-column accumulator, tagged by the declared dtype.
enum ColumnBuilder {
    Int32(Vec<Option<i32>>),
    Int64(Vec<Option<i64>>),
    Float32(Vec<Option<f32>>),
    Float64(Vec<Option<f64>>),
    Boolean(Vec<Option<bool>>),
    String(Vec<Option<String>>),
}

impl ColumnBuilder {
    fn new(dtype: DType) -> Self {
        match dtype {
            DType::Int32 => ColumnBuilder::Int32(Vec::new()),
            DType::Int64 => ColumnBuilder::Int64(Vec::new()),
            DType::Float32 => ColumnBuilder::Float32(Vec::new()),
            DType::Float64 => ColumnBuilder::Float64(Vec::new()),
            DType::Boolean => ColumnBuilder::Boolean(Vec::new()),
            DType::String => ColumnBuilder::String(Vec::new()),
        }
    }

    fn push_field(&mut self, raw: &str, column: &str, row: usize) -> Result<(), MinvecError> {
        if raw.is_empty() {
            match self {
                ColumnBuilder::Int32(v) => v.push(None),
                ColumnBuilder::Int64(v) => v.push(None),
                ColumnBuilder::Float32(v) => v.push(None),
                ColumnBuilder::Float64(v) => v.push(None),
                ColumnBuilder::Boolean(v) => v.push(None),
                ColumnBuilder::String(v) => v.push(None),
            }
            return Ok(());
        }
        match self {
            ColumnBuilder::Int32(v) => v.push(Some(parse_field(raw, "int32", column, row)?)),
            ColumnBuilder::Int64(v) => v.push(Some(parse_field(raw, "int64", column, row)?)),
            ColumnBuilder::Float32(v) => v.push(Some(parse_field(raw, "float32", column, row)?)),
            ColumnBuilder::Float64(v) => v.push(Some(parse_field(raw, "float64", column, row)?)),
            ColumnBuilder::Boolean(v) => v.push(Some(parse_field(raw, "bool", column, row)?)),
            ColumnBuilder::String(v) => v.push(Some(raw.to_string())),
        }
        Ok(())
    }

    fn finish(self) -> Array {
        match self {
            ColumnBuilder::Int32(v) => Array::Int32(IntegerArray::from_options(v)),
            ColumnBuilder::Int64(v) => Array::Int64(IntegerArray::from_options(v)),
            ColumnBuilder::Float32(v) => Array::Float32(FloatArray::from_options(v)),
            ColumnBuilder::Float64(v) => Array::Float64(FloatArray::from_options(v)),
            ColumnBuilder::Boolean(v) => Array::Boolean(BooleanArray::from_options(v)),
            ColumnBuilder::String(v) => Array::String(StringArray::from_options(v)),
        }
    }
}

fn parse_field<T: std::str::FromStr>(
    raw: &str,
    target: &'static str,
    column: &str,
    row: usize,
) -> Result<T, MinvecError> {
    raw.parse::<T>().map_err(|_| MinvecError::TypeError {
        expected: target,
        found: "string",
        message: Some(format!(
            "column '{}', row {}: cannot parse '{}'",
            column, row, raw
        )),
    })
}

/// Reads `path` into one typed vector per schema column, in schema order.
pub fn read_csv<P: AsRef<Path>>(
    path: P,
    schema: &Schema,
) -> Result<Vec<(String, Array)>, MinvecError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| MinvecError::Io {
            message: e.to_string(),
        })?;

    let headers = reader
        .headers()
        .map_err(|e| MinvecError::Io {
            message: e.to_string(),
        })?
        .clone();

    // Schema column -> position in the file, if present.
    let positions: Vec<Option<usize>> = schema
        .iter()
        .map(|field| headers.iter().position(|h| h == field.name))
        .collect();

    let mut builders: Vec<Option<ColumnBuilder>> = schema
        .iter()
        .zip(&positions)
        .map(|(field, pos)| pos.map(|_| ColumnBuilder::new(field.dtype)))
        .collect();

    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| MinvecError::Io {
            message: e.to_string(),
        })?;
        for ((field, pos), builder) in schema.iter().zip(&positions).zip(&mut builders) {
            if let (Some(pos), Some(builder)) = (pos, builder) {
                let raw = record.get(*pos).unwrap_or("");
                builder.push_field(raw, &field.name, row)?;
            }
        }
    }

    let out = schema
        .iter()
        .zip(builders)
        .map(|(field, builder)| {
            let array = match builder {
                Some(b) => b.finish(),
                // Declared column missing from the file: empty, typed.
                None => Array::empty(field.dtype),
            };
            (field.name.clone(), array)
        })
        .collect();
    Ok(out)
}
