//! # **Minvec** - *Nullable, Multi-Dtype Typed Vector Engine*
//!
//! Flat, cache-friendly typed vectors (`Int32`, `Int64`, `Float32`, `Float64`,
//! `Bool`, `String`) with per-element validity tracking and SQL-style null
//! semantics:
//!
//! - Genuine Kleene three-valued logic for boolean combination and reduction,
//!   alongside plain null-propagating elementwise comparison.
//! - A complete casting matrix between every dtype pair, including string
//!   parsing and canonical formatting.
//! - In-place sort with a documented nulls-last rule, set-like `unique`,
//!   boolean-mask `filter` and positional `take`.
//! - A `select` / case-when evaluator that rejects ambiguous null-driven
//!   branch selection instead of silently defaulting.
//! - Schema-driven CSV ingestion with per-column null detection.
//!
//! Every buffer is a dense `Vec`; null slots hold a fixed placeholder and are
//! tracked by a bit-packed [`Bitmask`] (LSB-first, 1 = valid). The
//! [`IndexArray`] is the one non-nullable variant and exists purely as a
//! gather key.

pub mod enums {
    pub mod array;
    pub mod dtype;
    pub mod error;
    pub mod scalar;
}

pub mod structs {
    pub mod bitmask;
    pub mod field;
    pub mod variants {
        pub mod boolean;
        pub mod float;
        pub mod index;
        pub mod integer;
        pub mod string;
    }
}

pub mod traits {
    pub mod masked_array;
    pub mod print;
    pub mod type_unions;
}

pub mod kernels {
    pub mod aggregate;
    pub mod arithmetic;
    pub mod compare;
    pub mod logic;
    pub mod select;
    pub mod sort;
}

pub mod io {
    pub mod csv;
}

pub mod conversions;
pub mod macros;
pub mod utils;

pub use enums::array::Array;
pub use enums::dtype::DType;
pub use enums::error::MinvecError;
pub use enums::scalar::Scalar;
pub use io::csv::read_csv;
pub use kernels::select::{CaseWhen, select, select_typed};
pub use structs::bitmask::Bitmask;
pub use structs::field::{Field, Schema};
pub use structs::variants::boolean::BooleanArray;
pub use structs::variants::float::FloatArray;
pub use structs::variants::index::IndexArray;
pub use structs::variants::integer::IntegerArray;
pub use structs::variants::string::StringArray;
pub use traits::masked_array::MaskedArray;
pub use traits::print::Print;
pub use traits::type_unions::{Float, Integer, Numeric};
