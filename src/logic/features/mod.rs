//! Features Module - raw payload to model-ready vector
//!
//! coerce → engineer → vector, with `layout` as the schema they share.

pub mod coerce;
pub mod engineer;
pub mod layout;
pub mod vector;

pub use coerce::{coerce, parse_finite, Coerced};
pub use engineer::{FeatureMap, PlanetInputs, RawInput, StarType};
pub use layout::{
    feature_index, layout_hash, validate_layout, LayoutInfo, LayoutMismatchError,
    FEATURE_COUNT, FEATURE_VERSION, MODEL_FEATURES,
};
pub use vector::FeatureVector;
