/// Data layer: decoding and derived series.
///
/// Architecture:
/// ```text
///   raw .bin file
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  size checks → bytes → Vec<i16>
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ transform  │  difference (i32), integrate (i64)
///   └───────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ SeriesBundle  │  Value / Differential / Integrate
///   └──────────────┘
/// ```

pub mod error;
pub mod loader;
pub mod model;
pub mod transform;
