/// Data layer: core types, loading, filtering and chart aggregation.
///
/// Architecture:
/// ```text
///  .csv / .tsv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset (read-only from here on)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  site selection, then inclusive payload range
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  PieSpec + ScatterSpec for the renderer
///   └───────────┘
/// ```

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
