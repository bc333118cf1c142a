use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{
    Array, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray,
};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::error::DashError;
use super::model::{
    LaunchDataset, LaunchRecord, Outcome, BOOSTER_CATEGORY_COLUMN, CLASS_COLUMN,
    PAYLOAD_COLUMN, REQUIRED_COLUMNS, SITE_COLUMN,
};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`            – comma-separated, header row
/// * `.tsv` / `.tab`   – tab-separated, header row
/// * `.json`           – `[{ "Launch Site": ..., "class": 1, ... }, ...]`
/// * `.parquet`        – flat columns, as written by `df.to_parquet()`
///
/// Any read or schema problem becomes [`DashError::DataUnavailable`]; a file
/// without rows becomes [`DashError::EmptyDataset`].
pub fn load(path: &Path) -> Result<LaunchDataset, DashError> {
    let records = load_records(path).map_err(|e| DashError::DataUnavailable {
        path: path.to_path_buf(),
        reason: format!("{e:#}"),
    })?;

    let dataset = LaunchDataset::from_records(records)?;
    log::info!(
        "Loaded {} launches from {} ({} sites, payload {}..={} kg)",
        dataset.len(),
        path.display(),
        dataset.sites().len(),
        dataset.min_payload(),
        dataset.max_payload()
    );
    Ok(dataset)
}

fn load_records(path: &Path) -> Result<Vec<LaunchRecord>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_delimited(path, b',')?,
        "tsv" | "tab" => load_delimited(path, b'\t')?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    for (row, record) in records.iter().enumerate() {
        validate_payload(record.payload_mass_kg, row)?;
    }
    Ok(records)
}

fn validate_payload(payload: f64, row: usize) -> Result<()> {
    if !payload.is_finite() || payload < 0.0 {
        bail!("Row {row}: '{PAYLOAD_COLUMN}' must be a non-negative number, got {payload}");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Delimited text loader
// ---------------------------------------------------------------------------

/// Header row with column names; the required columns may appear in any
/// order among others (`Flight Number`, `Booster Version`, ...).
fn load_delimited(path: &Path, delimiter: u8) -> Result<Vec<LaunchRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_path(path)
        .context("opening delimited file")?;

    let headers = reader.headers().context("reading header row")?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            bail!("missing '{column}' column");
        }
    }

    reader
        .deserialize::<LaunchRecord>()
        .enumerate()
        .map(|(row_no, result)| result.with_context(|| format!("Row {row_no}")))
        .collect()
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 525.0,
///     "Booster Version Category": "v1.0",
///     "class": 0
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<LaunchRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = root
        .as_array()
        .context("Expected top-level JSON array")?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let obj = row
                .as_object()
                .with_context(|| format!("Row {i} is not a JSON object"))?;
            if let Some(column) = REQUIRED_COLUMNS.iter().find(|c| !obj.contains_key(**c)) {
                bail!("Row {i}: missing '{column}' column");
            }
            LaunchRecord::deserialize(row).with_context(|| format!("Row {i}"))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one flat column per field.
///
/// Accepted column types:
/// - `Launch Site`, `Booster Version Category`: Utf8 / LargeUtf8
/// - `Payload Mass (kg)`: Float64 / Float32 / Int64 / Int32
/// - `class`: Int64 / Int32 / Float64 holding 0 or 1
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Vec<LaunchRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;

    // Checked up front: a file without rows yields no batches to inspect.
    let schema = builder.schema();
    for column in REQUIRED_COLUMNS {
        if schema.column_with_name(column).is_none() {
            bail!("Parquet file missing '{column}' column");
        }
    }

    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let offset = records.len();
        read_batch(&batch, offset, &mut records)?;
    }
    Ok(records)
}

fn read_batch(batch: &RecordBatch, offset: usize, out: &mut Vec<LaunchRecord>) -> Result<()> {
    let column = |name: &str| {
        batch
            .column_by_name(name)
            .with_context(|| format!("Parquet file missing '{name}' column"))
    };

    let site_col = column(SITE_COLUMN)?;
    let payload_col = column(PAYLOAD_COLUMN)?;
    let booster_col = column(BOOSTER_CATEGORY_COLUMN)?;
    let class_col = column(CLASS_COLUMN)?;

    for row in 0..batch.num_rows() {
        let row_no = offset + row;
        let class = extract_f64(class_col, row)
            .with_context(|| format!("Row {row_no}: failed to read '{CLASS_COLUMN}'"))?;
        let outcome = Outcome::try_from(class)
            .with_context(|| format!("Row {row_no}: invalid '{CLASS_COLUMN}'"))?;

        out.push(LaunchRecord {
            site: extract_string(site_col, row)
                .with_context(|| format!("Row {row_no}: failed to read '{SITE_COLUMN}'"))?,
            payload_mass_kg: extract_f64(payload_col, row)
                .with_context(|| format!("Row {row_no}: failed to read '{PAYLOAD_COLUMN}'"))?,
            booster_version_category: extract_string(booster_col, row).with_context(|| {
                format!("Row {row_no}: failed to read '{BOOSTER_CATEGORY_COLUMN}'")
            })?,
            outcome,
        });
    }
    Ok(())
}

// -- Parquet / Arrow helpers --

fn extract_string(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value");
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).to_string())
        }
        DataType::LargeUtf8 => {
            let arr = col
                .as_string_opt::<i64>()
                .context("expected LargeStringArray")?;
            Ok(arr.value(row).to_string())
        }
        other => bail!("Expected Utf8 column, got {other:?}"),
    }
}

fn extract_f64(col: &Arc<dyn Array>, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value");
    }
    let any = col.as_any();
    let value = match col.data_type() {
        DataType::Float64 => any.downcast_ref::<Float64Array>().map(|a| a.value(row)),
        DataType::Float32 => any
            .downcast_ref::<Float32Array>()
            .map(|a| f64::from(a.value(row))),
        DataType::Int64 => any.downcast_ref::<Int64Array>().map(|a| a.value(row) as f64),
        DataType::Int32 => any
            .downcast_ref::<Int32Array>()
            .map(|a| f64::from(a.value(row))),
        other => bail!("Expected numeric column, got {other:?}"),
    };
    value.context("column array does not match its declared type")
}
