use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use launch_dash::data::model::{
    BOOSTER_CATEGORY_COLUMN, CLASS_COLUMN, PAYLOAD_COLUMN, SITE_COLUMN,
};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Booster generations in flight order: category, success rate, max payload.
const BOOSTERS: [(&str, f64, f64); 5] = [
    ("v1.0", 0.0, 700.0),
    ("v1.1", 0.3, 4500.0),
    ("FT", 0.7, 6000.0),
    ("B4", 0.55, 9600.0),
    ("B5", 1.0, 4000.0),
];

const SITES: [&str; 4] = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];

struct Row {
    flight: i64,
    site: String,
    class: i64,
    payload: f64,
    booster_version: String,
    category: String,
}

fn generate(rng: &mut SimpleRng, flights_per_booster: i64) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut flight = 0;
    for &(category, success_rate, max_payload) in &BOOSTERS {
        for serial in 0..flights_per_booster {
            flight += 1;
            // Payloads rounded to whole hundreds of kg.
            let payload = (rng.next_f64() * max_payload / 100.0).round() * 100.0;
            let class = i64::from(rng.next_f64() < success_rate);
            rows.push(Row {
                flight,
                site: rng.pick(&SITES).to_string(),
                class,
                payload,
                booster_version: format!("F9 {category} B{:04}", 1000 + flight * 3 + serial),
                category: category.to_string(),
            });
        }
    }
    rows
}

fn write_csv(path: &str, rows: &[Row]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV output")?;
    writer.write_record([
        "Flight Number",
        SITE_COLUMN,
        CLASS_COLUMN,
        PAYLOAD_COLUMN,
        "Booster Version",
        BOOSTER_CATEGORY_COLUMN,
    ])?;
    for row in rows {
        writer.write_record([
            row.flight.to_string(),
            row.site.clone(),
            row.class.to_string(),
            format!("{:.1}", row.payload),
            row.booster_version.clone(),
            row.category.clone(),
        ])?;
    }
    writer.flush().context("flushing CSV output")?;
    Ok(())
}

fn write_parquet(path: &str, rows: &[Row]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Flight Number", DataType::Int64, false),
        Field::new(SITE_COLUMN, DataType::Utf8, false),
        Field::new(CLASS_COLUMN, DataType::Int64, false),
        Field::new(PAYLOAD_COLUMN, DataType::Float64, false),
        Field::new("Booster Version", DataType::Utf8, false),
        Field::new(BOOSTER_CATEGORY_COLUMN, DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.flight))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| &r.site))),
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.class))),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.payload))),
            Arc::new(StringArray::from_iter_values(
                rows.iter().map(|r| &r.booster_version),
            )),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| &r.category))),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet output")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let rows = generate(&mut rng, 12);

    write_csv("sample_launches.csv", &rows)?;
    write_parquet("sample_launches.parquet", &rows)?;
    println!("Wrote {} launches to sample_launches.{{csv,parquet}}", rows.len());
    Ok(())
}
