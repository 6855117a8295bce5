use anyhow::{bail, Context, Result};
use planar::cfg::COORDINATE_MAX;
use planar::Point;
use polars::prelude::*;
use std::path::Path;

/// Parse `x,y` from the command line.
pub fn parse_point(s: &str) -> std::result::Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<i32>()
            .map_err(|e| format!("bad coordinate `{v}`: {e}"))
    };
    let p = Point::new(parse(x)?, parse(y)?);
    if i64::from(p.x).abs() > i64::from(COORDINATE_MAX)
        || i64::from(p.y).abs() > i64::from(COORDINATE_MAX)
    {
        return Err(format!("`{s}` is outside ±{COORDINATE_MAX}"));
    }
    Ok(p)
}

fn scan(path: &Path) -> Result<LazyFrame> {
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()?,
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
        other => bail!("unsupported input format {other:?} (expected .csv or .parquet)"),
    };
    Ok(lf)
}

fn coordinate(v: Option<i64>, axis: &str, row: usize) -> Result<i32> {
    let Some(v) = v else {
        bail!("row {row}: missing `{axis}`");
    };
    if v.abs() > i64::from(COORDINATE_MAX) {
        bail!("row {row}: `{axis}` = {v} is outside ±{COORDINATE_MAX}");
    }
    Ok(v as i32)
}

/// Read a point table with integer columns `x` and `y` (CSV or Parquet).
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let df = scan(path)?
        .select([
            col("x").cast(DataType::Int64),
            col("y").cast(DataType::Int64),
        ])
        .collect()
        .with_context(|| format!("reading columns x,y from {}", path.display()))?;
    let xs = df.column("x")?.i64()?;
    let ys = df.column("y")?.i64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, (x, y))| Ok(Point::new(coordinate(x, "x", row)?, coordinate(y, "y", row)?)))
        .collect()
}
