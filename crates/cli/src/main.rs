use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use planar::cfg::{self, Precision, CEILINGS};
use planar::stress::{run_all, StressCfg};
use planar::{
    calc_bounding_rectangle, calc_bounding_rectangle_rotated, calc_line, calc_line_wide,
    calc_polygon_balance_point, intersect_line_segments, intersect_line_segments_wide,
    intersect_line_with_line_segment, intersect_line_with_line_segment_wide, intersect_lines,
    intersect_lines_wide, polygon_is_convex, Point, Rectangle,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod provenance;

use points::{parse_point, read_points};
use provenance::{ensure_parent, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Integer plane geometry: intersections, bounds and precision checks")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Intersect two lines or segments given by four points
    Intersect {
        #[arg(long, value_enum)]
        mode: Mode,
        /// Four points `x,y`: first pair, then second pair
        #[arg(long, required = true, num_args = 4, value_parser = parse_point, allow_hyphen_values = true)]
        points: Vec<Point>,
        #[arg(long, value_enum, default_value_t = PrecisionArg::Auto)]
        precision: PrecisionArg,
    },
    /// Bounding rectangle, balance point and convexity of a point table
    Bounds {
        /// CSV or Parquet file with integer columns `x`, `y`
        #[arg(long)]
        input: PathBuf,
        /// Also report bounds after rotating about the balance point (degrees)
        #[arg(long, allow_hyphen_values = true)]
        angle: Option<f64>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Count narrow/wide disagreements for every narrow primitive
    Stress {
        #[arg(long, default_value_t = StressCfg::default().scale)]
        scale: i32,
        #[arg(long, default_value_t = StressCfg::default().samples)]
        samples: u32,
        #[arg(long, default_value_t = StressCfg::default().seed)]
        seed: u64,
        /// Write the reports here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the narrow-overload ceiling table
    Thresholds,
}

#[derive(Clone, Copy, Debug, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
enum Mode {
    Lines,
    Segments,
    LineSegment,
}

impl Mode {
    fn ceiling(self) -> i32 {
        match self {
            Mode::Lines => cfg::INTERSECT_LINES_MAX,
            Mode::Segments => cfg::INTERSECT_LINE_SEGMENTS_MAX,
            Mode::LineSegment => cfg::INTERSECT_LINE_WITH_LINE_SEGMENT_MAX,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PrecisionArg {
    Auto,
    Narrow,
    Wide,
}

#[derive(Serialize)]
struct IntersectOut {
    mode: Mode,
    precision: Precision,
    x: i32,
    y: i32,
    valid: bool,
}

#[derive(Serialize)]
struct BoundsOut {
    count: usize,
    bounding_rectangle: Option<Rectangle>,
    balance_point: Option<Point>,
    convex: bool,
    angle: Option<f64>,
    rotated_bounding_rectangle: Option<Rectangle>,
}

#[derive(Serialize)]
struct CeilingRow {
    function: &'static str,
    ceiling: i32,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Intersect {
            mode,
            points,
            precision,
        } => intersect(mode, &points, precision),
        Action::Bounds { input, angle, out } => bounds(&input, angle, &out),
        Action::Stress {
            scale,
            samples,
            seed,
            out,
        } => stress(
            StressCfg {
                scale,
                samples,
                seed,
            },
            out.as_deref(),
        ),
        Action::Thresholds => thresholds(),
    }
}

fn intersect(mode: Mode, pts: &[Point], precision: PrecisionArg) -> Result<()> {
    let &[p1, p2, p3, p4] = pts else {
        bail!("expected exactly 4 points, got {}", pts.len());
    };
    let precision = match precision {
        PrecisionArg::Auto => Precision::for_points(pts, mode.ceiling()),
        PrecisionArg::Narrow => Precision::Narrow,
        PrecisionArg::Wide => Precision::Wide,
    };
    tracing::info!(mode = ?mode, precision = ?precision, ceiling = mode.ceiling(), "intersect");
    if precision == Precision::Narrow
        && cfg::max_abs_coordinate(pts) > i64::from(mode.ceiling())
    {
        tracing::warn!(
            ceiling = mode.ceiling(),
            "narrow overload requested above its ceiling; result is unspecified"
        );
    }
    let r = match (mode, precision) {
        (Mode::Lines, Precision::Narrow) => intersect_lines(calc_line(p1, p2), calc_line(p3, p4)),
        (Mode::Lines, Precision::Wide) => {
            intersect_lines_wide(calc_line_wide(p1, p2), calc_line_wide(p3, p4))
        }
        (Mode::Segments, Precision::Narrow) => intersect_line_segments(p1, p2, p3, p4),
        (Mode::Segments, Precision::Wide) => intersect_line_segments_wide(p1, p2, p3, p4),
        (Mode::LineSegment, Precision::Narrow) => intersect_line_with_line_segment(p1, p2, p3, p4),
        (Mode::LineSegment, Precision::Wide) => {
            intersect_line_with_line_segment_wide(p1, p2, p3, p4)
        }
    };
    let out = IntersectOut {
        mode,
        precision,
        x: r.x,
        y: r.y,
        valid: r.is_valid(),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn bounds(input: &Path, angle: Option<f64>, out: &Path) -> Result<()> {
    let pts = read_points(input)?;
    tracing::info!(input = %input.display(), count = pts.len(), "bounds");
    let balance = calc_polygon_balance_point(&pts);
    let rotated = match angle {
        Some(a) => calc_bounding_rectangle_rotated(&pts, balance, a)
            .with_context(|| format!("rotating by {a} degrees"))?,
        None => None,
    };
    let result = BoundsOut {
        count: pts.len(),
        bounding_rectangle: calc_bounding_rectangle(&pts),
        balance_point: balance.is_valid().then_some(balance),
        convex: polygon_is_convex(&pts),
        angle,
        rotated_bounding_rectangle: rotated,
    };

    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&result)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let params = serde_json::json!({
        "input": input.to_string_lossy(),
        "angle": angle,
    });
    let sidecar = write_sidecar(out, Payload::new("bounds", params))?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote");
    Ok(())
}

fn stress(stress_cfg: StressCfg, out: Option<&Path>) -> Result<()> {
    tracing::info!(
        scale = stress_cfg.scale,
        samples = stress_cfg.samples,
        seed = stress_cfg.seed,
        "stress"
    );
    let reports = run_all(&stress_cfg)?;
    for r in &reports {
        if r.within_ceiling && r.mismatches > 0 {
            tracing::warn!(
                primitive = r.name,
                mismatches = r.mismatches,
                "narrow overload disagrees within its ceiling"
            );
        } else {
            tracing::info!(
                primitive = r.name,
                ceiling = r.ceiling,
                within_ceiling = r.within_ceiling,
                mismatches = r.mismatches,
                "agreement"
            );
        }
    }
    match out {
        Some(path) => {
            ensure_parent(path)?;
            std::fs::write(path, serde_json::to_vec_pretty(&reports)?)
                .with_context(|| format!("writing {}", path.display()))?;
            write_sidecar(path, Payload::new("stress", serde_json::to_value(stress_cfg)?))?;
        }
        None => println!("{}", serde_json::to_string_pretty(&reports)?),
    }
    Ok(())
}

fn thresholds() -> Result<()> {
    let rows: Vec<CeilingRow> = CEILINGS
        .iter()
        .map(|&(function, ceiling)| CeilingRow { function, ceiling })
        .collect();
    let doc = serde_json::json!({
        "coordinate_max": cfg::COORDINATE_MAX,
        "ceilings": rows,
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
