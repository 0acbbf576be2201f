use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use meshcheck::api::{check_topology_with, CheckCfg, CheckMode, MeshSnapshot, Segment};
use nalgebra::Point3;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

#[derive(Parser)]
#[command(name = "meshcheck-cli")]
#[command(about = "Mesh topology checks and segment queries")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Verify the adjacency relations of a JSON mesh snapshot
    Check {
        #[arg(long)]
        input: PathBuf,
        /// Record every violation instead of stopping at the first
        #[arg(long)]
        exhaustive: bool,
        /// Cap on recorded violations (implies --exhaustive)
        #[arg(long)]
        max: Option<usize>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate segment queries; points are given as `x,y,z`
    Segment {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        first: Point3<f64>,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        second: Point3<f64>,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        point: Option<Point3<f64>>,
    },
    /// Print a small version JSON block
    Report,
}

fn main() -> Result<ExitCode> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Check {
            input,
            exhaustive,
            max,
            json,
        } => {
            let cfg = CheckCfg {
                mode: if exhaustive || max.is_some() {
                    CheckMode::Exhaustive
                } else {
                    CheckMode::FailFast
                },
                max_violations: max,
            };
            let (out, valid) = check(&input, &cfg, json)?;
            print!("{out}");
            Ok(if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Action::Segment {
            first,
            second,
            point,
        } => {
            print!("{}", segment(first, second, point)?);
            Ok(ExitCode::SUCCESS)
        }
        Action::Report => {
            println!("{}", report()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn parse_point(s: &str) -> Result<Point3<f64>, String> {
    let coords = s
        .split(',')
        .map(|c| c.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("bad coordinate in `{s}`: {e}"))?;
    match coords.as_slice() {
        &[x, y, z] => Ok(Point3::new(x, y, z)),
        _ => Err(format!("expected 3 comma-separated coordinates, got `{s}`")),
    }
}

fn load_snapshot(path: &Path) -> Result<MeshSnapshot> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let snapshot: MeshSnapshot = serde_json::from_str(&text)
        .with_context(|| format!("parsing mesh snapshot {}", path.display()))?;
    let errors = snapshot.shape_errors();
    if !errors.is_empty() {
        let list: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        bail!(
            "malformed snapshot {}: {}",
            path.display(),
            list.join("; ")
        );
    }
    Ok(snapshot)
}

/// Run the verifier; returns the rendered report and whether the mesh is valid.
fn check(input: &Path, cfg: &CheckCfg, json: bool) -> Result<(String, bool)> {
    tracing::info!(input = %input.display(), mode = ?cfg.mode, "check");
    let snapshot = load_snapshot(input)?;
    let report = check_topology_with(&snapshot, cfg);
    let valid = report.is_valid();
    let out = if json {
        let mut s = serde_json::to_string_pretty(&report)?;
        s.push('\n');
        s
    } else {
        report.to_string()
    };
    Ok((out, valid))
}

fn segment(first: Point3<f64>, second: Point3<f64>, point: Option<Point3<f64>>) -> Result<String> {
    let s = Segment::new(first, second);
    tracing::debug!(%s, "segment");
    let mut out = String::new();
    write!(out, "segment: {s}")?;
    writeln!(out, "length: {}", s.length())?;
    let d = s.dir();
    writeln!(out, "dir: {} {} {}", d.x, d.y, d.z)?;
    match s.to_planes() {
        Ok(planes) => {
            for (i, pl) in planes.iter().enumerate() {
                writeln!(
                    out,
                    "plane {i}: n = {} {} {}, offset = {}",
                    pl.n.x,
                    pl.n.y,
                    pl.n.z,
                    pl.offset()
                )?;
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "no plane decomposition");
            writeln!(out, "planes: {e}")?;
        }
    }
    if let Some(p) = point {
        let c = s.closest_point(p);
        writeln!(out, "distance: {}", s.dist_to_point(p))?;
        writeln!(out, "closest: {} {} {}", c.x, c.y, c.z)?;
        writeln!(out, "in_between: {}", s.is_in_between(p))?;
    }
    Ok(out)
}

fn report() -> Result<String> {
    let rev = option_env!("GIT_COMMIT").unwrap_or("unknown");
    let obj = serde_json::json!({
        "code_rev": rev,
        "meshcheck": meshcheck::VERSION,
    });
    Ok(serde_json::to_string_pretty(&obj)?)
}
