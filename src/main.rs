//! Head navigation engine replay tool.
//!
//! Replays a recorded head-pose trace through the engine and reports the
//! selection events and final target state, demonstrating the engine's
//! deterministic tick loop.

use anyhow::Result;
use clap::Parser;
use head_nav::config::{Config, EXAMPLE_CONFIG};
use head_nav::dispatch::CapabilityTag;
use head_nav::engine::{NavEngine, SelectionMode};
use head_nav::face_alignment::FaceCandidate;
use head_nav::pose::{EulerAngles, Pose};
use head_nav::Error;
use log::info;
use nalgebra::Vector3;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pose trace to replay (CSV rows: dt,px,py,pz,pitch,yaw,roll)
    #[arg(short, long)]
    trace: Option<String>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Selection mode (gaze, explicit)
    #[arg(short, long, default_value = "gaze")]
    mode: String,

    /// Print an example configuration file and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    if args.print_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    let config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {config_path}");
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {e}. Using defaults.");
                Config::default()
            }
        }
    } else {
        Config::default()
    };
    config.validate()?;

    let mode = match args.mode.as_str() {
        "gaze" => SelectionMode::Gaze,
        "explicit" => SelectionMode::Explicit,
        other => return Err(Error::InvalidInput(format!("Unknown selection mode: {other}")).into()),
    };

    let trace_path = args
        .trace
        .ok_or_else(|| Error::InvalidInput("No pose trace supplied (use --trace)".to_string()))?;
    let trace = load_trace(&trace_path)?;
    info!("Replaying {} pose samples from {trace_path}", trace.len());

    let mut engine = NavEngine::new(config, demo_faces());
    engine.set_mode(mode);

    let mut selections = 0;
    let mut final_scale = 1.0;
    for (pose, dt) in &trace {
        let output = engine.tick(pose, *dt);
        final_scale = output.target.scale;
        if let Some(event) = output.selection {
            selections += 1;
            println!(
                "t={:8.3}s  selected '{}' ({:?})  notifications: {:?}",
                event.timestamp, event.face_id, event.tag, output.notifications
            );
        }
    }

    let flags = engine.flags();
    println!("---");
    println!("Replayed {} ticks over {:.3}s", trace.len(), engine.clock());
    println!("Selections fired: {selections}");
    println!("Target scale: {final_scale:.3}");
    println!(
        "Flags: light={} music={} night={} tv={} red={}",
        flags.light_on, flags.music_on, flags.night_mode, flags.tv_on, flags.red_ambience
    );

    Ok(())
}

/// The six faces of the demo cube, two units ahead of the tracking origin
fn demo_faces() -> Vec<FaceCandidate> {
    let center = Vector3::new(0.0, 0.0, 2.0);
    let half = 0.5;
    vec![
        FaceCandidate::new("ButtonLight", -Vector3::z(), center - Vector3::z() * half, CapabilityTag::Light),
        FaceCandidate::new("ButtonSound", Vector3::z(), center + Vector3::z() * half, CapabilityTag::Sound),
        FaceCandidate::new("ButtonNight", -Vector3::x(), center - Vector3::x() * half, CapabilityTag::Night),
        FaceCandidate::new("ButtonTV", Vector3::x(), center + Vector3::x() * half, CapabilityTag::Tv),
        FaceCandidate::new("ButtonRed", Vector3::y(), center + Vector3::y() * half, CapabilityTag::Ambience),
        FaceCandidate::new(
            "ButtonInstructions",
            -Vector3::y(),
            center - Vector3::y() * half,
            CapabilityTag::Instructions,
        ),
    ]
}

/// Parse a pose trace file: one `dt,px,py,pz,pitch,yaw,roll` row per line,
/// with `#` comments and blank lines ignored
fn load_trace(path: &str) -> head_nav::Result<Vec<(Pose, f64)>> {
    let content = std::fs::read_to_string(path)?;
    let mut trace = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        trace.push(parse_trace_line(line).map_err(|e| Error::TraceError(format!("line {}: {e}", line_no + 1)))?);
    }
    Ok(trace)
}

fn parse_trace_line(line: &str) -> std::result::Result<(Pose, f64), String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 7 {
        return Err(format!("expected 7 fields, got {}", fields.len()));
    }
    let mut values = [0.0_f64; 7];
    for (value, field) in values.iter_mut().zip(&fields) {
        *value = field.parse::<f64>().map_err(|e| format!("'{field}': {e}"))?;
        if !value.is_finite() {
            return Err(format!("non-finite value '{field}'"));
        }
    }
    let dt = values[0];
    if dt < 0.0 {
        return Err(format!("invalid dt {dt}"));
    }
    let pose = Pose::new(
        Vector3::new(values[1], values[2], values[3]),
        EulerAngles::new(values[4], values[5], values[6]),
    );
    Ok((pose, dt))
}
