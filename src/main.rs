// src/main.rs

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

use player_tracking::selector::select_candidates;
use player_tracking::stabilizer::PlayerStabilizer;
use player_tracking::stubs;
use player_tracking::types::Config;
use player_tracking::{CourtKeypoints, CourtRegion};

fn main() -> Result<()> {
    let config_path =
        std::env::var("PLAYER_TRACKING_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());
    let config = Config::load(&config_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!("player_tracking={}", config.logging.level))
        .init();

    info!("🎾 Player Track Stabilization Starting");
    info!("✓ Configuration loaded from {}", config_path);
    info!(
        "Filter thresholds: padding_ratio={:.2}, min_area={:.0}, max_vertical_fraction={:.2}",
        config.tracking.padding_ratio,
        config.tracking.min_area,
        config.tracking.max_vertical_fraction
    );

    let dumps = find_detection_dumps(&config.io.input_dir);
    if dumps.is_empty() {
        error!("No detection dumps found in {}", config.io.input_dir);
        return Ok(());
    }
    info!("Found {} detection dump(s) to process", dumps.len());

    std::fs::create_dir_all(&config.io.output_dir)?;

    for (idx, dump_path) in dumps.iter().enumerate() {
        info!(
            "Processing dump {}/{}: {}",
            idx + 1,
            dumps.len(),
            dump_path.display()
        );

        match process_dump(dump_path, &config) {
            Ok(stats) => {
                info!("✓ Dump processed");
                info!("  Total frames: {}", stats.total_frames);
                info!("  Frames before first lock: {}", stats.frames_before_lock);
                info!("  Fresh assignments: {}", stats.fresh_assignments);
                info!("  Held assignments: {}", stats.held_assignments);
            }
            Err(e) => error!("Failed to process {}: {}", dump_path.display(), e),
        }
    }

    Ok(())
}

struct DumpStats {
    total_frames: usize,
    frames_before_lock: usize,
    fresh_assignments: usize,
    held_assignments: usize,
}

fn find_detection_dumps(input_dir: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(input_dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "json"))
        .collect();
    files.sort();
    files
}

fn process_dump(dump_path: &Path, config: &Config) -> Result<DumpStats> {
    let dump = stubs::load_detections(dump_path)?;
    let keypoints = CourtKeypoints::from_flat(&dump.court_keypoints)?;
    let region = CourtRegion::from_keypoints(&keypoints, config.tracking.padding_ratio);
    debug!(
        "Court ROI: ({:.1}, {:.1}) - ({:.1}, {:.1}), center_y={:.1}",
        region.roi.x1, region.roi.y1, region.roi.x2, region.roi.y2, region.center_y
    );

    let dump_name = dump_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("dump");
    let out_path = Path::new(&config.io.output_dir).join(format!("{}_players.jsonl", dump_name));
    let mut out_file = File::create(&out_path)?;

    let mut stabilizer = PlayerStabilizer::new();
    let mut frames_before_lock = 0usize;
    let mut fresh_assignments = 0usize;
    let mut held_assignments = 0usize;

    for (index, frame) in dump.frames.iter().enumerate() {
        let candidates = select_candidates(frame, &region, &config.tracking)?;
        let is_fresh = candidates.len() == 2;
        let assignment = stabilizer.advance(index as u64, &candidates)?;

        match assignment {
            Some(_) if is_fresh => fresh_assignments += 1,
            Some(_) => held_assignments += 1,
            None => frames_before_lock += 1,
        }

        // Downstream consumers read the original label scheme:
        // 1 = near/bottom player, 2 = far/top player.
        let players = match assignment {
            Some(a) => serde_json::json!({ "1": a.near, "2": a.far }),
            None => serde_json::json!({}),
        };
        let line = serde_json::json!({ "frame": index, "players": players });
        writeln!(out_file, "{}", serde_json::to_string(&line)?)?;
    }

    if !stabilizer.is_locked() {
        warn!(
            "Never locked on two players across {} frame(s) in {}",
            dump.frames.len(),
            dump_path.display()
        );
    }

    info!("💾 Labeled frames written to {}", out_path.display());

    Ok(DumpStats {
        total_frames: dump.frames.len(),
        frames_before_lock,
        fresh_assignments,
        held_assignments,
    })
}
