//! JSON persistence for completion-time statistics
//!
//! A missing file reads back as empty stats; everything else propagates.

use std::io::ErrorKind;
use std::path::Path;

use wirehack_engine::TimeStats;

pub fn load_stats(path: &Path) -> Result<TimeStats, Box<dyn std::error::Error>> {
    match std::fs::read_to_string(path) {
        Ok(json) => Ok(serde_json::from_str(&json)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(TimeStats::default()),
        Err(e) => Err(e.into()),
    }
}

pub fn save_stats(path: &Path, stats: &TimeStats) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(stats)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_as_empty_stats() {
        let stats = load_stats(Path::new("definitely/not/here.json")).unwrap();
        assert!(stats.entries.is_empty());
    }

    #[test]
    fn test_round_trip_through_a_temp_file() {
        let mut stats = TimeStats::default();
        stats.record(2, 4, 6, 31.5);

        let path = std::env::temp_dir().join("wirehack-stats-test.json");
        save_stats(&path, &stats).unwrap();
        let restored = load_stats(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(restored.get(2, 4, 6), stats.get(2, 4, 6));
    }
}
