// Test utility module for qualitylens integration tests
#![allow(dead_code)]

use qualitylens::{Grade, Measured, MetricsSnapshot, Rating};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data/fixtures")
        .join(name)
}

/// Snapshot with the three gated ratings given as numerics.
pub fn snapshot_with_numeric(maintainability: f64, reliability: f64, security: f64) -> MetricsSnapshot {
    MetricsSnapshot::with_ratings(
        Rating::Numeric(maintainability),
        Rating::Numeric(reliability),
        Rating::Numeric(security),
    )
}

/// Builder for snapshots in tests.
#[derive(Debug, Clone, Default)]
pub struct SnapshotBuilder {
    snapshot: MetricsSnapshot,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ratings(mut self, maintainability: Grade, reliability: Grade, security: Grade) -> Self {
        self.snapshot.maintainability.rating = maintainability.into();
        self.snapshot.reliability.rating = reliability.into();
        self.snapshot.security.rating = security.into();
        self
    }

    pub fn debt_ratio(mut self, ratio: f64) -> Self {
        self.snapshot.maintainability.debt_ratio = Measured::Value(ratio);
        self
    }

    pub fn coverage(mut self, coverage: f64) -> Self {
        self.snapshot.coverage.overall = Measured::Value(coverage);
        self
    }

    pub fn duplication(mut self, density: f64) -> Self {
        self.snapshot.duplication.density = Measured::Value(density);
        self
    }

    pub fn new_code_defects(mut self, bugs: u64, vulnerabilities: u64) -> Self {
        self.snapshot.new_code.bugs = bugs;
        self.snapshot.new_code.vulnerabilities = vulnerabilities;
        self
    }

    pub fn build(self) -> MetricsSnapshot {
        self.snapshot
    }
}

/// Write `contents` to a file in a fresh temp dir.
pub fn write_input(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.json");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}
