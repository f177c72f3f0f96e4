//! Dataset - static planet table loaded once at startup

use std::path::Path;

use crate::models::PlanetRecord;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset not found: {0}")]
    NotFound(String),

    #[error("failed to read dataset: {0}")]
    Csv(#[from] csv::Error),
}

/// Read-only planet rows
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Vec<PlanetRecord>,
    /// Records without a usable `Name` or `Habitable` cell
    rejected: usize,
}

impl Dataset {
    pub fn new(rows: Vec<PlanetRecord>) -> Self {
        Self { rows, rejected: 0 }
    }

    /// Load a CSV with a header row. Bad numeric cells are kept as missing
    /// values; a record is rejected only when `Name` or `Habitable` is
    /// unusable, and still counts toward `total()`.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        if !path.exists() {
            return Err(DatasetError::NotFound(path.display().to_string()));
        }

        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
        let mut rows = Vec::new();
        let mut rejected = 0usize;

        for record in reader.deserialize::<PlanetRecord>() {
            match record {
                Ok(row) => rows.push(row),
                Err(e) => {
                    rejected += 1;
                    tracing::debug!("Rejected dataset row: {}", e);
                }
            }
        }

        if rejected > 0 {
            tracing::warn!("{} rows in {} lack Name or Habitable", rejected, path.display());
        }

        Ok(Self { rows, rejected })
    }

    pub fn save(&self, path: &Path) -> Result<(), DatasetError> {
        let mut writer = csv::Writer::from_path(path)?;
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    pub fn rows(&self) -> &[PlanetRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Every record read, rejected ones included
    pub fn total(&self) -> usize {
        self.rows.len() + self.rejected
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn habitable_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_habitable()).count()
    }
}
