use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::io::Read;

use crate::utils::error::Result;

/// Tabular statistics as published by the source: column order and cell text are
/// preserved exactly so the CSV written back out has the source's native schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// Parses CSV with a header row. Rows whose width differs from the header are an error.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

        let columns = rdr.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { columns, rows })
    }

    pub fn to_csv_bytes(&self) -> Result<Vec<u8>> {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(&self.columns)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.into_inner().map_err(|e| e.into_error().into())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// One row viewed as column name -> value.
    pub fn record(&self, index: usize) -> Option<HashMap<&str, &str>> {
        let row = self.rows.get(index)?;
        Some(
            self.columns
                .iter()
                .map(String::as_str)
                .zip(row.iter().map(String::as_str))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    #[value(name = "player")]
    #[serde(rename = "player")]
    PlayerStats,
    #[value(name = "team")]
    #[serde(rename = "team")]
    TeamStats,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 2] = [DatasetKind::PlayerStats, DatasetKind::TeamStats];

    /// Output file written in the export directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::PlayerStats => "playerdata.csv",
            Self::TeamStats => "teamdata.csv",
        }
    }

    /// nflverse release tag the statistics are published under.
    pub fn release(&self) -> &'static str {
        match self {
            Self::PlayerStats => "stats_player",
            Self::TeamStats => "stats_team",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PlayerStats => "player stats",
            Self::TeamStats => "team stats",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum SummaryLevel {
    #[default]
    #[value(name = "week")]
    #[serde(rename = "week")]
    Week,
    #[value(name = "reg")]
    #[serde(rename = "reg")]
    Regular,
    #[value(name = "post")]
    #[serde(rename = "post")]
    Post,
    #[value(name = "reg+post")]
    #[serde(rename = "reg+post")]
    RegularAndPost,
}

impl SummaryLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Regular => "reg",
            Self::Post => "post",
            Self::RegularAndPost => "reg+post",
        }
    }

    /// Token used in published file names, where `reg+post` loses its plus sign.
    pub fn file_token(&self) -> &'static str {
        match self {
            Self::RegularAndPost => "regpost",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for SummaryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
