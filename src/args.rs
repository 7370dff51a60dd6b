//! Command line arguments

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use crate::war::{locator, Coordinate, GameConfig, Launch};

#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(short, long)]
    pub ui: Option<Ui>,

    /// Your name. Prompted for when omitted.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Mock latitude, in degrees.
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Mock longitude, in degrees.
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lng: Option<f64>,

    /// Seed for reproducible shuffles.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Rounds per match.
    #[arg(long)]
    pub rounds: Option<u32>,

    /// Time units between automatic flips.
    #[arg(long)]
    pub cadence: Option<u32>,

    /// Length of one time unit, in milliseconds.
    #[arg(long)]
    pub unit_ms: Option<u64>,

    /// JSON file with match configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the match log to this JSON file when the match is over.
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Turn sound effects off.
    #[arg(long)]
    pub mute: bool,

    /// Print a saved match log instead of playing.
    #[arg(long, value_name = "FILE")]
    pub replay: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum Ui {
    Console,
    #[default]
    Tui,
}

impl Args {
    /// Layers the configuration file and flags over the defaults.
    pub fn config(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };
        if let Some(rounds) = self.rounds {
            config = config.with_max_rounds(rounds);
        }
        if let Some(cadence) = self.cadence {
            config = config.with_cadence(cadence);
        }
        if let Some(unit_ms) = self.unit_ms {
            config = config.with_unit_ms(unit_ms);
        }
        config.validate().context("invalid configuration")
    }

    pub fn into_launch(self) -> anyhow::Result<Launch> {
        let config = self.config()?;
        let mock = self.lat.zip(self.lng).map(|(lat, lng)| Coordinate::new(lat, lng));
        Ok(Launch {
            config,
            name: self.name,
            locator: locator(mock),
            seed: self.seed,
            save: self.save,
            mute: self.mute,
        })
    }
}
