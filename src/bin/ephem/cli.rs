//! CLI argument definitions for ephem

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ephem")]
#[command(about = "Positions, rise and set times of the Sun, the Moon and the planets")]
#[command(version)]
pub struct Cli {
    /// Date to compute, YYYY-MM-DD (default: today, UTC)
    #[arg(long)]
    pub date: Option<String>,

    /// Observer latitude in degrees, north positive
    #[arg(long, env = "EPHEM_LAT", allow_negative_numbers = true)]
    pub lat: f64,

    /// Observer longitude in degrees, east positive
    #[arg(long, env = "EPHEM_LON", allow_negative_numbers = true)]
    pub lon: f64,

    /// Offset of local time from UTC, in hours
    #[arg(long, env = "EPHEM_TZ", default_value = "0", allow_negative_numbers = true)]
    pub tz: i32,

    /// Number of consecutive days to compute
    #[arg(long, default_value = "1")]
    pub days: u32,

    /// Include the Sun and the Moon in the table
    #[arg(long)]
    pub all_bodies: bool,

    /// Also print altitude and azimuth at the local sidereal time of 0h UT
    #[arg(long)]
    pub horizon: bool,

    /// Print JSON instead of the table
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
