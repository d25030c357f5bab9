//! ephem: print the daily planet table for an observer
//!
//! ```text
//! ephem --date 2024-06-21 --lat 59.91 --lon 10.75 --tz 2
//! EPHEM_LAT=59.91 EPHEM_LON=10.75 ephem --days 7 --all-bodies
//! ```

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use log::LevelFilter;

use ephemeris::ephemeris::Ephemeris;
use ephemeris::forecast::Forecast;
use ephemeris::observer::Observer;
use ephemeris::orbital_elements::Body;
use ephemeris::time::CalendarDate;

fn init_logger(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    } else if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(LevelFilter::Warn);
    }
    let _ = builder.try_init();
}

fn print_day(eph: &Ephemeris, cli: &Cli) {
    let table = eph.report();
    if cli.all_bodies {
        print!("{}", table.with_luminaries());
    } else {
        print!("{table}");
    }

    if cli.horizon {
        let lst = eph.local_sidereal_time();
        println!("Local sidereal time (0h UT): {lst:.4} h");
        for body in Body::ALL {
            let h = eph.alt_az(body, lst);
            println!("{:<7}  alt {:>8.3}°  az {:>7.3}°", body.label(), h.altitude, h.azimuth);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let date = match &cli.date {
        Some(s) => s.parse::<CalendarDate>()?,
        None => CalendarDate::today().context("Cannot read the system clock")?,
    };
    let observer = Observer::new(cli.lat, cli.lon, cli.tz)?;
    log::debug!("{date} at {observer:?}");

    let forecast = Forecast::new(date, cli.days, observer)
        .with_context(|| format!("Cannot compute {} day(s) from {date}", cli.days))?;

    if cli.json {
        let out = if forecast.len() == 1 {
            serde_json::to_string_pretty(forecast.ephemerides().next().context("empty forecast")?)?
        } else {
            serde_json::to_string_pretty(&forecast)?
        };
        println!("{out}");
        return Ok(());
    }

    for (i, (date, eph)) in forecast.dates().zip(forecast.ephemerides()).enumerate() {
        if forecast.len() > 1 {
            if i > 0 {
                println!();
            }
            println!("{date}");
        }
        print_day(eph, &cli);
    }
    Ok(())
}
