//! ringfifo soak driver
//!
//! Fills a large ring to capacity, drains half, refills, drains everything and
//! checks every intermediate length, free-space and ordering result. Repeated
//! rounds run on the same ring so the cursors wrap through the store.
//!
//! Usage:
//!   ringfifo-soak --slots 1000000 --rounds 4 --width u32

mod soak;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::soak::SoakReport;

#[derive(Parser, Debug)]
#[command(name = "ringfifo-soak")]
#[command(version)]
#[command(about = "Fill/drain soak test and timer for the ringfifo ring buffer")]
struct Args {
    /// Physical slot count (usable capacity is one less)
    #[arg(long, default_value_t = 1_000_000)]
    slots: usize,

    /// Number of fill/drain rounds on the same ring
    #[arg(long, default_value_t = 1)]
    rounds: u32,

    /// Cursor integer width
    #[arg(long, value_enum, default_value_t = Width::Usize)]
    width: Width,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Width {
    U8,
    U16,
    U32,
    U64,
    Usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    log::info!("Configuration:");
    log::info!("  Slots:  {}", args.slots);
    log::info!("  Rounds: {}", args.rounds);
    log::info!("  Width:  {:?}", args.width);

    let report = match args.width {
        Width::U8 => soak::run::<u8>(args.slots, args.rounds)?,
        Width::U16 => soak::run::<u16>(args.slots, args.rounds)?,
        Width::U32 => soak::run::<u32>(args.slots, args.rounds)?,
        Width::U64 => soak::run::<u64>(args.slots, args.rounds)?,
        Width::Usize => soak::run::<usize>(args.slots, args.rounds)?,
    };

    print_report(&report);
    Ok(())
}

fn print_report(report: &SoakReport) {
    let secs = report.elapsed.as_secs_f64();

    log::info!("");
    log::info!("✓ Soak passed");
    log::info!("  Capacity:    {}", report.capacity);
    log::info!("  Transferred: {} elements", report.transferred);
    log::info!("  Elapsed:     {:.6} s", secs);
    if secs > 0.0 {
        log::info!(
            "  Rate:        {:.1} M elements/s",
            report.transferred as f64 / secs / 1e6
        );
    }
}
