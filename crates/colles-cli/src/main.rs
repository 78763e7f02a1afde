//! `colles` CLI — build per-student colle calendars from a colloscope export.
//!
//! ## Usage
//!
//! ```sh
//! # Write one .ics per student into ./users
//! colles generate -c data/colloscope.json -r data/rooms.json
//!
//! # Keep overlapping colles instead of replacing them
//! colles generate -c data/colloscope.json --policy keep-both -o out
//!
//! # Print a single student's calendar
//! colles show -c data/colloscope.json --student 12
//!
//! # Report UIDs shared by several events
//! colles check -c data/colloscope.json --policy keep-both
//! ```
//!
//! Logging goes to stderr. `RUST_LOG` is honored; `-v` raises the default
//! level to info, `-vv` to debug.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colle_ical::{duplicate_uids, Encode, OverlapPolicy};
use colloscope::schedule::DEFAULT_SCHOOL_YEAR;
use colloscope::{parse_timezone, Colloscope, Room, ScheduleOptions};
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "colles",
    version,
    about = "Generate per-student colle calendars (.ics) from a colloscope export"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Args)]
struct InputArgs {
    /// Colloscope export (JSON)
    #[arg(short, long)]
    colloscope: PathBuf,
    /// Rooms table (JSON); events get no location if omitted
    #[arg(short, long)]
    rooms: Option<PathBuf>,
    /// IANA time zone the colle times are expressed in
    #[arg(long, default_value = "Europe/Paris")]
    timezone: String,
    /// Calendar year in which the school year starts
    #[arg(long, default_value_t = DEFAULT_SCHOOL_YEAR)]
    school_year: i32,
    /// What to do with overlapping colles: remove-first, remove-last, keep-both
    #[arg(long, default_value = "remove-first")]
    policy: OverlapPolicy,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one calendar file per student
    Generate {
        #[command(flatten)]
        input: InputArgs,
        /// Output directory (created if missing)
        #[arg(short, long, default_value = "users")]
        output: PathBuf,
    },
    /// Print the calendar of a single student
    Show {
        #[command(flatten)]
        input: InputArgs,
        /// Student id
        #[arg(long)]
        student: u64,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Report UIDs shared by several events of the same calendar
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate { input, output } => {
            let (colloscope, rooms, options) = load(&input)?;
            let calendars = colloscope::build_calendars(&colloscope, &rooms, &options)
                .context("Failed to build calendars")?;

            std::fs::create_dir_all(&output).with_context(|| {
                format!("Failed to create output directory: {}", output.display())
            })?;

            for student in &calendars {
                let path = output.join(&student.file_name);
                write_output(Some(&path), &student.calendar.encode())?;
                info!(path = %path.display(), events = student.calendar.len(), "calendar written");
                println!("{}: {} events", path.display(), student.calendar.len());
            }
        }
        Commands::Show {
            input,
            student,
            output,
        } => {
            let (colloscope, rooms, options) = load(&input)?;
            let student = colloscope
                .student(student)
                .context("Failed to find student")?;
            let calendar = colloscope::student_calendar(&colloscope, &rooms, student, &options)
                .context("Failed to build calendar")?;
            write_output(output.as_deref(), &calendar.encode())?;
        }
        Commands::Check { input } => {
            let (colloscope, rooms, options) = load(&input)?;
            let calendars = colloscope::build_calendars(&colloscope, &rooms, &options)
                .context("Failed to build calendars")?;

            let mut found = 0;
            for student in &calendars {
                for duplicate in duplicate_uids(student.calendar.events()) {
                    found += 1;
                    warn!(file = %student.file_name, uid = %duplicate.uid, "duplicate UID");
                    println!(
                        "{}: UID {} used by events {:?}",
                        student.file_name, duplicate.uid, duplicate.positions
                    );
                }
            }

            if found > 0 {
                anyhow::bail!("{} duplicate UID(s) found", found);
            }
            println!("No duplicate UIDs in {} calendars", calendars.len());
        }
    }

    Ok(())
}

/// Install the stderr subscriber. `RUST_LOG` directives are kept; the
/// verbosity flag sets the baseline level.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn load(input: &InputArgs) -> Result<(Colloscope, Vec<Room>, ScheduleOptions)> {
    let json = read_input(&input.colloscope)?;
    let colloscope = Colloscope::from_json(&json).with_context(|| {
        format!("Failed to parse colloscope: {}", input.colloscope.display())
    })?;

    let rooms = match &input.rooms {
        Some(path) => colloscope::rooms_from_json(&read_input(path)?)
            .with_context(|| format!("Failed to parse rooms: {}", path.display()))?,
        None => Vec::new(),
    };

    let options = ScheduleOptions {
        timezone: parse_timezone(&input.timezone)?,
        school_year: input.school_year,
        policy: input.policy,
    };
    info!(
        students = colloscope.students.len(),
        appointments = colloscope.appointments.len(),
        rooms = rooms.len(),
        "colloscope loaded"
    );
    Ok((colloscope, rooms, options))
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }
        None => {
            io::stdout()
                .write_all(content.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
