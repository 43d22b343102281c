use std::path::PathBuf;
use std::process;

use clap::Parser;
use cses::{CsesReader, is_cses_file};

#[derive(Parser)]
#[command(name = "cses")]
#[command(about = "Print the subjects and schedules of a CSES document", long_about = None)]
struct Cli {
    /// Path to the CSES YAML document.
    path: PathBuf,
}

fn main() {
    env_logger::init();

    // Any arity problem gets the plain usage text on stdout, exit 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            println!("Usage: cses <path>");
            println!("Prints the subjects and schedules of the CSES document at <path>.");
            process::exit(1);
        }
    };

    if !is_cses_file(&cli.path) {
        println!("Not a valid CSES file");
        process::exit(1);
    }

    let reader = match CsesReader::from_path(&cli.path) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    println!("All Subjects:");
    for subject in reader.subjects() {
        println!("{} ({})", subject.name, subject.simplified_name.as_deref().unwrap_or(""));
        println!("- Teacher: {}", subject.teacher.as_deref().unwrap_or(""));
        println!("- Room: {}", subject.room.as_deref().unwrap_or(""));
    }

    println!();
    println!("All Schedules:");
    for schedule in reader.schedules() {
        println!("{} ({} {}):", schedule.name, schedule.enable_day, schedule.weeks);
        for class in &schedule.classes {
            println!("- {} ({} - {})", class.subject, class.start_time, class.end_time);
        }
    }
}
