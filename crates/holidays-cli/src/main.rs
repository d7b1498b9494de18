//! holidays-kr - Korean public holiday publisher
//!
//! Validates the yearly holiday and anniversary datasets and publishes
//! them as JSON, CSV and iCalendar files.
//!
//! ## Quick Start
//!
//! ```bash
//! # Check the datasets
//! holidays-kr validate --data data
//!
//! # Regenerate every output file
//! holidays-kr export --data data --output public
//!
//! # Write a starter configuration
//! holidays-kr config init
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
