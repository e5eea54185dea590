use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use trust_fund::{Amount, NewDonation, PaymentMethod, PaymentStatus, create_donation, initialize_db};

/// A utility for creating a test database for the trust fund web server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Completed donations to seed the database with, so that distributions can be recorded.
const TEST_DONATIONS: [(&str, i64, &str, PaymentMethod); 4] = [
    ("Asha", 5_000, "education", PaymentMethod::Upi),
    ("Vikram", 2_500, "healthcare", PaymentMethod::Card),
    ("Meera", 1_200, "food", PaymentMethod::NetBanking),
    ("Arjun", 800, "shelter", PaymentMethod::Upi),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating completed test donations...");

    for (donor_name, rupees, category, payment_method) in TEST_DONATIONS {
        create_donation(
            NewDonation {
                donor_name: donor_name.to_owned(),
                donor_email: format!("{}@example.com", donor_name.to_lowercase()),
                amount: Amount::from_rupees(rupees),
                category: category.to_owned(),
                payment_method,
                payment_status: PaymentStatus::Completed,
                message: None,
            },
            &conn,
        )?;
    }

    println!("Success!");

    Ok(())
}
