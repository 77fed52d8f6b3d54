use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use billed_rs::{BillData, BillRecord, create_bill, initialize_db};

/// A utility for creating a test database for the Billed web server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// The email of the employee the test bills belong to.
    #[arg(long, short, default_value = "employee@test.tld")]
    email: String,
}

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

    println!("Creating test bills for {}...", args.email);

    let test_bills = [
        ("Hôtel et logement", "séminaire", "2004-04-04", 400.0, "pending"),
        ("Transports", "train", "2001-01-01", 100.0, "refused"),
        ("Services en ligne", "abonnement", "2003-03-03", 300.0, "accepted"),
        ("Restaurants et bars", "déjeuner client", "2002-02-02", 200.0, "refused"),
    ];

    for (index, (expense_type, name, date, amount, status)) in test_bills.into_iter().enumerate()
    {
        let bill = BillRecord::new(
            format!("test-bill-{}", index + 1),
            BillData {
                email: args.email.clone(),
                expense_type: expense_type.to_owned(),
                name: name.to_owned(),
                date: date.to_owned(),
                amount,
                vat: Some(format!("{}", amount * 0.2)),
                pct: Some(20),
                commentary: None,
                status: status.to_owned(),
                comment_admin: None,
                file_url: Some("/static/receipt-example.png".to_owned()),
                file_name: Some("receipt-example.png".to_owned()),
            },
        );

        create_bill(&bill, &conn)?;
    }

    println!("Success!");

    Ok(())
}
