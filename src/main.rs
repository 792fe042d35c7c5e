use std::{
    fs,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use clap::{Parser, Subcommand};
use rusqlite::Connection;
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use pocketledger::{
    export_transactions, import_transactions, initialize_db,
    stores::sqlite::SQLiteTransactionStore,
};

/// Command line tool for managing a pocketledger database.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long)]
    db_path: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import transactions from a CSV backup file.
    Import {
        /// File path to the CSV backup to read.
        csv_path: PathBuf,
    },
    /// Export all transactions to a CSV backup file.
    Export {
        /// File path to write the CSV backup to.
        csv_path: PathBuf,
    },
}

fn main() {
    setup_logging();

    let args = Args::parse();

    let connection = Connection::open(&args.db_path).expect("Could not open database");
    initialize_db(&connection).expect("Could not initialize database");
    let mut store = SQLiteTransactionStore::new(Arc::new(Mutex::new(connection)));

    match args.command {
        Command::Import { csv_path } => {
            let csv_text = fs::read_to_string(&csv_path).expect("Could not read CSV file");

            let imported = import_transactions(&mut store, &csv_text)
                .expect("Could not import transactions");

            tracing::info!(
                "Imported {imported} transactions from {}",
                csv_path.display()
            );
        }
        Command::Export { csv_path } => {
            let csv_text = export_transactions(&store).expect("Could not export transactions");

            fs::write(&csv_path, csv_text).expect("Could not write CSV file");

            tracing::info!("Exported transactions to {}", csv_path.display());
        }
    }
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_filter(filter::LevelFilter::INFO),
        )
        .init();
}
