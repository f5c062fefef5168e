//! Job-listing ingestion.
//!
//! Loads the scraped listing CSV into [`jobs_model::RawRecord`]s and builds the
//! exploratory profile shown before normalization.

pub mod csv_table;
pub mod error;
pub mod profile;
pub mod records;

pub use csv_table::{CsvTable, read_csv_table};
pub use error::{IngestError, Result};
pub use profile::{DatasetProfile, profile_table};
pub use records::{ListingColumns, LoadedListings, load_listings, records_from_table};
