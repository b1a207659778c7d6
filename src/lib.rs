//! paramsheet - parameter workbook to provisioning JSON
//!
//! Reads the appliance parameter sheets of an `.xlsx` workbook, rebuilds the
//! nested settings each sheet encodes in its label layout, and maps them to
//! the JSON documents of the provisioning pipeline.
//!
//! # Example
//!
//! ```no_run
//! use paramsheet::excel::WorkbookImporter;
//! use paramsheet::extractor::{extract, ExtractOptions};
//!
//! let workbook = WorkbookImporter::new("parameters.xlsx").import()?;
//! let edges = extract(workbook.sheet("NSX Edge Deploy")?, &ExtractOptions::default())?;
//!
//! println!("Edges: {}", edges.len());
//! # Ok::<(), paramsheet::error::SheetError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod extractor;
pub mod mapper;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{SheetError, SheetResult};
pub use types::{Node, Scalar, Tree};
