//! XLSX reading utilities.

mod reader;

pub use reader::{data_to_cell, read_xlsx_dataset};
