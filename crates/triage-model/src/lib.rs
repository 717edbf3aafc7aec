#![deny(unsafe_code)]

pub mod alert;
pub mod cell;
pub mod error;
pub mod ids;
pub mod record;
pub mod severity;
pub mod sheet;

pub use alert::{Alert, AlertStatus, VariableReading};
pub use cell::{CellValue, SheetCell};
pub use error::{ModelError, Result};
pub use ids::{BatchId, PatientId, RowId};
pub use record::{AggregatedPatient, PatientRecord};
pub use severity::{HealthStatus, Severity};
pub use sheet::{Workbook, Worksheet};
