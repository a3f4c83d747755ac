//! Rental Viewer Common Library
//!
//! CLIとWeb(WASM)で共有される型とビューロジック（I/Oなし）

pub mod types;
pub mod error;
pub mod endpoint;
pub mod payload;
pub mod filter;
pub mod pagination;
pub mod generation;
pub mod detail;
pub mod grid;

pub use types::{FlattenedRow, RentalContract, RentalDate, VehicleRecord};
pub use error::{Error, FetchError, Result};
pub use endpoint::{parse_identifier, ApiEndpoint, ContractId, DEFAULT_API_BASE};
pub use payload::{decode_vehicles, flatten_rows, vehicles_from_value};
pub use filter::{FilterField, FilterInputs, RowFilter};
pub use pagination::{GridPager, PageCursor, PageSize};
pub use generation::{FetchGeneration, FetchTicket};
pub use detail::{empty_message, DetailStatus, DetailView};
pub use grid::{GridView, GRID_COLUMNS};
