//! UIコンポーネント

pub mod header;
pub mod identifier_form;
pub mod detail_viewer;
pub mod grid_viewer;
pub mod filter_bar;
pub mod data_grid;
