//! 車両API（ブラウザのfetch）

mod vehicles;

pub use vehicles::fetch_vehicles;
