//! Spreadsheet append client, authorized with a minted access token.

pub mod append;

pub use append::SheetsClient;
