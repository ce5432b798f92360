pub mod spinner;
pub mod status_line;
