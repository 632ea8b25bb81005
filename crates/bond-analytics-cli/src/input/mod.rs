pub mod csv_file;
pub mod file;
pub mod stdin;
