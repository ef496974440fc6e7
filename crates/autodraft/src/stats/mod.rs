// Season stat file I/O: reading season files, naming their year, writing output.

pub mod expected;
pub mod season;
pub mod season_year;
