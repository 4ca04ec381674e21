mod profile_table;

pub use profile_table::StaticProfileTable;
