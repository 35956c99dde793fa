pub mod outcome_writer;
pub mod settings_reader;
