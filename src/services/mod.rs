pub mod deload;
pub mod output_formatter;
pub mod percentage_tables;
pub mod program_generator;
pub mod recommendation;
pub mod split;
