mod parser_error_tests;
mod schema_parser_tests;
mod utilities_tests;
mod utils;
