mod resolve_failure_tests;
mod resolve_object_tests;
mod utils;
