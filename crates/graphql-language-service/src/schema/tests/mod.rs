mod schema_extender_tests;
mod utils;
