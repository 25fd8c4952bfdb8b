mod autocomplete_tests;
mod definition_tests;
mod hover_tests;
mod references_tests;
mod type_info_tests;
mod utils;
