mod document_extractor_tests;
mod replay_property_tests;
mod utils;
