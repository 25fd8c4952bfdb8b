mod file_discovery_tests;
