mod read_content_tests;
