mod gql_error_tests;
