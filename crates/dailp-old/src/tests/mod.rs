mod upload_tests;
