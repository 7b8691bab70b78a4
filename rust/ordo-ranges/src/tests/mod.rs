mod composite_tests;
