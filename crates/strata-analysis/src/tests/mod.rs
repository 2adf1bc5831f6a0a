mod edge_cases;
mod property_tests;
mod scenarios;
