pub mod target_tests;
