mod file_store_tests;
mod office_restore_tests;
mod property_tests;
