// Integration test modules
pub mod export_tests;
pub mod graph_build_tests;
pub mod insights_tests;
pub mod property_tests;

// Shared fixture builder
pub mod fixtures;
