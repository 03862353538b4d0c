pub mod app_state_builder;
pub mod profile_test_fixtures;
pub mod stubs;
