mod client_tests;
mod panel_tests;
