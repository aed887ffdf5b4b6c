//! Integration Tests Module
//!
//! End-to-end tests for the Mattermost channel against a loopback stub
//! webhook server. No external network access is needed.


// reqwest client wire-format and transport tests
mod http_api_test;

// Notifier + config file + HTTP client together
mod notifier_test;
