//! Integration tests for the configuration system
