//! Unit tests for the delivery dispatcher.
