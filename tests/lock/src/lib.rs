//! Shared fixtures for the wayfinder lock tests.
