//! Integration Tests Module
//!
//! End-to-end tests for gene resolution and the add-gene flow, driven
//! through the public API with the in-memory collaborators.


// Controller, dispatch and store lifecycle tests
mod add_flow_test;
