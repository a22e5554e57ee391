//! Integration tests for the rustveil workspace, one test target per crate
//! plus end-to-end pipeline runs.
