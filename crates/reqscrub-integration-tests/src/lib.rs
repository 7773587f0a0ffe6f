//! Integration tests for reqscrub
//!
//! End-to-end coverage of the report pipeline with the request-data
//! scrubbing stage registered. The actual tests live under `tests/`.
