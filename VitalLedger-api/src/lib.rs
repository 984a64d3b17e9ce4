// VitalLedger-api lib.rs
//
// Public HTTP layer for the VitalLedger API.

// Public modules
pub mod api;
pub mod entities;
pub mod openapi;
