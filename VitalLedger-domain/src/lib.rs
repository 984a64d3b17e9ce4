// VitalLedger Domain
// Authentication gate, error taxonomy and domain services for the API.

// API-key authentication middleware
pub mod auth;

// Central error type and its status mapping
pub mod error;

// Domain services
pub mod services;
