// VitalLedger Data
// This crate handles document-store access for the VitalLedger collections.

// Database connection management
pub mod database;

// Repository implementations for data access
pub mod repository;

// Data storage models
pub mod models;
