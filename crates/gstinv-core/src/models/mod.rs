//! Data models for invoices, tax predictions and configuration.

pub mod config;
pub mod invoice;
pub mod tax;
