//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `PaymentProcessor` which acts as the primary
//! entry point for applying payments against stored invoices.

pub mod processor;
