//! Thermal systems models.
//!
//! This module contains models of heat exchangers between mixture streams.

pub mod hx;
