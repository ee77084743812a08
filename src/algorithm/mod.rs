//! Algorithm implementations for the intake workflow
//!
//! This module contains the triage scoring algorithm: keyword matching over
//! free-text notes, symptom label classification, vital sign thresholds and
//! the decision table that turns severity counts into a tier.

pub mod triage;
