//! Small helpers shared by the report model & runners

pub mod measurements;
