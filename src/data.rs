pub mod student;

/// Student identifiers are client-assigned positive integers.
pub type StudentId = u32;
