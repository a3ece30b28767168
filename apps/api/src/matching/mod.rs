// Candidate matching engine.
// Salary parsing, experience classification, tiered role scoring and the
// ranking pipeline. No I/O here apart from the handler's directory fetch.

pub mod categories;
pub mod experience;
pub mod handlers;
pub mod match_score;
pub mod models;
pub mod pipeline;
pub mod salary;
