pub mod auth;
pub mod interns;
pub mod students;
