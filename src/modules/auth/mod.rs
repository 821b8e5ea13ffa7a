pub mod controller;
pub mod router;
pub mod service;

pub use router::{init_admin_auth_router, init_student_auth_router};
