pub mod controller;
pub mod router;
pub mod service;

pub use router::{init_admin_logs_router, init_interns_router};
