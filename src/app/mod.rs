pub mod docs;
pub mod openapi;
pub mod router;
pub mod ui;
