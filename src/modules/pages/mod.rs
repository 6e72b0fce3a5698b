//! Landing and beta-closed pages, the two redirect targets of the request gate.

pub mod controller;
pub mod router;
pub mod view;
