//! envtrack - An in-memory API for tracking carbon emissions, water wastage
//! and deforestation impact

pub mod cli;
pub mod http_server;
pub mod logging;
pub mod records;
