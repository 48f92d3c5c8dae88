pub mod aggregate;
pub mod chart;
pub mod dataset;
pub mod options;
pub mod record;
pub mod report;
pub mod selection;
pub mod session;
pub mod settings;
pub mod table;
