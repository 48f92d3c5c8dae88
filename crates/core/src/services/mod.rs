pub mod aggregation_service;
pub mod chart_service;
pub mod export_service;
pub mod filter_service;
pub mod grouping;
pub mod options_service;
pub mod report_service;
pub mod table_service;
