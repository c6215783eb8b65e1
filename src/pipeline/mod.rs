pub mod ingest;
pub mod normalize;
pub mod numeric;
pub mod report;
pub mod risk;
pub mod workload;
