pub mod report;
pub mod risk;
pub mod session;
pub mod table;
pub mod value;
pub mod wellness;
pub mod workload;

use crate::pipeline::normalize::Normalized;

pub type GpsTable = Normalized<session::SessionRecord>;
pub type WellnessTable = Normalized<wellness::WellnessRecord>;
