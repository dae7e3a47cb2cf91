pub mod assessment;
pub mod severity;
pub mod subject;
pub mod trend;
