pub mod report;
pub mod ticket;

pub use report::BranchReport;
pub use ticket::extract_ticket;
