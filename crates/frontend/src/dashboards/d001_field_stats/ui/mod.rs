mod dashboard;

pub use dashboard::FieldStatsDashboard;
