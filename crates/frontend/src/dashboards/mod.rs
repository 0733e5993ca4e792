pub mod d001_field_stats;

pub use d001_field_stats::ui::FieldStatsDashboard;
