pub mod d001_field_stats;
