// Domain layer - plain data types, no I/O
pub mod charts;
pub mod launch;
