pub mod insertion_binary;
pub mod insertion_linear;
pub mod merge;
