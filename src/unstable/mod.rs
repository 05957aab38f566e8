pub mod bubble;
pub mod quicksort_hoare;
pub mod quicksort_lomuto;
pub mod quicksort_median3;
pub mod selection;

mod partition;
