pub mod answer;
pub mod dataset;
pub mod navigation;
pub mod shuffle;
