pub mod picker;
pub mod question_card;
pub mod status_bar;
