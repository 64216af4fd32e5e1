//! Listing cards, booking dialogs and the rewards surfaces.
pub mod book_card;
pub mod book_detail_dialog;
pub mod book_reserve_dialog;
pub mod confirmation;
pub mod contact_fields;
pub mod event_card;
pub mod event_info_dialog;
pub mod fields;
pub mod issues;
pub mod leaderboard_dialog;
pub mod points_display;
pub mod printer_booking_dialog;
pub mod printer_card;
pub mod printer_detail_dialog;
pub mod register_dialog;
pub mod rewards_dialog;
pub mod search_bar;
