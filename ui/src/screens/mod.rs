// This file makes the screen modules available to the rest of the application.

pub mod checkout;
pub mod click_me;
pub mod home;
pub mod statistics;
