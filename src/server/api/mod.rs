pub mod addon_controller;
pub mod health_controller;
pub mod home_controller;
