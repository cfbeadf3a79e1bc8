pub mod design_system;
pub mod home;
