pub mod components;
pub mod icon;
pub mod scene;
