pub mod app;
pub mod cipher_panel;
pub mod menu_panel;
pub mod rps_panel;
pub mod settings;
pub mod settings_io;
pub mod table_panel;
pub mod view;
