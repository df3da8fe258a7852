pub mod a001_menu_catalog;
