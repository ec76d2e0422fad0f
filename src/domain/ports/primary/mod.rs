pub mod list_visible_nurses;
