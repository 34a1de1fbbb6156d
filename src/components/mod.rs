pub mod guest_list;
pub mod help;
pub mod helpers;
pub mod key_hints;
pub mod result_banner;
