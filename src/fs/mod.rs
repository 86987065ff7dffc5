pub mod link;
pub mod meta;
pub mod paths;

pub use link::{open_dir_nofollow, remove_existing, symlink_in};
pub use meta::{is_dir_following, kind_of};
pub use paths::{join, link_target, normalize_root, relative_target, split_segments};
