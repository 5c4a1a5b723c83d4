// Domain models
// Static navigation tables and the derivations over them

pub mod navigation;

pub use navigation::{
    compute_active_entry, legacy_target_path, render_menu, ExternalLink, MenuItem, PageEntry,
    PageId, CANONICAL_ROOT_PATH, EXTERNAL_LINKS, PAGES, ROOT_PATH,
};
