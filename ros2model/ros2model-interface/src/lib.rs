//! ROS 2 interface definition files → canonical [`ros2model_core`] model.
//!
//! # Pipeline
//!
//! ```text
//! <share>/msg/*.msg, srv/*.srv, action/*.action
//!   └─ scan            – list files of one extension
//!       └─ parser      – fold lines into per-section field maps
//!           ├─ lex      – classify one line: field, comment, constant, blank, malformed
//!           └─ annotate – quote user-defined types
//! ```
//!
//! Constants are dropped, array bounds are erased to `[]`, and
//! `pkg/Type` references become `"pkg.Type"`.

mod annotate;
mod error;
mod lex;
mod parser;
mod scan;
mod section;

pub use annotate::{annotate_type, is_user_defined};
pub use error::InterfaceError;
pub use lex::{LineClass, SkipReason, classify_line, normalize_array_brackets};
pub use parser::{
    Parsed, parse_action, parse_action_file, parse_msg, parse_msg_file, parse_srv,
    parse_srv_file,
};
pub use scan::{
    AMENT_PREFIX_PATH, find_package_share, package_share_directory, scan_action_dir, scan_msg_dir,
    scan_package, scan_srv_dir, spec_files,
};
pub use section::{ActionSection, MessageSection, SectionState, ServiceSection};
