//! File helpers built on the `data-stream` transfer primitives.

mod copy;
mod file;
mod size;
mod urls;

pub use crate::copy::{copy_file, copy_input_to_file, copy_to_file};
pub use crate::file::{
    content_equals_ignore_eol, create_parent_directories, force_mkdir,
    open_input, open_output, read_file, read_lines, touch, wait_for,
    write_byte_array_to_file, write_lines, write_string_to_file,
};
pub use crate::size::{
    byte_count_to_display_size, ONE_EB, ONE_GB, ONE_KB, ONE_MB, ONE_PB,
    ONE_TB,
};
pub use crate::urls::{
    copy_url_to_file, copy_url_to_file_with_timeouts, to_file, to_urls,
};
pub use url::Url;
