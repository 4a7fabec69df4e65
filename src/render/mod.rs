//! Rendering module for converting documents to RTF and JSON.

mod encode;
mod json;
mod result;
mod rtf;

pub use encode::{escape_unicode, write_escaped};
pub use json::{to_json, JsonFormat};
pub use result::{RenderResult, RenderStats};
pub use rtf::{to_rtf, to_rtf_with_stats, RtfRenderer};
