// Adapters layer: concrete implementations of the collaborators around the extraction core.

pub mod html;
pub mod http;
pub mod report;
pub mod vendor_list;
